// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Payout Distribution

//! Net proceeds split across the crew by percentage share.
//!
//! No value is created or clamped here: shares are normalized before this
//! stage runs, and each payout is floored on its own, so the payouts never
//! sum to more than the net.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::{Configuration, SHARE_SLOTS};
use crate::core_types::Dollars;

/// One amount per share slot; slots past the crew size stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayoutDistribution {
    pub amounts: [Dollars; SHARE_SLOTS],
}

impl PayoutDistribution {
    pub fn total(&self) -> Dollars {
        self.amounts.iter().copied().sum()
    }

    pub fn get(&self, slot: usize) -> Dollars {
        self.amounts.get(slot).copied().unwrap_or_default()
    }
}

/// `floor(net × share / 100)` for every active slot.
pub fn distribute(net_total: Dollars, config: &Configuration) -> PayoutDistribution {
    let mut amounts = [Dollars::zero(); SHARE_SLOTS];
    for (slot, share) in config.active_shares().iter().enumerate() {
        let fraction = Decimal::from(*share) / dec!(100);
        amounts[slot] = Dollars::whole(net_total.0 * fraction);
    }
    PayoutDistribution { amounts }
}

/// Display label of a share slot.
pub fn slot_label(slot: usize) -> String {
    if slot == 0 {
        "Leader".to_string()
    } else {
        format!("Member {}", slot)
    }
}
