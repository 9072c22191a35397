// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Financial Derivation

//! Gross → fees → net.
//!
//! ```text
//! gross   = floor(primary + Σ secondary + office safe)
//! fencing = floor(gross × 0.10)
//! pavel   = floor(gross × 0.02)
//! net     = gross − fencing − pavel
//! ```
//!
//! Each amount is truncated as it is derived, never only at the end. The
//! elite challenge bonus is reported next to the summary and never enters
//! gross or net.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationResult;
use crate::catalog::Catalog;
use crate::config::Configuration;
use crate::core_types::Dollars;

/// Fencing fee rate (10%).
pub const FENCING_FEE_RATE: Decimal = dec!(0.10);
/// Pavel's cut (2%).
pub const PAVEL_FEE_RATE: Decimal = dec!(0.02);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub gross_total: Dollars,
    pub fencing_fee: Dollars,
    pub pavel_fee: Dollars,
    pub net_total: Dollars,
    /// Paid to every participant by the game itself; informational only.
    pub elite_bonus_per_participant: Dollars,
}

/// Derive the summary for a normalized configuration and its allocation.
pub fn summarize(
    catalog: &Catalog,
    config: &Configuration,
    allocation: &AllocationResult,
) -> FinancialSummary {
    let primary = catalog.primary_value(&config.primary_target, config.difficulty);
    let secondary = allocation.total_value();

    let gross_total = Dollars::whole(primary.0 + secondary.0 + catalog.office_safe.0);
    let fencing_fee = Dollars::whole(gross_total.0 * FENCING_FEE_RATE);
    let pavel_fee = Dollars::whole(gross_total.0 * PAVEL_FEE_RATE);
    let net_total = gross_total - fencing_fee - pavel_fee;

    tracing::debug!(
        gross = %gross_total.0,
        fencing = %fencing_fee.0,
        pavel = %pavel_fee.0,
        net = %net_total.0,
        "financial summary derived"
    );

    FinancialSummary {
        gross_total,
        fencing_fee,
        pavel_fee,
        net_total,
        elite_bonus_per_participant: catalog.elite_bonus(config.difficulty),
    }
}
