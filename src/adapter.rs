//! Adapter layer: converts the engine's Decimal outputs into f64 views for
//! JavaScript. `serde-wasm-bindgen` would otherwise hand `Decimal` over as a
//! string.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{Notice, SHARE_SLOTS};
use crate::core_types::{Dollars, PrimaryKey, SecondaryKey};
use crate::pipeline::{HeistOutcome, HeistSetup};
use crate::reference::{PrimaryRow, SecondaryRow};

/// Convert Decimal to f64 (lossy, display only).
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

pub fn dollars(d: Dollars) -> f64 {
    from_decimal(d.0)
}

#[derive(Debug, Clone, Serialize)]
pub struct LootView {
    pub key: SecondaryKey,
    pub name: String,
    pub stacks: f64,
    pub units: f64,
    pub bags: f64,
    pub clicks: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub gross_total: f64,
    pub fencing_fee: f64,
    pub pavel_fee: f64,
    pub net_total: f64,
    pub elite_bonus_per_participant: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeView {
    pub setup: HeistSetup,
    pub loot: Vec<LootView>,
    pub summary: SummaryView,
    pub payouts: [f64; SHARE_SLOTS],
    pub total_bags: f64,
    /// Bags actually packed; may be below `total_bags` when extra
    /// paintings were requested.
    pub allocated_bags: f64,
    pub notices: Vec<Notice>,
    pub messages: Vec<String>,
}

impl From<&HeistOutcome> for OutcomeView {
    fn from(outcome: &HeistOutcome) -> Self {
        let summary = &outcome.summary;
        Self {
            setup: outcome.setup.clone(),
            loot: outcome
                .allocation
                .iter()
                .map(|r| LootView {
                    key: r.key,
                    name: r.name.clone(),
                    stacks: from_decimal(r.stacks),
                    units: from_decimal(r.units),
                    bags: from_decimal(r.bags),
                    clicks: r.clicks,
                    value: dollars(r.value),
                })
                .collect(),
            summary: SummaryView {
                gross_total: dollars(summary.gross_total),
                fencing_fee: dollars(summary.fencing_fee),
                pavel_fee: dollars(summary.pavel_fee),
                net_total: dollars(summary.net_total),
                elite_bonus_per_participant: dollars(summary.elite_bonus_per_participant),
            },
            payouts: outcome.payouts.amounts.map(dollars),
            total_bags: from_decimal(outcome.total_bags),
            allocated_bags: from_decimal(outcome.allocation.total_bags()),
            notices: outcome.notices.clone(),
            messages: outcome.notices.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrimaryRowView {
    pub key: PrimaryKey,
    pub name: String,
    pub standard: f64,
    pub hard: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecondaryRowView {
    pub key: SecondaryKey,
    pub name: String,
    pub stack_value: f64,
    pub full_bag_value: f64,
    pub bag_fill_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceView {
    pub primary: Vec<PrimaryRowView>,
    pub secondary: Vec<SecondaryRowView>,
}

pub fn reference_view(primary: &[PrimaryRow], secondary: &[SecondaryRow]) -> ReferenceView {
    ReferenceView {
        primary: primary
            .iter()
            .map(|r| PrimaryRowView {
                key: r.key,
                name: r.name.clone(),
                standard: dollars(r.standard),
                hard: dollars(r.hard),
            })
            .collect(),
        secondary: secondary
            .iter()
            .map(|r| SecondaryRowView {
                key: r.key,
                name: r.name.clone(),
                stack_value: dollars(r.stack_value),
                full_bag_value: dollars(r.full_bag_value),
                bag_fill_percent: from_decimal(r.bag_fill_percent),
            })
            .collect(),
    }
}
