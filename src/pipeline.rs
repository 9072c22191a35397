// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Pipeline

//! Catalog → valuation → allocation → financial → payout, run over one
//! normalized snapshot of the caller's configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{self, AllocationResult};
use crate::capacity;
use crate::catalog::Catalog;
use crate::config::{Configuration, Notice, SHARE_SLOTS};
use crate::core_types::Difficulty;
use crate::financial::{self, FinancialSummary};
use crate::payout::{self, PayoutDistribution};

/// The resolved heist setup a run was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeistSetup {
    pub participants: u32,
    pub difficulty: Difficulty,
    pub time_bonus: bool,
    pub primary_key: String,
    pub primary_name: String,
    /// Normalized shares, one per slot.
    pub shares: [u32; SHARE_SLOTS],
}

/// Everything a presentation layer needs, with nothing left to recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeistOutcome {
    pub setup: HeistSetup,
    pub allocation: AllocationResult,
    pub summary: FinancialSummary,
    pub payouts: PayoutDistribution,
    /// Requested bags clamped to capacity (display figure).
    pub total_bags: Decimal,
    pub notices: Vec<Notice>,
}

/// Run the full pipeline. Total: never fails, never mutates `config`.
pub fn compute(catalog: &Catalog, config: &Configuration) -> HeistOutcome {
    let snapshot = config.snapshot(catalog);
    let config = &snapshot.config;

    let budget = capacity::capacity_budget(config);
    let allocation = allocation::allocate(catalog, config, budget);
    let summary = financial::summarize(catalog, config, &allocation);
    let payouts = payout::distribute(summary.net_total, config);
    let total_bags = capacity::total_bags(catalog, config);

    let (primary_key, primary_name) = catalog
        .primary(&config.primary_target)
        .map(|t| (t.key.as_str().to_string(), t.name.clone()))
        .unwrap_or_else(|| (config.primary_target.clone(), String::new()));

    if !snapshot.notices.is_empty() {
        tracing::warn!(count = snapshot.notices.len(), "configuration normalized with recoveries");
    }

    HeistOutcome {
        setup: HeistSetup {
            participants: config.participants,
            difficulty: config.difficulty,
            time_bonus: config.time_bonus,
            primary_key,
            primary_name,
            shares: config.shares,
        },
        allocation,
        summary,
        payouts,
        total_bags,
        notices: snapshot.notices,
    }
}
