// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Capacity Aggregator

//! Crew carrying capacity and the requested-bags display figure.
//!
//! [`total_bags`] sums what was *requested*, not what was packed: every
//! requested painting counts as half a bag even though the allocator carries
//! at most one. The two totals are reported separately on purpose; see
//! [`crate::allocation::AllocationResult::total_bags`] for the packed figure.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::{Catalog, BAG_CAPACITY};
use crate::config::Configuration;
use crate::core_types::Units;

/// participants × 1800 units.
pub fn capacity_budget(config: &Configuration) -> Units {
    Decimal::from(config.crew_size()) * BAG_CAPACITY
}

/// Raw requested units across all types, ignoring whether they fit.
pub fn requested_units(catalog: &Catalog, config: &Configuration) -> Units {
    catalog
        .secondary_targets
        .iter()
        .map(|t| Decimal::from(config.requested.get(t.key)) * t.capacity_cost())
        .sum()
}

/// Requested units clamped to the budget, in bags, rounded to 2 decimals.
pub fn total_bags(catalog: &Catalog, config: &Configuration) -> Decimal {
    let units = requested_units(catalog, config).min(capacity_budget(config));
    (units / BAG_CAPACITY).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
