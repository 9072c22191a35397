// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Reference Tables

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::catalog::{Catalog, BAG_CAPACITY};
use crate::config::Configuration;
use crate::core_types::{Dollars, PrimaryKey, SecondaryKey};
use crate::valuation;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryRow {
    pub key: PrimaryKey,
    pub name: String,
    pub standard: Dollars,
    pub hard: Dollars,
}

/// Average secondary values under the current bonus state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryRow {
    pub key: SecondaryKey,
    pub name: String,
    pub stack_value: Dollars,
    /// Value of a bag filled with this type only.
    pub full_bag_value: Dollars,
    /// Share of one bag a full table occupies, in percent.
    pub bag_fill_percent: Decimal,
}

pub fn primary_rows(catalog: &Catalog) -> Vec<PrimaryRow> {
    catalog
        .primary_targets
        .iter()
        .map(|t| PrimaryRow {
            key: t.key,
            name: t.name.clone(),
            standard: t.value.standard,
            hard: t.value.hard,
        })
        .collect()
}

/// Uses the raw table units, so paintings read as a half bag either way.
pub fn secondary_rows(catalog: &Catalog, config: &Configuration) -> Vec<SecondaryRow> {
    catalog
        .secondary_targets
        .iter()
        .filter(|t| !t.full_table_units.is_zero())
        .map(|t| {
            let per_stack = valuation::stack_value(catalog, t.key, config);
            SecondaryRow {
                key: t.key,
                name: t.name.clone(),
                stack_value: Dollars::whole(per_stack.0),
                full_bag_value: Dollars::whole(per_stack.0 * BAG_CAPACITY / t.full_table_units),
                bag_fill_percent: (t.full_table_units / BAG_CAPACITY * dec!(100))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            }
        })
        .collect()
}
