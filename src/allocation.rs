// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Allocation Engine

//! Fractional greedy packing of secondary loot into the crew's bags.
//!
//! Types are taken in descending value density (dollars per capacity unit).
//! Every type except paintings may be taken fractionally, which makes the
//! greedy order optimal for the divisible part of the problem. Paintings are
//! a single discrete half-bag object: at most one is ever carried, however
//! many were requested and however much room remains.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, SecondaryTarget, BAG_CAPACITY};
use crate::config::Configuration;
use crate::core_types::{Dollars, SecondaryKey, Units};
use crate::valuation;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One carried secondary type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub key: SecondaryKey,
    pub name: String,
    /// Stacks carried; fractional for a partially filled final stack.
    pub stacks: Decimal,
    pub units: Units,
    /// Bag equivalent of `units` (half a bag per painting).
    pub bags: Decimal,
    /// Grab clicks, rounded to the nearest whole click.
    pub clicks: u32,
    /// Untruncated value of the carried stacks.
    pub value: Dollars,
}

/// Carried loot in the order it should be grabbed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    pub records: Vec<AllocationRecord>,
}

impl AllocationResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.records.iter()
    }

    pub fn total_units(&self) -> Units {
        self.records.iter().map(|r| r.units).sum()
    }

    pub fn total_value(&self) -> Dollars {
        self.records.iter().map(|r| r.value).sum()
    }

    /// Bags actually carried. Can differ from the requested-bags display
    /// value in [`crate::capacity::total_bags`].
    pub fn total_bags(&self) -> Decimal {
        self.records.iter().map(|r| r.bags).sum()
    }

    pub fn stacks_of(&self, key: SecondaryKey) -> Decimal {
        self.records
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.stacks)
            .unwrap_or(Decimal::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Packing
// ---------------------------------------------------------------------------

struct Candidate<'a> {
    target: &'a SecondaryTarget,
    requested: Decimal,
    cost: Units,
    density: Decimal,
}

/// Pack the requested loot of a normalized configuration into `budget`
/// capacity units.
pub fn allocate(catalog: &Catalog, config: &Configuration, budget: Units) -> AllocationResult {
    let mut candidates: Vec<Candidate<'_>> = catalog
        .secondary_targets
        .iter()
        .filter_map(|target| {
            let requested = config.requested.get(target.key);
            if requested == 0 {
                return None;
            }
            let cost = target.capacity_cost();
            if cost <= Decimal::ZERO {
                tracing::warn!(loot = %target.key, "secondary target has no capacity cost, skipped");
                return None;
            }
            let per_stack = valuation::stack_value(catalog, target.key, config);
            Some(Candidate {
                target,
                requested: Decimal::from(requested),
                cost,
                density: per_stack.0 / cost,
            })
        })
        .collect();

    // Stable: equal densities keep catalog order.
    candidates.sort_by(|a, b| b.density.cmp(&a.density));

    let mut remaining = budget;
    let mut records = Vec::new();

    for candidate in candidates {
        if remaining <= Decimal::ZERO {
            break;
        }
        let target = candidate.target;

        let partial = !target.key.is_painting() && candidate.requested * candidate.cost > remaining;
        let (stacks, units) = if target.key.is_painting() {
            if remaining >= candidate.cost {
                (Decimal::ONE, candidate.cost)
            } else {
                (Decimal::ZERO, Decimal::ZERO)
            }
        } else if partial {
            // Partial final stack fills the bags exactly.
            (remaining / candidate.cost, remaining)
        } else {
            (candidate.requested, candidate.requested * candidate.cost)
        };

        if stacks <= Decimal::ZERO {
            continue;
        }

        let bags = if target.key.is_painting() {
            stacks * dec!(0.5)
        } else {
            units / BAG_CAPACITY
        };
        let clicks = (stacks * Decimal::from(target.clicks_per_stack))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0);
        let value = if partial {
            valuation::partial_value(catalog, target.key, units, candidate.cost, config)
        } else {
            valuation::secondary_value(catalog, target.key, stacks, config)
        };

        tracing::debug!(
            loot = %target.key,
            stacks = %stacks,
            units = %units,
            "secondary loot allocated"
        );

        remaining -= units;
        records.push(AllocationRecord {
            key: target.key,
            name: target.name.clone(),
            stacks,
            units,
            bags,
            clicks,
            value,
        });
    }

    AllocationResult { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Requests;

    fn config_with(participants: u32, requested: Requests) -> Configuration {
        Configuration {
            participants,
            requested,
            ..Configuration::default()
        }
    }

    fn budget(participants: u32) -> Units {
        Decimal::from(participants) * BAG_CAPACITY
    }

    #[test]
    fn nothing_requested_allocates_nothing() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration::default();
        assert!(allocate(&catalog, &config, budget(2)).is_empty());
    }

    #[test]
    fn single_type_is_capped_by_capacity() {
        let catalog = Catalog::cayo_perico();
        let config = config_with(4, Requests { cocaine: 20, ..Requests::default() });
        let result = allocate(&catalog, &config, budget(4));

        assert_eq!(result.records.len(), 1);
        let rec = &result.records[0];
        assert_eq!(rec.key, SecondaryKey::Cocaine);
        assert_eq!(rec.stacks, dec!(8));
        assert_eq!(rec.units, dec!(7200));
        assert_eq!(rec.bags, dec!(4));
        assert_eq!(rec.clicks, 80);
        assert_eq!(rec.value, Dollars(dec!(1602000)));
    }

    #[test]
    fn highest_density_goes_first() {
        let catalog = Catalog::cayo_perico();
        let config = config_with(
            2,
            Requests { cash: 2, weed: 1, gold: 1, cocaine: 1, ..Requests::default() },
        );
        let result = allocate(&catalog, &config, budget(2));
        let order: Vec<SecondaryKey> = result.iter().map(|r| r.key).collect();
        assert_eq!(
            order,
            vec![SecondaryKey::Gold, SecondaryKey::Cocaine, SecondaryKey::Weed, SecondaryKey::Cash]
        );
    }

    #[test]
    fn partial_final_stack_consumes_exactly_the_rest() {
        let catalog = Catalog::cayo_perico();
        let config = config_with(2, Requests { gold: 2, cocaine: 3, weed: 2, ..Requests::default() });
        let result = allocate(&catalog, &config, budget(2));

        // gold 2 x 1200 = 2400, cocaine takes the remaining 1200 units
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.stacks_of(SecondaryKey::Gold), dec!(2));
        assert_eq!(result.records[1].units, dec!(1200));
        assert_eq!(result.records[1].clicks, 13);
        assert_eq!(result.total_units(), dec!(3600));
        assert_eq!(result.stacks_of(SecondaryKey::Weed), Decimal::ZERO);
    }

    #[test]
    fn at_most_one_painting_is_carried() {
        let catalog = Catalog::cayo_perico();
        let config = config_with(2, Requests { paintings: 3, ..Requests::default() });
        let result = allocate(&catalog, &config, budget(2));

        assert_eq!(result.records.len(), 1);
        let rec = &result.records[0];
        assert_eq!(rec.stacks, Decimal::ONE);
        assert_eq!(rec.units, dec!(900));
        assert_eq!(rec.bags, dec!(0.5));
        assert_eq!(rec.clicks, 4);
        assert_eq!(rec.value, Dollars(dec!(168750)));
    }

    #[test]
    fn painting_needs_a_full_half_bag() {
        let catalog = Catalog::cayo_perico();
        // cocaine leaves 1800 - 2 * 900 = 0 units, nothing for the painting
        let config = config_with(1, Requests { cocaine: 2, paintings: 1, ..Requests::default() });
        let result = allocate(&catalog, &config, budget(1));
        assert_eq!(result.stacks_of(SecondaryKey::Paintings), Decimal::ZERO);

        // weed leaves 1800 - 2 * 675 = 450 units, still short of 900
        let config = config_with(1, Requests { weed: 2, paintings: 1, ..Requests::default() });
        let result = allocate(&catalog, &config, budget(1));
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.total_units(), dec!(1350));
    }

    #[test]
    fn painting_shortfall_lets_cheaper_loot_fill_the_gap() {
        let catalog = Catalog::cayo_perico();
        let config = config_with(1, Requests { weed: 2, paintings: 1, cash: 5, ..Requests::default() });
        let result = allocate(&catalog, &config, budget(1));
        let order: Vec<SecondaryKey> = result.iter().map(|r| r.key).collect();
        assert_eq!(order, vec![SecondaryKey::Weed, SecondaryKey::Cash]);
        assert_eq!(result.stacks_of(SecondaryKey::Cash), Decimal::ONE);
        assert_eq!(result.total_units(), dec!(1800));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut catalog = Catalog::cayo_perico();
        for target in catalog.secondary_targets.iter_mut() {
            target.full_table_units = dec!(900);
            target.base_value = Dollars(dec!(100000));
        }
        let config = config_with(
            4,
            Requests { gold: 1, cocaine: 1, weed: 1, paintings: 1, cash: 1 },
        );
        let result = allocate(&catalog, &config, budget(4));
        let order: Vec<SecondaryKey> = result.iter().map(|r| r.key).collect();
        assert_eq!(order, SecondaryKey::ALL.to_vec());
    }

    #[test]
    fn time_bonus_scales_value_not_order() {
        let catalog = Catalog::cayo_perico();
        // plain: weed 196.67/unit vs paintings 187.5/unit
        let mut config = config_with(2, Requests { weed: 1, paintings: 1, ..Requests::default() });
        let plain: Vec<_> = allocate(&catalog, &config, budget(2)).iter().map(|r| r.key).collect();
        assert_eq!(plain, vec![SecondaryKey::Weed, SecondaryKey::Paintings]);

        // both take the same multiplier, so density order holds
        config.time_bonus = true;
        let boosted = allocate(&catalog, &config, budget(2));
        assert_eq!(boosted.records[0].key, SecondaryKey::Weed);
        assert_eq!(boosted.records[0].value, Dollars(dec!(159300)));
    }

    #[test]
    fn zero_cost_fixture_entry_is_skipped() {
        let mut catalog = Catalog::cayo_perico();
        if let Some(cash) = catalog.secondary_targets.iter_mut().find(|t| t.key == SecondaryKey::Cash) {
            cash.full_table_units = Decimal::ZERO;
        }
        let config = config_with(2, Requests { cash: 4, ..Requests::default() });
        assert!(allocate(&catalog, &config, budget(2)).is_empty());
    }
}
