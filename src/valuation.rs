// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Valuation Pipeline

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::config::Configuration;
use crate::core_types::{Dollars, SecondaryKey};

/// Multiplier applied to secondary loot. With the time bonus active this is
/// the bonus of the *selected primary target*, not of the loot itself.
pub fn effective_bonus(catalog: &Catalog, config: &Configuration) -> Decimal {
    if !config.time_bonus {
        return Decimal::ONE;
    }
    catalog
        .primary(&config.primary_target)
        .map(|t| t.bonus_multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Value of one stack of `key` under the current configuration. Gold never
/// takes the bonus.
pub fn stack_value(catalog: &Catalog, key: SecondaryKey, config: &Configuration) -> Dollars {
    let Some(target) = catalog.secondary(key) else {
        return Dollars::zero();
    };
    if key.is_gold() {
        target.base_value
    } else {
        Dollars(target.base_value.0 * effective_bonus(catalog, config))
    }
}

/// Value of `stacks` (possibly fractional) of `key`. Zero for zero stacks or a
/// key absent from the catalog. Not truncated; the financial stage does that.
pub fn secondary_value(
    catalog: &Catalog,
    key: SecondaryKey,
    stacks: Decimal,
    config: &Configuration,
) -> Dollars {
    if stacks.is_zero() {
        return Dollars::zero();
    }
    Dollars(stack_value(catalog, key, config).0 * stacks)
}

/// Value of a partial final stack occupying `units` of a `cost_per_stack`
/// table. Multiplies before dividing so whole-dollar results stay exact.
pub fn partial_value(
    catalog: &Catalog,
    key: SecondaryKey,
    units: Decimal,
    cost_per_stack: Decimal,
    config: &Configuration,
) -> Dollars {
    if units.is_zero() || cost_per_stack.is_zero() {
        return Dollars::zero();
    }
    Dollars(stack_value(catalog, key, config).0 * units / cost_per_stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bonus_config(primary: &str) -> Configuration {
        Configuration {
            time_bonus: true,
            primary_target: primary.to_string(),
            ..Configuration::default()
        }
    }

    #[test]
    fn bonus_is_one_without_time_bonus() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration::default();
        assert_eq!(effective_bonus(&catalog, &config), Decimal::ONE);
    }

    #[test]
    fn bonus_is_borrowed_from_selected_primary() {
        let catalog = Catalog::cayo_perico();
        assert_eq!(effective_bonus(&catalog, &bonus_config("tequila")), dec!(1.2));
        assert_eq!(effective_bonus(&catalog, &bonus_config("bearer_bonds")), dec!(1.05));
        assert_eq!(effective_bonus(&catalog, &bonus_config("panther_statue")), dec!(1));
        // unknown primary resolves to tequila
        assert_eq!(effective_bonus(&catalog, &bonus_config("nope")), dec!(1.2));
    }

    #[test]
    fn gold_is_never_multiplied() {
        let catalog = Catalog::cayo_perico();
        let config = bonus_config("tequila");
        assert_eq!(
            secondary_value(&catalog, SecondaryKey::Gold, dec!(2), &config),
            Dollars(dec!(661666))
        );
    }

    #[test]
    fn bonus_applies_to_other_loot() {
        let catalog = Catalog::cayo_perico();
        let config = bonus_config("ruby_necklace");
        // 81000 * 1.1 * 3
        assert_eq!(
            secondary_value(&catalog, SecondaryKey::Cash, dec!(3), &config),
            Dollars(dec!(267300))
        );
    }

    #[test]
    fn fractional_stacks_are_valued_proportionally() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration::default();
        assert_eq!(
            secondary_value(&catalog, SecondaryKey::Cocaine, dec!(0.5), &config),
            Dollars(dec!(100125))
        );
    }

    #[test]
    fn partial_stack_value_is_exact() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration { time_bonus: true, ..Configuration::default() };
        // 2400 of 900 units of cocaine at 240300 per stack
        assert_eq!(
            partial_value(&catalog, SecondaryKey::Cocaine, dec!(2400), dec!(900), &config),
            Dollars(dec!(640800))
        );
    }

    #[test]
    fn zero_stacks_or_missing_key_is_worth_nothing() {
        let mut catalog = Catalog::cayo_perico();
        let config = Configuration::default();
        assert!(secondary_value(&catalog, SecondaryKey::Weed, Decimal::ZERO, &config).is_zero());

        catalog.secondary_targets.retain(|t| t.key != SecondaryKey::Weed);
        assert!(secondary_value(&catalog, SecondaryKey::Weed, dec!(4), &config).is_zero());
    }
}
