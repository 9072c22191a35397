// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Target Catalog

//! Immutable reference data for primary and secondary targets.
//!
//! The catalog is an explicit value handed to every pipeline stage, so tests
//! can substitute fixtures. Lookups are total: an unknown primary key resolves
//! to the first primary entry, an unknown secondary key resolves to nothing
//! and contributes zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core_types::{Difficulty, Dollars, PrimaryKey, SecondaryKey, Units};

/// Capacity units in one participant's bag.
pub const BAG_CAPACITY: Decimal = dec!(1800);

/// Upper bound on requested stacks of any secondary type.
pub const MAX_REQUESTED_STACKS: u32 = 20;

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// Payout of a primary target under each difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyValues {
    pub standard: Dollars,
    pub hard: Dollars,
}

impl DifficultyValues {
    pub fn for_mode(&self, difficulty: Difficulty) -> Dollars {
        match difficulty {
            Difficulty::Standard => self.standard,
            Difficulty::Hard => self.hard,
        }
    }
}

/// The single high-value item taken from the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryTarget {
    pub key: PrimaryKey,
    pub name: String,
    pub value: DifficultyValues,
    /// Multiplier lent to secondary loot while the time bonus is active.
    pub bonus_multiplier: Decimal,
}

/// Observed per-stack value spread of a secondary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Dollars,
    pub max: Dollars,
}

/// Bulk loot found on tables around the compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryTarget {
    pub key: SecondaryKey,
    pub name: String,
    /// Capacity units one full table (stack) occupies.
    pub full_table_units: Units,
    pub base_value: Dollars,
    pub clicks_per_stack: u32,
    pub value_range: ValueRange,
}

impl SecondaryTarget {
    /// Capacity cost of one stack. Paintings are a fixed half bag regardless
    /// of their table units.
    pub fn capacity_cost(&self) -> Units {
        if self.key.is_painting() {
            BAG_CAPACITY / dec!(2)
        } else {
            self.full_table_units
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Two ordered target collections plus the fixed heist constants.
///
/// Declaration order matters: the first primary is the fallback, and the
/// secondary order breaks value-density ties during allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub primary_targets: Vec<PrimaryTarget>,
    pub secondary_targets: Vec<SecondaryTarget>,
    /// Flat amount from the office safe, always part of the gross.
    pub office_safe: Dollars,
    /// Elite challenge bonus per participant, reported but never paid out of net.
    pub elite_challenge: DifficultyValues,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::cayo_perico()
    }
}

fn primary(key: PrimaryKey, name: &str, standard: Decimal, hard: Decimal, bonus: Decimal) -> PrimaryTarget {
    PrimaryTarget {
        key,
        name: name.to_string(),
        value: DifficultyValues {
            standard: Dollars(standard),
            hard: Dollars(hard),
        },
        bonus_multiplier: bonus,
    }
}

fn secondary(
    key: SecondaryKey,
    name: &str,
    units: Decimal,
    base: Decimal,
    clicks: u32,
    (min, max): (Decimal, Decimal),
) -> SecondaryTarget {
    SecondaryTarget {
        key,
        name: name.to_string(),
        full_table_units: units,
        base_value: Dollars(base),
        clicks_per_stack: clicks,
        value_range: ValueRange {
            min: Dollars(min),
            max: Dollars(max),
        },
    }
}

impl Catalog {
    /// Built-in target data.
    pub fn cayo_perico() -> Self {
        Self {
            primary_targets: vec![
                primary(PrimaryKey::Tequila, "Sinsimito Tequila", dec!(630000), dec!(693000), dec!(1.2)),
                primary(PrimaryKey::RubyNecklace, "Ruby Necklace", dec!(700000), dec!(770000), dec!(1.1)),
                primary(PrimaryKey::BearerBonds, "Bearer Bonds", dec!(770000), dec!(847000), dec!(1.05)),
                primary(PrimaryKey::PinkDiamond, "Pink Diamond", dec!(1300000), dec!(1430000), dec!(1)),
                primary(PrimaryKey::PantherStatue, "Panther Statue", dec!(1900000), dec!(2090000), dec!(1)),
            ],
            secondary_targets: vec![
                secondary(SecondaryKey::Gold, "Gold", dec!(1200), dec!(330833), 7, (dec!(328333), dec!(333333))),
                secondary(SecondaryKey::Cocaine, "Cocaine", dec!(900), dec!(200250), 10, (dec!(198000), dec!(202500))),
                secondary(SecondaryKey::Weed, "Weed", dec!(675), dec!(132750), 10, (dec!(130500), dec!(135000))),
                secondary(SecondaryKey::Paintings, "Paintings", dec!(900), dec!(168750), 4, (dec!(157500), dec!(180000))),
                secondary(SecondaryKey::Cash, "Cash", dec!(450), dec!(81000), 10, (dec!(78750), dec!(83250))),
            ],
            office_safe: Dollars(dec!(50000)),
            elite_challenge: DifficultyValues {
                standard: Dollars(dec!(50000)),
                hard: Dollars(dec!(100000)),
            },
        }
    }

    /// Resolve a raw primary key. Unknown or missing keys fall back to the
    /// first primary target; `None` only for a catalog with no primaries.
    pub fn primary(&self, key: &str) -> Option<&PrimaryTarget> {
        PrimaryKey::from_key(key)
            .and_then(|k| self.primary_by_key(k))
            .or_else(|| self.default_primary())
    }

    /// Exact lookup, no fallback.
    pub fn primary_by_key(&self, key: PrimaryKey) -> Option<&PrimaryTarget> {
        self.primary_targets.iter().find(|t| t.key == key)
    }

    pub fn default_primary(&self) -> Option<&PrimaryTarget> {
        self.primary_targets.first()
    }

    /// Whether `key` names a primary target present in this catalog.
    pub fn has_primary(&self, key: &str) -> bool {
        PrimaryKey::from_key(key).is_some_and(|k| self.primary_by_key(k).is_some())
    }

    pub fn secondary(&self, key: SecondaryKey) -> Option<&SecondaryTarget> {
        self.secondary_targets.iter().find(|t| t.key == key)
    }

    /// Base value of the selected primary under the given difficulty; zero
    /// for a catalog without primaries.
    pub fn primary_value(&self, key: &str, difficulty: Difficulty) -> Dollars {
        self.primary(key)
            .map(|t| t.value.for_mode(difficulty))
            .unwrap_or_default()
    }

    pub fn elite_bonus(&self, difficulty: Difficulty) -> Dollars {
        self.elite_challenge.for_mode(difficulty)
    }
}
