// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Core Types
//
// Identity keys for catalog targets, the difficulty mode, and the Decimal
// denominations (`Dollars`, `Units`) shared by every pipeline stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Heist difficulty mode. Selects the primary target payout column and the
/// elite challenge bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Standard,
    Hard,
}

impl Difficulty {
    pub fn from_hard_mode(hard: bool) -> Self {
        if hard { Self::Hard } else { Self::Standard }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Normal Mode",
            Self::Hard => "Hard Mode",
        }
    }
}

// ---------------------------------------------------------------------------
// PrimaryKey
// ---------------------------------------------------------------------------

/// Closed set of primary target identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryKey {
    Tequila,
    RubyNecklace,
    BearerBonds,
    PinkDiamond,
    PantherStatue,
}

impl PrimaryKey {
    pub const ALL: [PrimaryKey; 5] = [
        Self::Tequila,
        Self::RubyNecklace,
        Self::BearerBonds,
        Self::PinkDiamond,
        Self::PantherStatue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tequila => "tequila",
            Self::RubyNecklace => "ruby_necklace",
            Self::BearerBonds => "bearer_bonds",
            Self::PinkDiamond => "pink_diamond",
            Self::PantherStatue => "panther_statue",
        }
    }

    /// Parse a raw identity key. `None` for anything outside the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SecondaryKey
// ---------------------------------------------------------------------------

/// Closed set of secondary (bulk) loot identities.
///
/// `Gold` is exempt from the time-bonus multiplier and needs a crew of two;
/// `Paintings` is carried as a single discrete half-bag object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryKey {
    Gold,
    Cocaine,
    Weed,
    Paintings,
    Cash,
}

impl SecondaryKey {
    pub const ALL: [SecondaryKey; 5] = [
        Self::Gold,
        Self::Cocaine,
        Self::Weed,
        Self::Paintings,
        Self::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Cocaine => "cocaine",
            Self::Weed => "weed",
            Self::Paintings => "paintings",
            Self::Cash => "cash",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub fn is_gold(&self) -> bool {
        matches!(self, Self::Gold)
    }

    pub fn is_painting(&self) -> bool {
        matches!(self, Self::Paintings)
    }
}

impl fmt::Display for SecondaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dollars
// ---------------------------------------------------------------------------

/// Currency amount backed by `rust_decimal::Decimal`.
///
/// Intermediate values (a fractional stack of cocaine) may carry a fraction;
/// every derived summary amount goes through [`Dollars::whole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Dollars(pub Decimal);

impl Dollars {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }

    /// Truncate toward zero. Used at every derivation step.
    pub fn whole(d: Decimal) -> Self {
        Self(d.trunc())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Dollars {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Dollars {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Dollars {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}

impl fmt::Display for Dollars {
    /// `$1,234,567` with the fraction dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.trunc().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0.is_sign_negative() && !self.0.trunc().is_zero() {
            write!(f, "-${}", grouped)
        } else {
            write!(f, "${}", grouped)
        }
    }
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// Carrying capacity, in table units. 1800 units fill one participant's bag.
pub type Units = Decimal;
