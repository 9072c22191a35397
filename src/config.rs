// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Configuration

//! Caller-owned heist configuration.
//!
//! The setters here clamp on write the way the input form does. The pipeline
//! never trusts a `Configuration` directly: it first takes a [`Snapshot`],
//! which re-applies every rule and records each silent recovery as a
//! [`Notice`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Catalog, MAX_REQUESTED_STACKS};
use crate::core_types::{Difficulty, SecondaryKey};

pub const MIN_PARTICIPANTS: u32 = 1;
pub const MAX_PARTICIPANTS: u32 = 4;
/// Number of share slots, active or not.
pub const SHARE_SLOTS: usize = 4;
pub const FULL_SHARE: u32 = 100;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from caller edits. The pipeline itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("share slot {0} out of range (expected 0..4)")]
    SlotOutOfRange(usize),

    #[error("unknown secondary target `{0}`")]
    UnknownSecondary(String),
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Requested stack count per secondary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Requests {
    pub gold: u32,
    pub cocaine: u32,
    pub weed: u32,
    pub paintings: u32,
    pub cash: u32,
}

impl Requests {
    pub fn get(&self, key: SecondaryKey) -> u32 {
        match key {
            SecondaryKey::Gold => self.gold,
            SecondaryKey::Cocaine => self.cocaine,
            SecondaryKey::Weed => self.weed,
            SecondaryKey::Paintings => self.paintings,
            SecondaryKey::Cash => self.cash,
        }
    }

    pub fn set(&mut self, key: SecondaryKey, stacks: u32) {
        let slot = match key {
            SecondaryKey::Gold => &mut self.gold,
            SecondaryKey::Cocaine => &mut self.cocaine,
            SecondaryKey::Weed => &mut self.weed,
            SecondaryKey::Paintings => &mut self.paintings,
            SecondaryKey::Cash => &mut self.cash,
        };
        *slot = stacks;
    }

    pub fn any(&self) -> bool {
        SecondaryKey::ALL.into_iter().any(|k| self.get(k) > 0)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default share split for a crew size. The leader keeps the remainder after
/// 15% per member.
pub fn default_shares(participants: u32) -> [u32; SHARE_SLOTS] {
    match participants.clamp(MIN_PARTICIPANTS, MAX_PARTICIPANTS) {
        1 => [100, 0, 0, 0],
        2 => [85, 15, 0, 0],
        3 => [70, 15, 15, 0],
        _ => [55, 15, 15, 15],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub participants: u32,
    pub difficulty: Difficulty,
    /// Elite challenge completed within the 72h window.
    pub time_bonus: bool,
    /// Raw primary identity key; resolved against the catalog at snapshot time.
    pub primary_target: String,
    pub requested: Requests,
    /// Percentage shares; only the first `participants` slots are active.
    pub shares: [u32; SHARE_SLOTS],
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            participants: 2,
            difficulty: Difficulty::Standard,
            time_bonus: false,
            primary_target: "tequila".to_string(),
            requested: Requests::default(),
            shares: default_shares(2),
        }
    }
}

impl Configuration {
    /// Participant count clamped into `[1, 4]`.
    pub fn crew_size(&self) -> u32 {
        self.participants.clamp(MIN_PARTICIPANTS, MAX_PARTICIPANTS)
    }

    pub fn gold_allowed(&self) -> bool {
        self.crew_size() >= 2
    }

    pub fn active_shares(&self) -> &[u32] {
        &self.shares[..self.crew_size() as usize]
    }

    pub fn total_share(&self) -> u32 {
        self.active_shares().iter().fold(0u32, |acc, s| acc.saturating_add(*s))
    }

    /// Change the crew size. Shares reset to [`default_shares`] and gold is
    /// dropped for a solo run.
    pub fn set_participants(&mut self, participants: u32) {
        self.participants = participants.clamp(MIN_PARTICIPANTS, MAX_PARTICIPANTS);
        self.shares = default_shares(self.participants);
        if !self.gold_allowed() {
            self.requested.gold = 0;
        }
    }

    pub fn set_hard_mode(&mut self, hard: bool) {
        self.difficulty = Difficulty::from_hard_mode(hard);
    }

    pub fn set_primary_target(&mut self, key: &str) {
        self.primary_target = key.to_string();
    }

    /// Set a requested stack count, clamped to `[0, 20]`. Gold edits are
    /// ignored below two participants. Returns the stored value.
    pub fn set_requested(&mut self, key: SecondaryKey, stacks: i64) -> u32 {
        if key.is_gold() && !self.gold_allowed() {
            return self.requested.gold;
        }
        let applied = stacks.clamp(0, i64::from(MAX_REQUESTED_STACKS)) as u32;
        self.requested.set(key, applied);
        applied
    }

    pub fn set_requested_by_key(&mut self, key: &str, stacks: i64) -> Result<u32, ConfigError> {
        let key = SecondaryKey::from_key(key)
            .ok_or_else(|| ConfigError::UnknownSecondary(key.to_string()))?;
        Ok(self.set_requested(key, stacks))
    }

    /// Edit one share. The value is clamped to `[0, 100]`; for an active
    /// slot it is then trimmed so the active shares sum to at most 100.
    /// Returns the stored value.
    pub fn update_share(&mut self, slot: usize, value: i64) -> Result<u32, ConfigError> {
        if slot >= SHARE_SLOTS {
            return Err(ConfigError::SlotOutOfRange(slot));
        }
        let mut applied = value.clamp(0, i64::from(FULL_SHARE)) as u32;
        if slot < self.crew_size() as usize {
            let others: u32 = self
                .active_shares()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != slot)
                .fold(0u32, |acc, (_, s)| acc.saturating_add(*s));
            if others.saturating_add(applied) > FULL_SHARE {
                applied = FULL_SHARE.saturating_sub(others);
            }
        }
        self.shares[slot] = applied;
        Ok(applied)
    }

    /// Normalized copy of this configuration for one pipeline run.
    pub fn snapshot(&self, catalog: &Catalog) -> Snapshot {
        let mut config = self.clone();
        let mut notices = Vec::new();

        let crew = self.crew_size();
        if crew != self.participants {
            notices.push(Notice::ParticipantsClamped { requested: self.participants, applied: crew });
            config.participants = crew;
        }

        if !catalog.has_primary(&self.primary_target) {
            if let Some(fallback) = catalog.default_primary() {
                tracing::debug!(
                    requested = %self.primary_target,
                    fallback = %fallback.key,
                    "unknown primary target, using catalog default"
                );
                notices.push(Notice::UnknownPrimary {
                    requested: self.primary_target.clone(),
                    applied: fallback.key.as_str().to_string(),
                });
                config.primary_target = fallback.key.as_str().to_string();
            }
        }

        for key in SecondaryKey::ALL {
            let requested = self.requested.get(key);
            let mut applied = requested.min(MAX_REQUESTED_STACKS);
            if applied != requested {
                notices.push(Notice::StacksClamped { target: key, requested, applied });
            }
            if key.is_gold() && crew < 2 && applied > 0 {
                tracing::debug!(requested = applied, "gold dropped, crew of one");
                notices.push(Notice::GoldRequiresCrew { requested: applied });
                applied = 0;
            }
            if applied > 0 && catalog.secondary(key).is_none() {
                notices.push(Notice::SecondaryNotInCatalog { target: key });
            }
            config.requested.set(key, applied);
        }

        let mut running = 0u32;
        for (slot, share) in config.shares.iter_mut().enumerate() {
            let requested = *share;
            let mut applied = requested.min(FULL_SHARE);
            if slot < crew as usize {
                applied = applied.min(FULL_SHARE - running);
                running += applied;
            }
            if applied != requested {
                tracing::debug!(slot, requested, applied, "share trimmed");
                notices.push(Notice::ShareTrimmed { slot, requested, applied });
                *share = applied;
            }
        }

        Snapshot { config, notices }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A normalized configuration together with the recoveries applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: Configuration,
    pub notices: Vec<Notice>,
}

/// One silent recovery performed while normalizing a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    ParticipantsClamped { requested: u32, applied: u32 },
    UnknownPrimary { requested: String, applied: String },
    StacksClamped { target: SecondaryKey, requested: u32, applied: u32 },
    GoldRequiresCrew { requested: u32 },
    SecondaryNotInCatalog { target: SecondaryKey },
    ShareTrimmed { slot: usize, requested: u32, applied: u32 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParticipantsClamped { requested, applied } => {
                write!(f, "participant count {} out of range, using {}", requested, applied)
            }
            Self::UnknownPrimary { requested, applied } => {
                write!(f, "unknown primary target `{}`, using `{}`", requested, applied)
            }
            Self::StacksClamped { target, requested, applied } => {
                write!(f, "{} request of {} stacks clamped to {}", target, requested, applied)
            }
            Self::GoldRequiresCrew { requested } => {
                write!(f, "gold requires 2+ players ({} stacks ignored)", requested)
            }
            Self::SecondaryNotInCatalog { target } => {
                write!(f, "{} is not in the catalog and contributes nothing", target)
            }
            Self::ShareTrimmed { slot, requested, applied } => {
                write!(f, "share slot {} trimmed from {}% to {}%", slot, requested, applied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reset_state() {
        let config = Configuration::default();
        assert_eq!(config.participants, 2);
        assert_eq!(config.difficulty, Difficulty::Standard);
        assert!(!config.time_bonus);
        assert_eq!(config.primary_target, "tequila");
        assert!(!config.requested.any());
        assert_eq!(config.shares, [85, 15, 0, 0]);
    }

    #[test]
    fn default_shares_per_crew_size() {
        assert_eq!(default_shares(1), [100, 0, 0, 0]);
        assert_eq!(default_shares(2), [85, 15, 0, 0]);
        assert_eq!(default_shares(3), [70, 15, 15, 0]);
        assert_eq!(default_shares(4), [55, 15, 15, 15]);
        assert_eq!(default_shares(9), [55, 15, 15, 15]);
    }

    #[test]
    fn solo_crew_drops_gold_and_blocks_gold_edits() {
        let mut config = Configuration::default();
        config.set_requested(SecondaryKey::Gold, 5);
        assert_eq!(config.requested.gold, 5);

        config.set_participants(1);
        assert_eq!(config.requested.gold, 0);
        assert_eq!(config.shares, [100, 0, 0, 0]);

        assert_eq!(config.set_requested(SecondaryKey::Gold, 3), 0);
        assert_eq!(config.requested.gold, 0);
    }

    #[test]
    fn requested_stacks_are_clamped() {
        let mut config = Configuration::default();
        assert_eq!(config.set_requested(SecondaryKey::Cocaine, 35), 20);
        assert_eq!(config.set_requested(SecondaryKey::Weed, -4), 0);
        assert_eq!(config.set_requested_by_key("cash", 7), Ok(7));
        assert_eq!(
            config.set_requested_by_key("diamonds", 1),
            Err(ConfigError::UnknownSecondary("diamonds".to_string()))
        );
    }

    #[test]
    fn share_edit_trims_to_exactly_one_hundred() {
        let mut config = Configuration::default();
        config.set_participants(3); // 70/15/15
        assert_eq!(config.update_share(1, 40), Ok(15));
        assert_eq!(config.total_share(), 100);

        config.update_share(0, 50).expect("test: lower leader");
        assert_eq!(config.update_share(1, 40), Ok(35));
        assert_eq!(config.shares, [50, 35, 15, 0]);
    }

    #[test]
    fn share_edit_clamps_raw_value_before_trimming() {
        let mut config = Configuration::default();
        config.set_participants(1);
        assert_eq!(config.update_share(0, 150), Ok(100));
        assert_eq!(config.update_share(0, -10), Ok(0));
    }

    #[test]
    fn inactive_share_slot_is_not_trimmed() {
        let mut config = Configuration::default(); // 85/15, two active
        assert_eq!(config.update_share(3, 60), Ok(60));
        assert_eq!(config.total_share(), 100);
        assert_eq!(config.update_share(4, 10), Err(ConfigError::SlotOutOfRange(4)));
    }

    #[test]
    fn snapshot_records_every_recovery() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration {
            participants: 1,
            primary_target: "flash_drive".to_string(),
            requested: Requests { gold: 5, cocaine: 30, ..Requests::default() },
            shares: [100, 20, 0, 0],
            ..Configuration::default()
        };

        let snap = config.snapshot(&catalog);
        assert_eq!(snap.config.primary_target, "tequila");
        assert_eq!(snap.config.requested.gold, 0);
        assert_eq!(snap.config.requested.cocaine, 20);
        assert_eq!(snap.config.shares, [100, 20, 0, 0]);
        assert!(snap.notices.contains(&Notice::GoldRequiresCrew { requested: 5 }));
        assert!(snap.notices.contains(&Notice::StacksClamped {
            target: SecondaryKey::Cocaine,
            requested: 30,
            applied: 20
        }));
        assert!(snap.notices.iter().any(|n| matches!(n, Notice::UnknownPrimary { .. })));
    }

    #[test]
    fn snapshot_trims_overflowing_shares_in_slot_order() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration {
            participants: 3,
            shares: [60, 30, 30, 0],
            ..Configuration::default()
        };
        let snap = config.snapshot(&catalog);
        assert_eq!(snap.config.shares, [60, 30, 10, 0]);
        assert_eq!(
            snap.notices,
            vec![Notice::ShareTrimmed { slot: 2, requested: 30, applied: 10 }]
        );
    }

    #[test]
    fn snapshot_clamps_participants() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration { participants: 0, ..Configuration::default() };
        let snap = config.snapshot(&catalog);
        assert_eq!(snap.config.participants, 1);
        assert_eq!(snap.notices[0], Notice::ParticipantsClamped { requested: 0, applied: 1 });
    }

    #[test]
    fn clean_configuration_has_no_notices() {
        let catalog = Catalog::cayo_perico();
        let snap = Configuration::default().snapshot(&catalog);
        assert!(snap.notices.is_empty());
        assert_eq!(snap.config, Configuration::default());
    }

    #[test]
    fn partial_json_payload_uses_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"participants":4,"requested":{"cocaine":20}}"#).unwrap();
        assert_eq!(config.participants, 4);
        assert_eq!(config.requested.cocaine, 20);
        assert_eq!(config.primary_target, "tequila");
        // shares are not re-derived from a payload
        assert_eq!(config.shares, [85, 15, 0, 0]);
    }
}
