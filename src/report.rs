// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Heist Report

//! Six-section heist report built from a [`HeistOutcome`] alone.
//!
//! Sections, in order: setup, secondary loot (grab order), financial
//! breakdown, per-participant payouts, bags sum. The report only reshapes
//! and formats; nothing is recomputed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

use crate::core_types::{Dollars, SecondaryKey};
use crate::financial::FinancialSummary;
use crate::payout::slot_label;
use crate::pipeline::HeistOutcome;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Serialize)]
pub struct SetupSection {
    pub participants: u32,
    pub difficulty: &'static str,
    pub time_bonus: bool,
    pub primary_target: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LootLine {
    pub key: SecondaryKey,
    pub name: String,
    /// Stacks rounded to 2 decimals.
    pub stacks: Decimal,
    pub bags: Decimal,
    pub clicks: u32,
    pub value: Dollars,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayoutLine {
    pub label: String,
    pub share: u32,
    pub amount: Dollars,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeistReport {
    pub setup: SetupSection,
    pub loot: Vec<LootLine>,
    pub financials: FinancialSummary,
    pub payouts: Vec<PayoutLine>,
    pub total_bags: Decimal,
}

fn two_places(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl HeistReport {
    pub fn from_outcome(outcome: &HeistOutcome) -> Self {
        let setup = &outcome.setup;
        let loot = outcome
            .allocation
            .iter()
            .map(|r| LootLine {
                key: r.key,
                name: r.name.clone(),
                stacks: two_places(r.stacks),
                bags: two_places(r.bags),
                clicks: r.clicks,
                value: Dollars::whole(r.value.0),
            })
            .collect();
        let payouts = setup
            .shares
            .iter()
            .take(setup.participants as usize)
            .enumerate()
            .map(|(slot, share)| PayoutLine {
                label: slot_label(slot),
                share: *share,
                amount: outcome.payouts.get(slot),
            })
            .collect();

        Self {
            setup: SetupSection {
                participants: setup.participants,
                difficulty: setup.difficulty.label(),
                time_bonus: setup.time_bonus,
                primary_target: setup.primary_name.clone(),
            },
            loot,
            financials: outcome.summary,
            payouts,
            total_bags: outcome.total_bags,
        }
    }
}

impl fmt::Display for HeistReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HEIST SETUP:")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Players: {}", self.setup.participants)?;
        writeln!(f, "Difficulty: {}", self.setup.difficulty)?;
        writeln!(f, "72h Bonus: {}", if self.setup.time_bonus { "Yes" } else { "No" })?;
        writeln!(f, "Primary Target: {}", self.setup.primary_target)?;
        writeln!(f)?;

        writeln!(f, "SECONDARY TARGETS (OPTIMAL ORDER):")?;
        writeln!(f, "{}", RULE)?;
        if self.loot.is_empty() {
            writeln!(f, "None")?;
        }
        for line in &self.loot {
            writeln!(
                f,
                "{:.2} {} stacks ({:.2} bags) - {} clicks - {}",
                line.stacks, line.name, line.bags, line.clicks, line.value
            )?;
        }
        writeln!(f)?;

        let fin = &self.financials;
        writeln!(f, "FINANCIAL BREAKDOWN:")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Gross Total: {}", fin.gross_total)?;
        writeln!(f, "- Fencing Fee (10%): {}", fin.fencing_fee)?;
        writeln!(f, "- Pavel Fee (2%): {}", fin.pavel_fee)?;
        writeln!(f, "Net Total: {}", fin.net_total)?;
        if self.setup.time_bonus {
            writeln!(f, "+ Elite Challenge Bonus: {} per player", fin.elite_bonus_per_participant)?;
        }
        writeln!(f)?;

        writeln!(f, "PLAYER PAYOUTS:")?;
        writeln!(f, "{}", RULE)?;
        for line in &self.payouts {
            writeln!(f, "{}: {}% - {}", line.label, line.share, line.amount)?;
        }
        writeln!(f)?;

        write!(f, "Bags Sum: {:.2}", self.total_bags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::{Configuration, Requests};
    use crate::pipeline::compute;
    use rust_decimal_macros::dec;

    #[test]
    fn sections_appear_in_order() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration {
            primary_target: "ruby_necklace".to_string(),
            ..Configuration::default()
        };
        let text = HeistReport::from_outcome(&compute(&catalog, &config)).to_string();

        let positions: Vec<usize> = [
            "HEIST SETUP:",
            "SECONDARY TARGETS (OPTIMAL ORDER):",
            "FINANCIAL BREAKDOWN:",
            "PLAYER PAYOUTS:",
            "Bags Sum:",
        ]
        .iter()
        .map(|h| text.find(h).expect("test: section header present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("Primary Target: Ruby Necklace"));
        assert!(text.contains("None"));
        assert!(text.contains("Gross Total: $750,000"));
        assert!(text.contains("Net Total: $660,000"));
        assert!(text.contains("Leader: 85% - $561,000"));
        assert!(text.contains("Member 1: 15% - $99,000"));
        assert!(text.ends_with("Bags Sum: 0.00"));
        assert!(!text.contains("Elite Challenge"));
    }

    #[test]
    fn loot_lines_follow_grab_order() {
        let catalog = Catalog::cayo_perico();
        let config = Configuration {
            time_bonus: true,
            requested: Requests { cash: 1, gold: 1, ..Requests::default() },
            ..Configuration::default()
        };
        let report = HeistReport::from_outcome(&compute(&catalog, &config));
        assert_eq!(report.loot[0].key, SecondaryKey::Gold);
        assert_eq!(report.loot[0].value, Dollars(dec!(330833)));
        assert_eq!(report.loot[1].key, SecondaryKey::Cash);
        assert_eq!(report.loot[1].value, Dollars(dec!(97200)));

        let text = report.to_string();
        assert!(text.contains("1.00 Gold stacks (0.67 bags) - 7 clicks - $330,833"));
        assert!(text.contains("+ Elite Challenge Bonus: $50,000 per player"));
    }

    #[test]
    fn only_active_slots_are_listed() {
        let catalog = Catalog::cayo_perico();
        let mut config = Configuration::default();
        config.set_participants(4);
        let report = HeistReport::from_outcome(&compute(&catalog, &config));
        assert_eq!(report.payouts.len(), 4);
        assert_eq!(report.payouts[3].label, "Member 3");

        config.set_participants(1);
        let report = HeistReport::from_outcome(&compute(&catalog, &config));
        assert_eq!(report.payouts.len(), 1);
    }
}
