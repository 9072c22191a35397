// Named heist scenarios with their expected outcomes.

use heist_engine::config::Requests;
use heist_engine::{Configuration, Dollars, HeistOutcome, Notice, SecondaryKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub config: fn() -> Configuration,
    /// Returns a description of the first failed expectation.
    pub check: fn(&HeistOutcome) -> Result<(), String>,
}

fn expect<T: PartialEq + std::fmt::Debug>(what: &str, actual: T, expected: T) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, got {:?}", what, expected, actual))
    }
}

// ─── Configurations ─────────────────────────────────────────────────────────

fn primary_only() -> Configuration {
    Configuration {
        primary_target: "ruby_necklace".to_string(),
        ..Configuration::default()
    }
}

fn solo_gold() -> Configuration {
    Configuration {
        participants: 1,
        requested: Requests { gold: 5, ..Requests::default() },
        shares: [100, 0, 0, 0],
        ..Configuration::default()
    }
}

fn full_crew_cocaine() -> Configuration {
    let mut config = Configuration::default();
    config.set_participants(4);
    config.set_requested(SecondaryKey::Cocaine, 20);
    config
}

fn three_paintings() -> Configuration {
    let mut config = Configuration::default();
    config.set_requested(SecondaryKey::Paintings, 3);
    config
}

fn elite_panther() -> Configuration {
    let mut config = Configuration::default();
    config.set_participants(4);
    config.set_hard_mode(true);
    config.time_bonus = true;
    config.set_primary_target("panther_statue");
    config.set_requested(SecondaryKey::Gold, 6);
    config.set_requested(SecondaryKey::Cocaine, 2);
    config
}

// ─── Checks ─────────────────────────────────────────────────────────────────

fn check_primary_only(o: &HeistOutcome) -> Result<(), String> {
    expect("gross", o.summary.gross_total, Dollars(dec!(750000)))?;
    expect("fencing", o.summary.fencing_fee, Dollars(dec!(75000)))?;
    expect("pavel", o.summary.pavel_fee, Dollars(dec!(15000)))?;
    expect("net", o.summary.net_total, Dollars(dec!(660000)))?;
    expect("leader", o.payouts.amounts[0], Dollars(dec!(561000)))?;
    expect("member 1", o.payouts.amounts[1], Dollars(dec!(99000)))
}

fn check_solo_gold(o: &HeistOutcome) -> Result<(), String> {
    expect("gold stacks", o.allocation.stacks_of(SecondaryKey::Gold), Decimal::ZERO)?;
    expect("bags", o.total_bags, Decimal::ZERO)?;
    expect(
        "gold notice",
        o.notices.contains(&Notice::GoldRequiresCrew { requested: 5 }),
        true,
    )
}

fn check_full_crew_cocaine(o: &HeistOutcome) -> Result<(), String> {
    expect("cocaine stacks", o.allocation.stacks_of(SecondaryKey::Cocaine), dec!(8))?;
    expect("units", o.allocation.total_units(), dec!(7200))
}

fn check_three_paintings(o: &HeistOutcome) -> Result<(), String> {
    expect("painting stacks", o.allocation.stacks_of(SecondaryKey::Paintings), Decimal::ONE)?;
    expect("units", o.allocation.total_units(), dec!(900))?;
    expect("bags display", o.total_bags, dec!(1.5))
}

fn check_elite_panther(o: &HeistOutcome) -> Result<(), String> {
    // gold 6 fills 7200 exactly, nothing left for cocaine
    expect("records", o.allocation.records.len(), 1)?;
    expect("gold stacks", o.allocation.stacks_of(SecondaryKey::Gold), dec!(6))?;
    // 2090000 + 6 * 330833 + 50000
    expect("gross", o.summary.gross_total, Dollars(dec!(4124998)))?;
    expect("elite bonus", o.summary.elite_bonus_per_participant, Dollars(dec!(100000)))
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "A_PRIMARY_ONLY",
            label: "Ruby necklace, no loot, 85/15",
            config: primary_only,
            check: check_primary_only,
        },
        Scenario {
            name: "B_SOLO_GOLD",
            label: "Solo crew requests gold",
            config: solo_gold,
            check: check_solo_gold,
        },
        Scenario {
            name: "C_FULL_CREW_COCAINE",
            label: "Four bags of cocaine",
            config: full_crew_cocaine,
            check: check_full_crew_cocaine,
        },
        Scenario {
            name: "D_THREE_PAINTINGS",
            label: "Three paintings requested",
            config: three_paintings,
            check: check_three_paintings,
        },
        Scenario {
            name: "E_ELITE_PANTHER",
            label: "Hard panther, gold-only bags",
            config: elite_panther,
            check: check_elite_panther,
        },
    ]
}
