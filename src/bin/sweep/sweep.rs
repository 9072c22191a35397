// Seeded random configuration sweep over the pipeline invariants.

use heist_engine::{compute, Catalog, Configuration, HeistOutcome, SecondaryKey, BAG_CAPACITY};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::report::{SweepFailure, SweepResult};

const PRIMARY_KEYS: [&str; 6] = [
    "tequila",
    "ruby_necklace",
    "bearer_bonds",
    "pink_diamond",
    "panther_statue",
    "unknown_target",
];

/// Random configuration built through the same setters a UI would use.
pub fn random_config(rng: &mut ChaCha8Rng) -> Configuration {
    let mut config = Configuration::default();
    config.set_participants(rng.gen_range(1..=4));
    config.set_hard_mode(rng.gen_bool(0.5));
    config.time_bonus = rng.gen_bool(0.5);
    config.set_primary_target(PRIMARY_KEYS[rng.gen_range(0..PRIMARY_KEYS.len())]);
    for key in SecondaryKey::ALL {
        config.set_requested(key, rng.gen_range(-2..=25));
    }
    for slot in 0..4 {
        if rng.gen_bool(0.3) {
            // slot is always in range
            let _ = config.update_share(slot, rng.gen_range(-10..=120));
        }
    }
    config
}

/// Every violated invariant, as a message.
pub fn violations(catalog: &Catalog, config: &Configuration, outcome: &HeistOutcome) -> Vec<String> {
    let mut out = Vec::new();
    let s = &outcome.summary;
    let budget = Decimal::from(outcome.setup.participants) * BAG_CAPACITY;

    if outcome.allocation.total_units() > budget {
        out.push(format!("units {} exceed budget {}", outcome.allocation.total_units(), budget));
    }
    if outcome.setup.participants < 2 && !outcome.allocation.stacks_of(SecondaryKey::Gold).is_zero() {
        out.push("gold carried by a solo crew".to_string());
    }
    if outcome.allocation.stacks_of(SecondaryKey::Paintings) > Decimal::ONE {
        out.push("more than one painting carried".to_string());
    }
    let expected_net = s.gross_total.0
        - (s.gross_total.0 * dec!(0.10)).floor()
        - (s.gross_total.0 * dec!(0.02)).floor();
    if s.net_total.0 != expected_net || s.net_total > s.gross_total {
        out.push(format!("net {} inconsistent with gross {}", s.net_total, s.gross_total));
    }
    if outcome.payouts.total() > s.net_total {
        out.push(format!("payouts {} exceed net {}", outcome.payouts.total(), s.net_total));
    }
    if compute(catalog, config) != *outcome {
        out.push("recomputation differs".to_string());
    }
    out
}

pub fn run_sweep(catalog: &Catalog, runs: usize, seed: u64) -> SweepResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut failures = Vec::new();
    let mut notices = 0usize;

    for run in 0..runs {
        let config = random_config(&mut rng);
        let outcome = compute(catalog, &config);
        notices += outcome.notices.len();
        for message in violations(catalog, &config, &outcome) {
            tracing::error!(run, %message, "invariant violated");
            failures.push(SweepFailure { run, message, config: config.clone() });
        }
    }

    SweepResult { runs, seed, notices, failures }
}
