// Heist Sweep Runner: named scenarios plus a seeded invariant sweep
//
// Usage:
//   cargo run --release --bin sweep                      # All scenarios, 1000 random runs
//   cargo run --release --bin sweep -- --runs 100        # Quick mode
//   cargo run --release --bin sweep -- PAINTINGS         # Filter scenarios by name
//   cargo run --release --bin sweep -- --seed 42         # Custom base seed
//   cargo run --release --bin sweep -- --json            # JSON report on stdout
//   RUST_LOG=heist_engine=debug cargo run --bin sweep    # Show recoveries

mod report;
mod scenarios;
mod sweep;

use heist_engine::{compute, Catalog};
use report::*;
use scenarios::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    json: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 1000,
        seed: 0,
        json: false,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(1000);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--json" => {
                cli.json = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_args();
    let catalog = Catalog::cayo_perico();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    // Human-readable output goes to stderr when stdout carries JSON.
    let say = |line: String| {
        if cli.json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    say(format!("\n  Heist Sweep Runner v{}", env!("CARGO_PKG_VERSION")));
    say(format!("  PRNG: ChaCha8Rng | Random runs: {} | Base seed: {}", cli.runs, cli.seed));
    say(format!("  Running {} scenario(s)...\n", to_run.len()));
    say(format!("  {:<22} {:<34} {:>14}  {}", "Scenario", "Label", "Net", "Status"));
    say(format!("  {}", "-".repeat(80)));

    let suite_start = Instant::now();
    let mut results = Vec::new();

    for scenario in &to_run {
        let config = (scenario.config)();
        let outcome = compute(&catalog, &config);
        let checked = (scenario.check)(&outcome);

        say(format!("  {:<22} {:<34} {:>14}  {}",
            scenario.name,
            scenario.label,
            outcome.summary.net_total.to_string(),
            if checked.is_ok() { "PASS" } else { "FAIL" },
        ));
        if let Err(reason) = &checked {
            say(format!("      {}", reason));
        }

        results.push(ScenarioResult {
            name: scenario.name.to_string(),
            label: scenario.label.to_string(),
            pass: checked.is_ok(),
            failure: checked.err(),
            net_total: outcome.summary.net_total.to_string(),
        });
    }

    // ─── Random Sweep ───────────────────────────────────────────────────

    let sweep_result = sweep::run_sweep(&catalog, cli.runs, cli.seed);

    // ─── Summary ────────────────────────────────────────────────────────

    let total = results.len();
    let passed = results.iter().filter(|r| r.pass).count();

    say(format!("  {}", "-".repeat(80)));
    say(format!("  Scenarios: {}  Passed: {}  Failed: {}", total, passed, total - passed));
    say(format!("  Sweep: {} runs, {} recoveries, {} violations",
        sweep_result.runs, sweep_result.notices, sweep_result.failures.len()));
    for failure in sweep_result.failures.iter().take(10) {
        say(format!("    run {}: {}", failure.run, failure.message));
    }
    say(format!("  Suite time: {:.2}s\n", suite_start.elapsed().as_secs_f64()));

    let report = SweepReport {
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        scenarios: results,
        sweep: sweep_result,
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialize report: {}", err);
                std::process::exit(2);
            }
        }
    }

    if !report.all_pass() {
        std::process::exit(1);
    }
}
