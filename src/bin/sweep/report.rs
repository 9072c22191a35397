// Structured sweep output.

use heist_engine::Configuration;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub label: String,
    pub pass: bool,
    pub failure: Option<String>,
    pub net_total: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    pub run: usize,
    pub message: String,
    pub config: Configuration,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepResult {
    pub runs: usize,
    pub seed: u64,
    /// Recoveries applied across all runs.
    pub notices: usize,
    pub failures: Vec<SweepFailure>,
}

#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub version: &'static str,
    pub prng: &'static str,
    pub scenarios: Vec<ScenarioResult>,
    pub sweep: SweepResult,
}

impl SweepReport {
    pub fn all_pass(&self) -> bool {
        self.scenarios.iter().all(|s| s.pass) && self.sweep.failures.is_empty()
    }
}
