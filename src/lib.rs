// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - loot allocation and crew payout calculator

pub mod core_types;
pub mod catalog;
pub mod config;
pub mod valuation;
pub mod allocation;
pub mod capacity;
pub mod financial;
pub mod payout;
pub mod pipeline;
pub mod report;
pub mod reference;
pub mod calculator;
pub mod adapter;

pub use calculator::HeistCalculator;
pub use catalog::{Catalog, BAG_CAPACITY};
pub use config::{default_shares, ConfigError, Configuration, Notice, Requests};
pub use core_types::{Difficulty, Dollars, PrimaryKey, SecondaryKey};
pub use pipeline::{compute, HeistOutcome};
pub use report::HeistReport;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl HeistCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Self::default()
    }

    pub fn set_participants(&mut self, participants: u32) {
        self.config.set_participants(participants);
    }

    pub fn set_hard_mode(&mut self, hard: bool) {
        self.config.set_hard_mode(hard);
    }

    pub fn set_time_bonus(&mut self, active: bool) {
        self.config.time_bonus = active;
    }

    pub fn set_primary_target(&mut self, key: &str) {
        self.config.set_primary_target(key);
    }

    /// Returns the stored (clamped) stack count.
    pub fn set_requested(&mut self, key: &str, stacks: i32) -> Result<u32, JsValue> {
        self.set_requested_core(key, i64::from(stacks)).map_err(to_js_error)
    }

    /// Returns the stored (clamped or trimmed) share.
    pub fn update_share(&mut self, slot: usize, value: i32) -> Result<u32, JsValue> {
        self.update_share_core(slot, i64::from(value)).map_err(to_js_error)
    }

    pub fn reset(&mut self) {
        self.reset_core();
    }

    pub fn compute(&self) -> JsValue {
        let outcome = self.compute_core();
        let view = adapter::OutcomeView::from(&outcome);
        for message in &view.messages {
            log(message);
        }
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }

    pub fn report_text(&self) -> String {
        self.report_core().to_string()
    }

    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.config).unwrap_or(JsValue::NULL)
    }

    /// Replace the whole configuration from a (possibly partial) JS object.
    pub fn load_config(&mut self, value: JsValue) -> Result<(), JsValue> {
        let config: Configuration = serde_wasm_bindgen::from_value(value)?;
        self.replace_config(config);
        Ok(())
    }

    pub fn reference_tables(&self) -> JsValue {
        let (primary, secondary) = self.reference_core();
        let view = adapter::reference_view(&primary, &secondary);
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }
}

/// Default share split for a crew size, for resetting share inputs.
#[wasm_bindgen(js_name = defaultShares)]
pub fn default_shares_js(participants: u32) -> Vec<u32> {
    default_shares(participants).to_vec()
}
