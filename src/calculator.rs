// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Heist Payout Engine - Calculator
//
// Stateful owner of one configuration and catalog. The JS interface in
// lib.rs wraps these methods; everything here is plain Rust and testable
// natively.

use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::config::{ConfigError, Configuration};
use crate::pipeline::{self, HeistOutcome};
use crate::reference::{self, PrimaryRow, SecondaryRow};
use crate::report::HeistReport;

// ─── HeistCalculator struct ─────────────────────────────────────────────────

#[wasm_bindgen]
pub struct HeistCalculator {
    pub(crate) catalog: Catalog,
    pub(crate) config: Configuration,
}

impl Default for HeistCalculator {
    fn default() -> Self {
        Self::with_catalog(Catalog::cayo_perico())
    }
}

// ─── Internal Logic (Testable, pure Rust) ───────────────────────────────────

impl HeistCalculator {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog, config: Configuration::default() }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn catalog_ref(&self) -> &Catalog {
        &self.catalog
    }

    pub fn replace_config(&mut self, config: Configuration) {
        self.config = config;
    }

    pub fn compute_core(&self) -> HeistOutcome {
        pipeline::compute(&self.catalog, &self.config)
    }

    pub fn report_core(&self) -> HeistReport {
        HeistReport::from_outcome(&self.compute_core())
    }

    pub fn set_requested_core(&mut self, key: &str, stacks: i64) -> Result<u32, ConfigError> {
        self.config.set_requested_by_key(key, stacks)
    }

    pub fn update_share_core(&mut self, slot: usize, value: i64) -> Result<u32, ConfigError> {
        self.config.update_share(slot, value)
    }

    pub fn reference_core(&self) -> (Vec<PrimaryRow>, Vec<SecondaryRow>) {
        (
            reference::primary_rows(&self.catalog),
            reference::secondary_rows(&self.catalog, &self.config),
        )
    }

    pub fn reset_core(&mut self) {
        self.config = Configuration::default();
    }
}
