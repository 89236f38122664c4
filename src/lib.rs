// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine

//! Monte Carlo resampling over a small empirical dataset.
//!
//! Parse up to 100 observations, summarize them, then generate synthetic
//! data under a Normal or Uniform model: an aggregate sample with histogram
//! and percentiles, plus ten paired datasets that perturb each observation in
//! place. Rendering is left to the caller; the browser shell reaches the
//! engine through the WASM interface below.

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod stats;
pub mod random;
pub mod histogram;
pub mod simulation;
pub mod export;

pub use types::*;
pub use error::EngineError;
pub use config::SimulationConfig;
pub use simulation::SimulationEngine;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Run with a JSON config string (absent fields take defaults).
pub fn run_from_json(observations: &[f64], config_json: &str) -> Result<SimulationResult, EngineError> {
    let config = SimulationConfig::from_json(config_json)?;
    SimulationEngine::new().run(observations, &config)
}

fn report_failure(err: &EngineError) {
    #[cfg(target_arch = "wasm32")]
    log(&format!("montecarlo-engine: {}", err));
    tracing::warn!(error = %err, "simulation request failed");
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen(js_name = parseObservations)]
pub fn parse_observations(text: &str) -> Vec<f64> {
    parser::parse(text)
}

/// Statistics record, or `null` for an empty set.
#[wasm_bindgen(js_name = summarize)]
pub fn summarize_observations(data: &[f64]) -> JsValue {
    match stats::summarize(data) {
        Some(s) => serde_wasm_bindgen::to_value(&s).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// `config` may be `undefined`/`null` for defaults. Throws on
/// `NoInputData` and `InvalidConfig`.
#[wasm_bindgen(js_name = runSimulation)]
pub fn run_simulation(data: &[f64], config: JsValue) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let config: SimulationConfig = if config.is_undefined() || config.is_null() {
        SimulationConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    let result = SimulationEngine::new().run(data, &config).map_err(|e| {
        report_failure(&e);
        e
    })?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// JSON in, JSON out, for shells that avoid structured cloning.
#[wasm_bindgen(js_name = runSimulationJson)]
pub fn run_simulation_json(data: &[f64], config_json: &str) -> Result<String, JsError> {
    console_error_panic_hook::set_once();
    let result = run_from_json(data, config_json).map_err(|e| {
        report_failure(&e);
        e
    })?;
    Ok(serde_json::to_string(&result)?)
}

#[wasm_bindgen(js_name = exportDatasetCsv)]
pub fn export_dataset_csv(data: &[f64]) -> String {
    export::values_to_csv(data)
}

#[wasm_bindgen(js_name = datasetFileName)]
pub fn dataset_file_name_js(id: usize) -> String {
    types::dataset_file_name(id)
}
