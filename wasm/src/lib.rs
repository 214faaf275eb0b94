//! Fitness Dashboard WASM Module
//!
//! This crate provides WebAssembly bindings so a browser host can drive the
//! dashboard view controller and reuse the probe error classifier.
//! Views and effects cross the boundary as JSON strings.

use fitness_dashboard_shared::probe::classify_error;
use fitness_dashboard_shared::{
    render, DashboardSeed, QuoteWidget, RemoteErrorKind, ViewEffect, ViewState,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

/// Dashboard view controller handle
#[wasm_bindgen]
pub struct DashboardHandle {
    state: ViewState,
    quote: QuoteWidget,
}

#[wasm_bindgen]
impl DashboardHandle {
    /// Create a handle with the demo seed
    #[wasm_bindgen(constructor)]
    pub fn new() -> DashboardHandle {
        Self {
            state: ViewState::default(),
            quote: QuoteWidget::new(),
        }
    }

    /// Create a handle from a JSON seed
    pub fn from_seed_json(json: &str) -> Result<DashboardHandle, JsError> {
        let seed = DashboardSeed::from_json(json)?;
        let state = ViewState::from_seed(seed)?;
        Ok(Self {
            state,
            quote: QuoteWidget::new(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn current_screen(&self) -> String {
        self.state.current_screen.to_string()
    }

    /// Draw the quote once for this handle; `seed` comes from the host
    pub fn activate_quote(&mut self, seed: u64) -> bool {
        self.quote.activate(&mut SmallRng::seed_from_u64(seed))
    }

    /// Returns the effects as JSON
    pub fn select_action(&mut self, action_id: &str) -> Result<String, JsError> {
        effects_json(&self.state.select_action(action_id))
    }

    pub fn go_home(&mut self) -> Result<String, JsError> {
        effects_json(&self.state.go_home())
    }

    /// Returns the effects as JSON; the host shows the acknowledgment
    pub fn start_workout(&mut self, workout_id: i64) -> Result<String, JsError> {
        effects_json(&self.state.start_workout(workout_id))
    }

    /// Current view as JSON
    pub fn render_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&render(&self.state, self.quote.text()))?)
    }
}

impl Default for DashboardHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn effects_json(effects: &[ViewEffect]) -> Result<String, JsError> {
    Ok(serde_json::to_string(effects)?)
}

/// Classify a remote error message for `collection`
///
/// Returns `"schema_missing"` or `"query"`.
#[wasm_bindgen]
pub fn classify_probe_error(message: &str, collection: &str) -> String {
    match classify_error(message, collection) {
        RemoteErrorKind::SchemaMissing => "schema_missing",
        RemoteErrorKind::Query => "query",
    }
    .to_string()
}
