//! Fitness Dashboard Shared Library
//!
//! Pure view-state and data-shaping layer shared by the terminal host and
//! the WASM bindings: models, the screen reducer, view rendering, quote
//! selection and connectivity-probe classification.

pub mod controller;
pub mod errors;
pub mod models;
pub mod probe;
pub mod quotes;
pub mod validation;
pub mod view;

// Re-export commonly used items
pub use controller::{ViewAction, ViewEffect, ViewState};
pub use errors::*;
pub use models::*;
pub use probe::{ConnectionProbeState, ProbeOutcome, ProbeStatus};
pub use quotes::{QuoteRefresh, QuoteWidget};
pub use view::{render, ViewBody, ViewDescription};
