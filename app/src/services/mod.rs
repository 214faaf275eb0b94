//! Business logic services

pub mod dashboard;
pub mod probe;

pub use dashboard::DashboardService;
pub use probe::{ConnectivityProber, InsertOutcome};
