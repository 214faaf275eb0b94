//! Application state management
//!
//! `AppState` is the composition root: it owns the dashboard reducer and the
//! connectivity prober. The two share no state; they only share the
//! notifier used for blocking acknowledgments.

use crate::config::AppConfig;
use crate::error::ClientResult;
use crate::notify::Notifier;
use crate::remote::{PostgrestClient, RemoteDataClient};
use crate::services::{ConnectivityProber, DashboardService};
use fitness_dashboard_shared::{DashboardSeed, ViewState};
use std::sync::Arc;
use tracing::info;

pub struct AppState {
    pub dashboard: DashboardService,
    pub prober: Arc<ConnectivityProber>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire up the application from configuration with the HTTP client
    pub fn from_config(config: AppConfig, notifier: Arc<dyn Notifier>) -> ClientResult<Self> {
        let client = PostgrestClient::new(&config.remote)?;
        let seed = load_seed(&config)?;
        Self::new(config, seed, Arc::new(client), notifier)
    }

    /// Wire up the application with an explicit seed and client
    pub fn new(
        config: AppConfig,
        seed: DashboardSeed,
        client: Arc<dyn RemoteDataClient>,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let view = ViewState::from_seed(seed)?;
        let dashboard =
            DashboardService::new(view, config.dashboard.quote_refresh, notifier.clone());
        let prober = Arc::new(ConnectivityProber::new(
            client,
            notifier,
            config.probe.clone(),
        ));

        Ok(Self {
            dashboard,
            prober,
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Seed from the configured JSON file, or the demo seed
pub fn load_seed(config: &AppConfig) -> ClientResult<DashboardSeed> {
    match &config.dashboard.seed_path {
        Some(path) => {
            info!(path = %path, "Loading dashboard seed");
            let json = std::fs::read_to_string(path)?;
            Ok(DashboardSeed::from_json(&json)?)
        }
        None => Ok(DashboardSeed::demo()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::notify::LogNotifier;

    #[test]
    fn test_default_config_uses_demo_seed() {
        let seed = load_seed(&AppConfig::default()).unwrap();
        assert_eq!(seed, DashboardSeed::demo());
    }

    #[test]
    fn test_missing_seed_file_is_io_error() {
        let mut config = AppConfig::default();
        config.dashboard.seed_path = Some("/nonexistent/seed.json".to_string());
        assert!(matches!(load_seed(&config), Err(ClientError::Io(_))));
    }

    #[tokio::test]
    async fn test_from_config_starts_on_home_with_testing_probe() {
        let state = AppState::from_config(AppConfig::default(), Arc::new(LogNotifier)).unwrap();
        assert_eq!(state.dashboard.current_screen().as_str(), "home");
        assert_eq!(state.prober.state().label(), "Testing...");
        assert_eq!(state.prober.collection(), "status_checks");
        assert_eq!(state.config().remote.url, "http://localhost:54321");
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let mut seed = DashboardSeed::demo();
        seed.workouts[0].id = 2;
        let client = Arc::new(PostgrestClient::new(&AppConfig::default().remote).unwrap());
        let result = AppState::new(AppConfig::default(), seed, client, Arc::new(LogNotifier));
        assert!(matches!(result, Err(ClientError::Seed(_))));
    }
}
