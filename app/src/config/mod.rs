//! Configuration management for the Fitness Dashboard client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FD__)
//! 4. `SUPABASE_URL` / `SUPABASE_KEY` for the remote store

use crate::error::ClientResult;
use fitness_dashboard_shared::probe::DEFAULT_PROBE_COLLECTION;
use fitness_dashboard_shared::QuoteRefresh;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub probe: ProbeConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Remote store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project URL, without the `/rest/v1` suffix
    pub url: String,
    /// Anonymous API key
    pub api_key: String,
    pub timeout_secs: u64,
}

/// Which probe completions are applied when probes overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalenessPolicy {
    /// Only the most recently issued probe may update the state
    #[default]
    DiscardStale,
    /// Every completion is applied in arrival order
    LastWriterWins,
}

/// Connectivity probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub collection: String,
    pub row_limit: usize,
    /// `client_name` written by the insert check
    pub insert_client_name: String,
    #[serde(default)]
    pub staleness: StalenessPolicy,
}

/// Dashboard view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub quote_refresh: QuoteRefresh,
    /// JSON seed file; the demo seed is used when unset
    #[serde(default)]
    pub seed_path: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_PROBE_COLLECTION.to_string(),
            row_limit: 1,
            insert_client_name: "Frontend Test Connection".to_string(),
            staleness: StalenessPolicy::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            quote_refresh: QuoteRefresh::PerActivation,
            seed_path: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            probe: ProbeConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FD__ prefix
    /// 4. SUPABASE_URL and SUPABASE_KEY
    pub fn load() -> ClientResult<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FD__ prefix)
            // e.g., FD__PROBE__COLLECTION=health_checks sets probe.collection
            .add_source(config::Environment::with_prefix("FD").separator("__"))
            .set_override_option("remote.url", env::var("SUPABASE_URL").ok())?
            .set_override_option("remote.api_key", env::var("SUPABASE_KEY").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.probe.collection, "status_checks");
        assert_eq!(config.probe.row_limit, 1);
        assert_eq!(config.probe.insert_client_name, "Frontend Test Connection");
        assert_eq!(config.probe.staleness, StalenessPolicy::DiscardStale);
        assert_eq!(config.dashboard.quote_refresh, QuoteRefresh::PerActivation);
        assert_eq!(config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_defaults_survive_config_round_trip() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.probe.collection, "status_checks");
        assert!(config.dashboard.seed_path.is_none());
    }

    #[test]
    fn test_file_overrides_nested_keys() {
        let toml = r#"
            [probe]
            staleness = "last_writer_wins"

            [dashboard]
            quote_refresh = "per_visit"
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.probe.staleness, StalenessPolicy::LastWriterWins);
        assert_eq!(config.dashboard.quote_refresh, QuoteRefresh::PerVisit);
        assert_eq!(config.probe.row_limit, 1);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
