//! Environment overrides for `AppConfig::load`
//!
//! Kept in its own test binary: it mutates process environment variables.

use fitness_dashboard_app::config::{AppConfig, StalenessPolicy};
use std::env;

const VARS: [(&str, &str); 5] = [
    ("SUPABASE_URL", "https://project.supabase.co"),
    ("SUPABASE_KEY", "anon-key"),
    ("FD__PROBE__ROW_LIMIT", "3"),
    ("FD__PROBE__INSERT_CLIENT_NAME", "cli"),
    ("FD__PROBE__STALENESS", "last_writer_wins"),
];

#[test]
fn test_environment_overrides_defaults() {
    for (key, value) in VARS {
        env::set_var(key, value);
    }

    let loaded = AppConfig::load();

    for (key, _) in VARS {
        env::remove_var(key);
    }

    let config = loaded.unwrap();
    assert_eq!(config.remote.url, "https://project.supabase.co");
    assert_eq!(config.remote.api_key, "anon-key");
    assert_eq!(config.probe.row_limit, 3);
    assert_eq!(config.probe.insert_client_name, "cli");
    assert_eq!(config.probe.staleness, StalenessPolicy::LastWriterWins);
    // Untouched keys keep their defaults
    assert_eq!(config.probe.collection, "status_checks");
}
