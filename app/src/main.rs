//! Fitness Dashboard
//!
//! Terminal host for the dashboard view controller and the remote store
//! connectivity panel.
//!
//! ## Commands
//!
//! - `home`, `action <id>`, `start <id>`: dashboard navigation
//! - `probe`, `insert`, `status`: connectivity panel
//! - `help`, `quit`

use anyhow::Result;
use fitness_dashboard_app::{config, notify::Notifier, state::AppState};
use fitness_dashboard_shared::ConnectionProbeState;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints acknowledgments to the terminal
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn acknowledge(&self, message: &str) {
        println!("\n>> {message}\n");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Home,
    Action(String),
    Start(i64),
    Probe,
    Insert,
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match (parts.next()?, parts.next()) {
        ("home" | "back", None) => Command::Home,
        ("action", Some(id)) => Command::Action(id.to_string()),
        ("start", Some(id)) => Command::Start(id.parse().ok()?),
        ("probe", None) => Command::Probe,
        ("insert", None) => Command::Insert,
        ("status", None) => Command::Status,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => return None,
    };
    Some(command)
}

const HELP: &str = "\
Commands:
  home              back to the home screen
  action <id>       quick action (workout, schedule, health, settings)
  start <id>        start a workout
  probe             test the remote store connection
  insert            insert a test record
  status            show the connection status
  quit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    let mut state = AppState::from_config(config, Arc::new(TerminalNotifier))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        remote = %state.config().remote.url,
        collection = %state.config().probe.collection,
        "Starting Fitness Dashboard"
    );

    // Connectivity panel runs its first probe as soon as it appears
    let prober = state.prober.clone();
    tokio::spawn(async move { prober.activate().await });

    let mut updates = state.prober.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let current = updates.borrow_and_update().clone();
            print_status(&current);
        }
    });

    println!("{}", state.dashboard.render());
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shutdown_signal() => None,
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Home) => {
                state.dashboard.go_home();
                println!("{}", state.dashboard.render());
            }
            Some(Command::Action(id)) => {
                state.dashboard.select_action(&id);
                println!("{}", state.dashboard.render());
            }
            Some(Command::Start(id)) => state.dashboard.start_workout(id),
            Some(Command::Probe) => {
                let prober = state.prober.clone();
                tokio::spawn(async move { prober.probe().await });
            }
            Some(Command::Insert) => {
                let prober = state.prober.clone();
                tokio::spawn(async move {
                    prober.test_insert().await;
                });
            }
            Some(Command::Status) => print_status(&state.prober.state()),
            Some(Command::Help) => println!("{HELP}"),
            Some(Command::Quit) => break,
            None => warn!(input = %line.trim(), "Unknown command"),
        }
    }

    state.prober.shutdown();
    info!("Fitness Dashboard closed");
    Ok(())
}

fn print_status(state: &ConnectionProbeState) {
    println!("Status: {}", state.label());
    if let Some(detail) = &state.error_detail {
        println!("Details: {detail}");
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitness_dashboard_app=info,fitness_dashboard=info".into()
        } else {
            "fitness_dashboard_app=debug,fitness_dashboard=debug,reqwest=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development; stdout belongs to the dashboard
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
