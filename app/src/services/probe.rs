//! Connectivity prober
//!
//! Reads from the probe collection, classifies the answer and publishes the
//! resulting `ConnectionProbeState` on a watch channel. Every probe gets a
//! request id; under `StalenessPolicy::DiscardStale` a completion is applied
//! only if no newer probe was issued meanwhile. Completions that arrive after
//! `shutdown` are dropped.

use crate::config::{ProbeConfig, StalenessPolicy};
use crate::notify::Notifier;
use crate::remote::RemoteDataClient;
use chrono::Utc;
use fitness_dashboard_shared::{ConnectionProbeState, ProbeOutcome, StatusCheck};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Result of the insert check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The store answered with an error
    Rejected(String),
    /// No response
    Failed(String),
}

pub struct ConnectivityProber {
    client: Arc<dyn RemoteDataClient>,
    notifier: Arc<dyn Notifier>,
    config: ProbeConfig,
    state: watch::Sender<ConnectionProbeState>,
    issued: AtomicU64,
    alive: AtomicBool,
}

impl ConnectivityProber {
    pub fn new(
        client: Arc<dyn RemoteDataClient>,
        notifier: Arc<dyn Notifier>,
        config: ProbeConfig,
    ) -> Self {
        let (state, _) = watch::channel(ConnectionProbeState::testing());
        Self {
            client,
            notifier,
            config,
            state,
            issued: AtomicU64::new(0),
            alive: AtomicBool::new(true),
        }
    }

    /// Current probe state
    pub fn state(&self) -> ConnectionProbeState {
        self.state.borrow().clone()
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<ConnectionProbeState> {
        self.state.subscribe()
    }

    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    /// Initial probe run when the panel appears
    pub async fn activate(&self) {
        info!(collection = %self.config.collection, "Activating connectivity probe");
        self.probe().await;
    }

    /// Stop applying completions; in-flight probes finish without effect
    pub fn shutdown(&self) {
        self.alive.store(false, Ordering::SeqCst);
        debug!("Connectivity prober shut down");
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Read one page from the probe collection and update the state
    pub async fn probe(&self) {
        let request_id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(request_id, collection = %self.config.collection, "Probing remote store");

        let outcome = match self
            .client
            .select(&self.config.collection, self.config.row_limit)
            .await
        {
            Ok(response) => match response.error {
                Some(error) => ProbeOutcome::Returned(error),
                None => ProbeOutcome::Rows(response.data.map_or(0, |rows| rows.len())),
            },
            Err(err) => ProbeOutcome::Failed(err.to_string()),
        };

        let next = ConnectionProbeState::from_outcome(outcome, &self.config.collection, Utc::now());
        self.apply(request_id, next);
    }

    fn apply(&self, request_id: u64, next: ConnectionProbeState) {
        if !self.is_alive() {
            debug!(request_id, "Discarding probe result after shutdown");
            return;
        }

        let latest = self.issued.load(Ordering::SeqCst);
        if self.config.staleness == StalenessPolicy::DiscardStale && request_id != latest {
            debug!(request_id, latest, "Discarding stale probe result");
            return;
        }

        match next.error_detail.as_deref() {
            Some(detail) if !next.status.is_reachable() => {
                warn!(request_id, status = next.label(), detail, "Probe finished")
            }
            _ => info!(request_id, status = next.label(), "Probe finished"),
        }

        self.state.send_replace(next);
    }

    /// Insert a test record, re-probing on success
    pub async fn test_insert(&self) -> InsertOutcome {
        let record = StatusCheck::new(self.config.insert_client_name.clone());
        let row = match serde_json::to_value(&record) {
            Ok(row) => row,
            Err(err) => return self.insert_failed(err.to_string()),
        };

        match self.client.insert(&self.config.collection, vec![row]).await {
            Ok(response) => match response.error {
                Some(error) => {
                    warn!(error = %error.message, "Test insert rejected");
                    self.notifier
                        .acknowledge(&format!("Insert failed: {}", error.message));
                    InsertOutcome::Rejected(error.message)
                }
                None => {
                    info!(collection = %self.config.collection, "Test insert succeeded");
                    self.notifier
                        .acknowledge("✅ Successfully inserted test data!");
                    self.probe().await;
                    InsertOutcome::Inserted
                }
            },
            Err(err) => self.insert_failed(err.to_string()),
        }
    }

    fn insert_failed(&self, message: String) -> InsertOutcome {
        warn!(error = %message, "Test insert failed");
        self.notifier.acknowledge(&format!("Insert error: {message}"));
        InsertOutcome::Failed(message)
    }
}
