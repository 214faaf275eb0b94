//! Common test utilities for integration tests
//!
//! Scripted remote clients and a recording notifier.

#![allow(dead_code)]

use async_trait::async_trait;
use fitness_dashboard_app::config::{ProbeConfig, StalenessPolicy};
use fitness_dashboard_app::error::{ClientError, ClientResult};
use fitness_dashboard_app::notify::Notifier;
use fitness_dashboard_app::remote::{RemoteDataClient, RemoteResponse, Row};
use fitness_dashboard_app::services::ConnectivityProber;
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub type Reply = ClientResult<RemoteResponse<Vec<Row>>>;

/// Builds a reply that fails before any response
pub fn failure(message: &str) -> Reply {
    Err(ClientError::Io(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        message.to_string(),
    )))
}

pub fn rows(count: usize) -> Reply {
    Ok(RemoteResponse::ok(
        (0..count)
            .map(|i| serde_json::json!({"client_name": format!("row {i}")}))
            .collect(),
    ))
}

pub fn returned_error(message: &str) -> Reply {
    Ok(RemoteResponse::err(
        fitness_dashboard_shared::ErrorInfo::new(message),
    ))
}

/// Client answering from queues of canned replies
#[derive(Default)]
pub struct ScriptedClient {
    selects: Mutex<VecDeque<Reply>>,
    inserts: Mutex<VecDeque<Reply>>,
    select_calls: AtomicUsize,
    inserted: Mutex<Vec<Vec<Row>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_select(self, reply: Reply) -> Self {
        self.selects.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_insert(self, reply: Reply) -> Self {
        self.inserts.lock().unwrap().push_back(reply);
        self
    }

    pub fn select_calls(&self) -> usize {
        self.select_calls.load(Ordering::SeqCst)
    }

    pub fn inserted(&self) -> Vec<Vec<Row>> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteDataClient for ScriptedClient {
    async fn select(&self, _collection: &str, _limit: usize) -> Reply {
        self.select_calls.fetch_add(1, Ordering::SeqCst);
        self.selects
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| rows(0))
    }

    async fn insert(&self, _collection: &str, records: Vec<Row>) -> Reply {
        self.inserted.lock().unwrap().push(records);
        self.inserts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| rows(1))
    }
}

/// Client whose selects stay pending until the test releases them
///
/// The n-th select call waits on the n-th gate.
pub struct GatedClient {
    gates: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    calls: AtomicUsize,
}

impl GatedClient {
    pub fn new(count: usize) -> (Self, Vec<oneshot::Sender<Reply>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..count).map(|_| oneshot::channel()).unzip();
        let client = Self {
            gates: Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        };
        (client, senders)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteDataClient for GatedClient {
    async fn select(&self, _collection: &str, _limit: usize) -> Reply {
        let gate = self.gates.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| failure("gate dropped")),
            None => failure("no gate left"),
        }
    }

    async fn insert(&self, _collection: &str, _records: Vec<Row>) -> Reply {
        rows(1)
    }
}

/// Notifier keeping every acknowledgment
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn acknowledge(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn probe_config(staleness: StalenessPolicy) -> ProbeConfig {
    ProbeConfig {
        staleness,
        ..ProbeConfig::default()
    }
}

pub fn prober(
    client: Arc<dyn RemoteDataClient>,
    notifier: Arc<RecordingNotifier>,
    staleness: StalenessPolicy,
) -> ConnectivityProber {
    ConnectivityProber::new(client, notifier, probe_config(staleness))
}

/// Yield until `client` has seen `calls` selects
pub async fn wait_for_calls(client: &GatedClient, calls: usize) {
    while client.calls() < calls {
        tokio::task::yield_now().await;
    }
}
