//! PostgREST (Supabase) implementation of the remote data client

use super::{RemoteDataClient, RemoteResponse, Row};
use crate::config::RemoteConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use fitness_dashboard_shared::ErrorInfo;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for a PostgREST endpoint
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Secret<String>,
}

impl PostgrestClient {
    /// Build a client from configuration
    pub fn new(config: &RemoteConfig) -> ClientResult<Self> {
        let base_url = config.url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(config.url.clone()));
        }
        if config.api_key.is_empty() {
            warn!("No API key configured for the remote store; requests will be anonymous");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: Secret::new(config.api_key.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        request
            .header("apikey", key)
            .header(AUTHORIZATION, format!("Bearer {key}"))
    }

    async fn read_rows(response: Response) -> ClientResult<RemoteResponse<Vec<Row>>> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = error_info(status, &body);
            debug!(status = %status, error = %error.message, "Remote store returned an error");
            return Ok(RemoteResponse::err(error));
        }

        if body.trim().is_empty() {
            return Ok(RemoteResponse::ok(Vec::new()));
        }

        let rows: Vec<Row> = serde_json::from_str(&body)?;
        Ok(RemoteResponse::ok(rows))
    }
}

/// Decode an error body, falling back to its raw text or the status line
fn error_info(status: StatusCode, body: &str) -> ErrorInfo {
    match serde_json::from_str::<ErrorInfo>(body) {
        Ok(info) => info,
        Err(_) if body.trim().is_empty() => ErrorInfo::new(status.to_string()),
        Err(_) => ErrorInfo::new(body.trim()),
    }
}

#[async_trait]
impl RemoteDataClient for PostgrestClient {
    async fn select(&self, collection: &str, limit: usize) -> ClientResult<RemoteResponse<Vec<Row>>> {
        debug!(collection, limit, "Selecting rows");

        let request = self
            .http
            .get(self.collection_url(collection))
            .query(&[("select", "*".to_string()), ("limit", limit.to_string())]);

        let response = self.authorized(request).send().await?;
        Self::read_rows(response).await
    }

    async fn insert(&self, collection: &str, records: Vec<Row>) -> ClientResult<RemoteResponse<Vec<Row>>> {
        debug!(collection, count = records.len(), "Inserting rows");

        let request = self
            .http
            .post(self.collection_url(collection))
            .header("Prefer", "return=minimal")
            .json(&records);

        let response = self.authorized(request).send().await?;
        Self::read_rows(response).await
    }
}
