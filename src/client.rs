//! High-level client — `NetworkCampClient` with nested sub-client accessors.
//!
//! Each domain that owns endpoints has its sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, environment configuration and the flat
//! endpoint methods.

use crate::domain::incident::client::Incidents;
use crate::domain::incident::Incident;
use crate::domain::latency::LatencyDaily;
use crate::domain::monitor::client::Monitors;
use crate::domain::monitor::{Monitor, ResponsePoint};
use crate::domain::ListResponse;
use crate::error::{HttpError, SdkError};
use crate::http::{NetworkCampHttp, RetryPolicy};
use crate::network::{API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};

use reqwest::Client;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::incident::client::Incidents as IncidentsClient;
pub use crate::domain::monitor::client::Monitors as MonitorsClient;

/// The primary entry point for the Network Camp SDK.
///
/// The endpoint methods are available both flat (`client.list_monitors()`)
/// and through sub-clients (`client.monitors().list()`). Cloning is cheap and
/// shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NetworkCampClient {
    pub(crate) http: NetworkCampHttp,
}

impl NetworkCampClient {
    pub fn builder() -> NetworkCampClientBuilder {
        NetworkCampClientBuilder::default()
    }

    /// Client for the default API URL with the standard retry policy.
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        Self::builder().api_key(api_key).build()
    }

    /// Configure from `NETWORKCAMP_API_KEY` and, if set, `NETWORKCAMP_API_URL`.
    pub fn from_env() -> Result<Self, SdkError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| SdkError::Config(format!("{} is not set", API_KEY_ENV)))?;
        let mut builder = Self::builder().api_key(&api_key);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(&url);
        }
        builder.build()
    }

    /// The low-level HTTP client, for custom paths or per-call retry policies.
    pub fn http(&self) -> &NetworkCampHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn monitors(&self) -> Monitors<'_> {
        Monitors { client: self }
    }

    pub fn incidents(&self) -> Incidents<'_> {
        Incidents { client: self }
    }

    // ── Endpoints ────────────────────────────────────────────────────────

    /// List monitors for all domains owned by the API key.
    pub async fn list_monitors(&self) -> Result<ListResponse<Monitor>, SdkError> {
        Ok(self.http.list_monitors().await?)
    }

    /// Recent check samples for a monitor; `limit` defaults to 720.
    pub async fn response_series(
        &self,
        monitor_id: &str,
        limit: Option<u32>,
    ) -> Result<ListResponse<ResponsePoint>, SdkError> {
        Ok(self.http.response_series(monitor_id, limit).await?)
    }

    /// List incidents for the owned domains.
    pub async fn list_incidents(&self) -> Result<ListResponse<Incident>, SdkError> {
        Ok(self.http.list_incidents().await?)
    }

    /// Daily latency aggregates for a monitor.
    pub async fn latency_daily(
        &self,
        monitor_id: &str,
    ) -> Result<ListResponse<LatencyDaily>, SdkError> {
        Ok(self.http.latency_daily(monitor_id).await?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct NetworkCampClientBuilder {
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl Default for NetworkCampClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            retry: RetryPolicy::default(),
            timeout: None,
        }
    }
}

impl NetworkCampClientBuilder {
    /// API key sent as `Authorization: Bearer <key>`. Required.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Override the base URL. Paths are appended to it verbatim.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Per-attempt transport timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<NetworkCampClient, SdkError> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Config("API key is required".to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::from)?;

        Ok(NetworkCampClient {
            http: NetworkCampHttp::with_client(&self.base_url, &api_key, client)
                .with_retry_policy(self.retry),
        })
    }
}
