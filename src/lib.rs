//! # Network Camp SDK
//!
//! A Rust client for the Network Camp uptime-monitoring API: monitors,
//! response-time series, incidents and daily latency aggregates.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain records, error types, network constants (always available)
//! 2. **HTTP API** — `NetworkCampHttp`, bearer auth and an explicit retry policy
//! 3. **High-Level Client** — `NetworkCampClient` with a builder and nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use networkcamp::prelude::*;
//!
//! let client = NetworkCampClient::builder()
//!     .api_key("nc_live_...")
//!     .build()?;
//!
//! let monitors = client.monitors().list().await?;
//! let series = client.monitors().response_series(&monitors[0].id, Some(100)).await?;
//! let incidents = client.list_incidents().await?.data;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): record types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and environment constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `NetworkCampClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::incident::{Incident, IncidentImpact, IncidentStatus};
    pub use crate::domain::latency::LatencyDaily;
    pub use crate::domain::monitor::{Monitor, MonitorStatus, ResponsePoint};
    pub use crate::domain::ListResponse;

    // Errors
    pub use crate::error::{ApiError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        IncidentsClient, MonitorsClient, NetworkCampClient, NetworkCampClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::http::{NetworkCampHttp, DEFAULT_RESPONSE_SERIES_LIMIT};
}
