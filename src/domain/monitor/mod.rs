//! Monitor domain — monitored endpoints and their response-time series.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::parse_utc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Result of the most recent check of a monitor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MonitorStatus {
    Up,
    Down,
    Degraded,
}

impl MonitorStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MonitorStatus::Up => "up",
            MonitorStatus::Down => "down",
            MonitorStatus::Degraded => "degraded",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, MonitorStatus::Up)
    }
}

impl std::fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Monitor ─────────────────────────────────────────────────────────────────

/// A configured endpoint the platform checks periodically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    pub id: String,
    pub domain_id: String,
    pub name: String,
    /// Check type as reported by the service (e.g. `"http"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub status: MonitorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_at: Option<String>,
    pub created_at: String,
    /// Uptime percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    /// Check interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
}

impl Monitor {
    /// `created_at` parsed as RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.created_at)
    }

    pub fn last_checked_at_utc(&self) -> Option<DateTime<Utc>> {
        self.last_checked_at.as_deref().and_then(parse_utc)
    }
}

// ─── Response series ─────────────────────────────────────────────────────────

/// A single check sample in a monitor's response series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePoint {
    pub timestamp: String,
    pub response_time_ms: f64,
    pub status: MonitorStatus,
}

impl ResponsePoint {
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.timestamp)
    }
}
