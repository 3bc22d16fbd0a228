//! Latency domain — per-day percentile aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Latency percentiles for one monitor over one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyDaily {
    /// Calendar day, `YYYY-MM-DD` as sent by the service.
    pub date: String,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
    /// Number of checks aggregated.
    pub count: u64,
}

impl LatencyDaily {
    /// `date` parsed as `YYYY-MM-DD`.
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
