//! Incident domain — service disruptions and the monitors they affect.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::parse_utc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Incident lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Investigating,
    Monitoring,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Monitoring => "monitoring",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, IncidentStatus::Resolved)
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Incident ────────────────────────────────────────────────────────────────

/// How an incident affects one monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentImpact {
    pub monitor_id: String,
    pub impact: String,
}

/// A recorded service-disruption event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub domain_id: String,
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
    pub kind: String,
    pub impacts: Vec<IncidentImpact>,
    pub created_at: String,
    pub updated_at: String,
    /// Serialized as `null` while the incident is open.
    pub resolved_at: Option<String>,
}

impl Incident {
    /// Whether `monitor_id` is listed in the incident's impacts.
    pub fn affects(&self, monitor_id: &str) -> bool {
        self.impacts.iter().any(|i| i.monitor_id == monitor_id)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.updated_at)
    }

    pub fn resolved_at_utc(&self) -> Option<DateTime<Utc>> {
        self.resolved_at.as_deref().and_then(parse_utc)
    }
}
