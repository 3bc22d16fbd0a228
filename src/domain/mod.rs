//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Record types matching the backend's JSON shapes
//! - `client.rs` — Sub-client with HTTP methods (where the domain owns endpoints)

pub mod incident;
pub mod latency;
pub mod monitor;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `{ "data": [...] }` envelope every list endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

/// Parse a wire timestamp as RFC 3339; anything else yields `None`.
pub(crate) fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
