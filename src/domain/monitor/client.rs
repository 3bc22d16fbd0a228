//! Monitors sub-client — monitor listing, response series, daily latency.

use crate::client::NetworkCampClient;
use crate::domain::latency::LatencyDaily;
use crate::domain::monitor::{Monitor, ResponsePoint};
use crate::error::SdkError;

/// Sub-client for monitor operations.
pub struct Monitors<'a> {
    pub(crate) client: &'a NetworkCampClient,
}

impl<'a> Monitors<'a> {
    /// All monitors for the domains owned by the API key.
    pub async fn list(&self) -> Result<Vec<Monitor>, SdkError> {
        let resp = self.client.http.list_monitors().await?;
        Ok(resp.into_inner())
    }

    /// Find a monitor by id in the full listing.
    pub async fn get(&self, monitor_id: &str) -> Result<Option<Monitor>, SdkError> {
        let monitors = self.list().await?;
        Ok(monitors.into_iter().find(|m| m.id == monitor_id))
    }

    /// Recent check samples, oldest first as returned by the service.
    pub async fn response_series(
        &self,
        monitor_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ResponsePoint>, SdkError> {
        let resp = self.client.http.response_series(monitor_id, limit).await?;
        Ok(resp.into_inner())
    }

    pub async fn latency_daily(&self, monitor_id: &str) -> Result<Vec<LatencyDaily>, SdkError> {
        let resp = self.client.http.latency_daily(monitor_id).await?;
        Ok(resp.into_inner())
    }
}
