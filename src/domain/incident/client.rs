//! Incidents sub-client.

use crate::client::NetworkCampClient;
use crate::domain::incident::Incident;
use crate::error::SdkError;

pub struct Incidents<'a> {
    pub(crate) client: &'a NetworkCampClient,
}

impl<'a> Incidents<'a> {
    pub async fn list(&self) -> Result<Vec<Incident>, SdkError> {
        let resp = self.client.http.list_incidents().await?;
        Ok(resp.into_inner())
    }

    /// Incidents that have not been resolved yet.
    pub async fn open(&self) -> Result<Vec<Incident>, SdkError> {
        let incidents = self.list().await?;
        Ok(incidents
            .into_iter()
            .filter(|i| !i.status.is_resolved())
            .collect())
    }

    /// Incidents listing `monitor_id` among their impacts.
    pub async fn for_monitor(&self, monitor_id: &str) -> Result<Vec<Incident>, SdkError> {
        let incidents = self.list().await?;
        Ok(incidents
            .into_iter()
            .filter(|i| i.affects(monitor_id))
            .collect())
    }
}
