//! Transmission listings and cleanup.

use std::time::Duration;

use super::devices::non_empty;
use crate::client::EdgexClient;
use crate::error::Result;
use crate::models::{TRANSMISSION_STATUSES, Transmission, UpdateOutcome, ensure_member};
use crate::resource::{ListQuery, ListResult, Resource};

impl EdgexClient {
    pub async fn list_transmissions_by_status(
        &self,
        status: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Transmission>> {
        let status = ensure_member("transmission status", status, &TRANSMISSION_STATUSES)?;
        let path = format!("transmission/status/{status}");
        self.resource::<Transmission>().list_at(&path, query).await
    }

    pub async fn list_transmissions_by_notification(
        &self,
        notification_id: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Transmission>> {
        let path = format!(
            "transmission/notification/id/{}",
            non_empty("notification id", notification_id)?
        );
        self.resource::<Transmission>().list_at(&path, query).await
    }

    /// Delete transmissions older than `age` (milliseconds on the wire).
    pub async fn delete_transmissions_older_than(&self, age: Duration) -> Result<UpdateOutcome> {
        let path = format!("transmission/age/{}", age.as_millis());
        self.delete(Transmission::SERVICE, &path).await
    }
}
