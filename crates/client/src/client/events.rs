//! Core-data event routes beyond generic CRUD.

use reqwest::Method;
use std::time::Duration;

use super::devices::non_empty;
use crate::client::EdgexClient;
use crate::endpoints::{decode_body, request_envelope};
use crate::error::{ClientError, Result};
use crate::models::{AddOutcome, CountResponse, Event, UpdateOutcome, Validate};
use crate::resource::{ListQuery, ListResult, Resource};

impl EdgexClient {
    /// Number of events held by core-data.
    pub async fn count_events(&self) -> Result<u64> {
        let count: CountResponse = self.get_json(Event::SERVICE, "event/count", &[]).await?;
        Ok(count.count)
    }

    /// Number of events from one device.
    pub async fn count_events_by_device(&self, device_name: &str) -> Result<u64> {
        let path = format!("event/count/device/name/{}", non_empty("device name", device_name)?);
        let count: CountResponse = self.get_json(Event::SERVICE, &path, &[]).await?;
        Ok(count.count)
    }

    pub async fn list_events_by_device(
        &self,
        device_name: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Event>> {
        let path = format!("event/device/name/{}", non_empty("device name", device_name)?);
        self.resource::<Event>().list_at(&path, query).await
    }

    /// Delete every event (and its readings) from one device.
    pub async fn delete_events_by_device(&self, device_name: &str) -> Result<UpdateOutcome> {
        let path = format!("event/device/name/{}", non_empty("device name", device_name)?);
        self.delete(Event::SERVICE, &path).await
    }

    /// Delete events older than `age`; core-data takes the age in nanoseconds.
    pub async fn delete_events_older_than(&self, age: Duration) -> Result<UpdateOutcome> {
        let path = format!("event/age/{}", age.as_nanos());
        self.delete(Event::SERVICE, &path).await
    }

    /// Submit an event with its readings (`POST /event/{profile}/{device}/{source}`).
    pub async fn add_event(&self, event: &Event) -> Result<AddOutcome> {
        event.validate()?;
        let path = format!(
            "event/{}/{}/{}",
            non_empty("profile name", &event.profile_name)?,
            non_empty("device name", &event.device_name)?,
            non_empty("source name", &event.source_name)?,
        );
        let body = request_envelope(Event::ITEM_KEY, event)?;
        let (bytes, url) = self
            .execute(Method::POST, Event::SERVICE, &path, &[], Some(&body))
            .await?;
        let outcome: AddOutcome = decode_body(&bytes, &url)?;
        if outcome.is_success() {
            Ok(outcome)
        } else {
            Err(ClientError::Remote {
                status: outcome.status_code,
                url,
                message: outcome.message.unwrap_or_default(),
            })
        }
    }
}
