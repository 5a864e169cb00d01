//! Core-data reading queries.

use super::devices::non_empty;
use crate::client::EdgexClient;
use crate::error::Result;
use crate::models::{CountResponse, Reading};
use crate::resource::{ListQuery, ListResult, Resource};

impl EdgexClient {
    pub async fn count_readings(&self) -> Result<u64> {
        let count: CountResponse = self.get_json(Reading::SERVICE, "reading/count", &[]).await?;
        Ok(count.count)
    }

    pub async fn count_readings_by_device(&self, device_name: &str) -> Result<u64> {
        let path = format!(
            "reading/count/device/name/{}",
            non_empty("device name", device_name)?
        );
        let count: CountResponse = self.get_json(Reading::SERVICE, &path, &[]).await?;
        Ok(count.count)
    }

    pub async fn list_readings_by_device(
        &self,
        device_name: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Reading>> {
        let path = format!("reading/device/name/{}", non_empty("device name", device_name)?);
        self.resource::<Reading>().list_at(&path, query).await
    }

    pub async fn list_readings_by_resource(
        &self,
        resource_name: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Reading>> {
        let path = format!(
            "reading/resourceName/{}",
            non_empty("resource name", resource_name)?
        );
        self.resource::<Reading>().list_at(&path, query).await
    }
}
