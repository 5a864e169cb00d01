//! Device lookups beyond generic CRUD.

use reqwest::Method;

use crate::client::EdgexClient;
use crate::endpoints::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::Device;
use crate::resource::{ListQuery, ListResult, Resource};

impl EdgexClient {
    /// Devices created from the named profile.
    pub async fn list_devices_by_profile(
        &self,
        profile_name: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Device>> {
        let path = format!("device/profile/name/{}", non_empty("profile name", profile_name)?);
        self.resource::<Device>().list_at(&path, query).await
    }

    /// Devices owned by the named device service.
    pub async fn list_devices_by_service(
        &self,
        service_name: &str,
        query: &ListQuery,
    ) -> Result<ListResult<Device>> {
        let path = format!("device/service/name/{}", non_empty("service name", service_name)?);
        self.resource::<Device>().list_at(&path, query).await
    }

    /// Whether a device with this name exists.
    pub async fn device_exists(&self, name: &str) -> Result<bool> {
        let path = format!("device/check/name/{}", non_empty("device name", name)?);
        match self
            .execute(Method::GET, Device::SERVICE, &path, &[], None)
            .await
        {
            Ok(_) => Ok(true),
            Err(ClientError::Remote { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Encode a required path value, rejecting blanks.
pub(crate) fn non_empty(what: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{what} must not be empty")));
    }
    Ok(encode_path_segment(value))
}
