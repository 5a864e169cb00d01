//! Core-command device commands.

use reqwest::Method;
use serde_json::{Map, Value};

use super::devices::non_empty;
use crate::client::EdgexClient;
use crate::endpoints::{decode_body, decode_field};
use crate::error::{ClientError, Result};
use crate::models::{DeviceCoreCommand, Event, UpdateOutcome};
use crate::resource::{ListQuery, ListResult};
use edgex_config::ServiceName;

impl EdgexClient {
    /// Commands of every device known to core-command.
    pub async fn list_device_commands(
        &self,
        query: &ListQuery,
    ) -> Result<ListResult<DeviceCoreCommand>> {
        self.list_collection(
            ServiceName::CoreCommand,
            "device/all",
            "deviceCoreCommands",
            query,
        )
        .await
    }

    /// Commands of one device.
    pub async fn device_commands(&self, device_name: &str) -> Result<DeviceCoreCommand> {
        let path = format!("device/name/{}", non_empty("device name", device_name)?);
        self.get_field(ServiceName::CoreCommand, &path, "deviceCoreCommand")
            .await
            .map_err(|e| match e {
                ClientError::Remote {
                    status: 404,
                    message,
                    ..
                } => ClientError::NotFound(format!("device '{device_name}' not found: {message}")),
                other => other,
            })
    }

    /// Issue a read command; returns the event produced, when the device service sends one.
    pub async fn issue_get_command(
        &self,
        device_name: &str,
        command: &str,
        push_event: bool,
    ) -> Result<Option<Event>> {
        let path = format!(
            "device/name/{}/{}",
            non_empty("device name", device_name)?,
            non_empty("command name", command)?
        );
        let query = [
            ("ds-pushevent", yes_no(push_event).to_string()),
            ("ds-returnevent", "yes".to_string()),
        ];
        let (bytes, url) = self
            .execute(Method::GET, ServiceName::CoreCommand, &path, &query, None)
            .await?;
        decode_field(&bytes, "event", &url)
    }

    /// Issue a set command with `resource name -> value` pairs.
    pub async fn issue_set_command(
        &self,
        device_name: &str,
        command: &str,
        values: &Map<String, Value>,
    ) -> Result<UpdateOutcome> {
        if values.is_empty() {
            return Err(ClientError::Validation(
                "set command requires at least one resource value".to_string(),
            ));
        }
        let path = format!(
            "device/name/{}/{}",
            non_empty("device name", device_name)?,
            non_empty("command name", command)?
        );
        let body = Value::Object(values.clone());
        let (bytes, url) = self
            .execute(Method::PUT, ServiceName::CoreCommand, &path, &[], Some(&body))
            .await?;
        decode_body(&bytes, &url)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
