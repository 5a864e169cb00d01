//! Device profile upload from YAML files.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;

use crate::client::EdgexClient;
use crate::endpoints::{decode_body, send_request};
use crate::error::{ClientError, Result};
use crate::models::{AddOutcome, DeviceProfile};
use crate::resource::Resource;

impl EdgexClient {
    /// Upload a device profile definition file (`POST /deviceprofile/uploadfile`).
    ///
    /// core-metadata parses the YAML itself, so the file is sent verbatim as
    /// the multipart `file` field.
    pub async fn upload_device_profile(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<AddOutcome> {
        if contents.is_empty() {
            return Err(ClientError::Validation(format!(
                "device profile file '{file_name}' is empty"
            )));
        }

        let url = self.url(DeviceProfile::SERVICE, "deviceprofile/uploadfile")?;
        let url_text = url.to_string();
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let mut builder = self.http.request(Method::POST, url).multipart(form);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let bytes = send_request(builder, Method::POST.as_str(), &url_text).await?;
        let outcome: AddOutcome = decode_body(&bytes, &url_text)?;
        if outcome.is_success() {
            Ok(outcome)
        } else {
            Err(ClientError::Remote {
                status: outcome.status_code,
                url: url_text,
                message: outcome.message.unwrap_or_default(),
            })
        }
    }
}
