//! Request descriptor handed to the external executor

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, ErrorContext};
use crate::Result;

use super::{Action, HEADER_CONTENT_TYPE, HEADER_TARGET};

/// A fully-formed, unsent Parameter Store request.
///
/// Built once per call and never mutated afterward. Signing, transport and
/// response decoding are the executor's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    /// Action this request invokes.
    pub action: Action,
    /// Service identifier (e.g. "ssm").
    pub service: String,
    /// Resolved endpoint, when the builder config names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Always "POST".
    pub method: String,
    /// Always "/".
    pub path: String,
    /// Target header first, then content-type.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub payload: Map<String, Value>,
}

impl RequestDescriptor {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of `x-amz-target`.
    pub fn target(&self) -> Option<&str> {
        self.header(HEADER_TARGET)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(HEADER_CONTENT_TYPE)
    }

    /// Payload as a JSON value.
    pub fn body(&self) -> Value {
        Value::Object(self.payload.clone())
    }

    /// Payload encoded as JSON bytes.
    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.payload)?)
    }

    /// Build, but do not send, a `reqwest` request against the resolved endpoint.
    ///
    /// The executor is expected to sign and send the result.
    pub fn to_reqwest(&self, client: &reqwest::Client) -> Result<reqwest::RequestBuilder> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            Error::configuration_with_context(
                "descriptor has no endpoint; set a region or endpoint on the builder config",
                ErrorContext::new()
                    .with_field_path("config.endpoint")
                    .with_source("request_descriptor"),
            )
        })?;
        let base = url::Url::parse(endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid endpoint URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.endpoint")
                    .with_details(endpoint.to_string()),
            )
        })?;
        let url = base.join(&self.path).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot join request path: {}", e),
                ErrorContext::new().with_details(self.path.clone()),
            )
        })?;

        let method = reqwest::Method::from_bytes(self.method.as_bytes()).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid HTTP method: {}", e),
                ErrorContext::new().with_details(self.method.clone()),
            )
        })?;

        let mut builder = client.request(method, url);
        for (k, v) in &self.headers {
            builder = builder.header(k.as_str(), v.as_str());
        }
        Ok(builder.body(self.body_bytes()?))
    }
}
