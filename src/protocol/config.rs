//! Builder configuration
//!
//! Controls the values stamped into every descriptor: the target namespace,
//! the content type, and where the external executor should send the request.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, ErrorContext};
use crate::Result;

use super::{CONTENT_TYPE, SERVICE_NAME, TARGET_PREFIX};

/// Configuration shared by every descriptor a [`crate::RequestBuilder`] produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Namespace prepended to the action in `x-amz-target`.
    #[serde(default = "default_target_prefix")]
    pub target_prefix: String,
    /// Service identifier carried on the descriptor (used for signing by the executor).
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Region used to derive the regional endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Explicit endpoint; takes precedence over `region`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_target_prefix() -> String {
    TARGET_PREFIX.to_string()
}

fn default_service() -> String {
    SERVICE_NAME.to_string()
}

fn default_content_type() -> String {
    CONTENT_TYPE.to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            target_prefix: default_target_prefix(),
            service: default_service(),
            content_type: default_content_type(),
            region: None,
            endpoint: None,
        }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("failed to parse builder config: {}", e),
                ErrorContext::new().with_source("builder_config"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by process environment:
    /// - `SSM_REQUEST_TARGET_PREFIX`
    /// - `SSM_REQUEST_REGION`
    /// - `SSM_REQUEST_ENDPOINT`
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`BuilderConfig::from_env`] with a caller-supplied lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(prefix) = non_empty("SSM_REQUEST_TARGET_PREFIX") {
            config.target_prefix = prefix;
        }
        config.region = non_empty("SSM_REQUEST_REGION");
        config.endpoint = non_empty("SSM_REQUEST_ENDPOINT");
        config.validate()?;
        Ok(config)
    }

    /// Check that an explicit endpoint parses as a URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref endpoint) = self.endpoint {
            Self::parse_endpoint(endpoint)?;
        }
        Ok(())
    }

    /// Resolve the endpoint URL, or `None` when neither endpoint nor region is set.
    pub fn endpoint_url(&self) -> Result<Option<Url>> {
        if let Some(ref endpoint) = self.endpoint {
            return Self::parse_endpoint(endpoint).map(Some);
        }
        match self.region {
            Some(ref region) => {
                let raw = format!("https://{}.{}.amazonaws.com/", self.service, region);
                Self::parse_endpoint(&raw).map(Some)
            }
            None => Ok(None),
        }
    }

    fn parse_endpoint(raw: &str) -> Result<Url> {
        Url::parse(raw).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid endpoint URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.endpoint")
                    .with_details(raw.to_string())
                    .with_source("builder_config"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.target_prefix, "AmazonSSM");
        assert_eq!(config.service, "ssm");
        assert_eq!(config.content_type, "application/x-amz-json-1.1");
        assert!(config.endpoint_url().unwrap().is_none());
    }

    #[test]
    fn test_region_endpoint() {
        let config = BuilderConfig::new().with_region("eu-west-1");
        let url = config.endpoint_url().unwrap().unwrap();
        assert_eq!(url.as_str(), "https://ssm.eu-west-1.amazonaws.com/");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = BuilderConfig::new()
            .with_region("eu-west-1")
            .with_endpoint("http://localhost:4566/");
        let url = config.endpoint_url().unwrap().unwrap();
        assert_eq!(url.as_str(), "http://localhost:4566/");
    }

    #[test]
    fn test_yaml_partial() {
        let config = BuilderConfig::from_yaml_str("region: us-east-2\n").unwrap();
        assert_eq!(config.region.as_deref(), Some("us-east-2"));
        assert_eq!(config.target_prefix, "AmazonSSM");
    }

    #[test]
    fn test_yaml_bad_endpoint() {
        let err = BuilderConfig::from_yaml_str("endpoint: 'not a url'\n").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("config.endpoint")
        );
    }

    #[test]
    fn test_env_lookup() {
        let vars: HashMap<&str, &str> = [
            ("SSM_REQUEST_REGION", "ap-south-1"),
            ("SSM_REQUEST_ENDPOINT", ""),
        ]
        .into_iter()
        .collect();
        let config =
            BuilderConfig::from_env_with(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.region.as_deref(), Some("ap-south-1"));
        assert!(config.endpoint.is_none());
        assert_eq!(config.target_prefix, "AmazonSSM");
    }
}
