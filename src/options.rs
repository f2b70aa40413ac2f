//! Per-operation options
//!
//! Each remote operation has one options struct. Every recognised option is a
//! named field; `Default` gives the documented defaults:
//!
//! | Field | Default | On the wire |
//! |-------|---------|-------------|
//! | `with_decryption`, `recursive`, `overwrite` | `false` | always present |
//! | `description` | `""` | always present |
//! | `filters` | `[]` | always present |
//! | `parameter_filters` | `None` | omitted when `None` |
//! | `max_results`, `next_token` | `None` | omitted when `None` |
//! | `key_id`, `allowed_pattern`, `parameter_version` | `None` | omitted when `None` |
//!
//! All structs also deserialize from a loose snake_case JSON map through
//! [`from_value`]; unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::types::filter::list_or_none;
use crate::types::{InstanceInformationFilter, ParameterFilter};
use crate::Result;

/// Read an options struct from a JSON option map.
///
/// ```rust
/// use ssm_request::options::{self, GetParametersByPathOptions};
///
/// let opts: GetParametersByPathOptions =
///     options::from_value(serde_json::json!({"recursive": true, "max_results": 10})).unwrap();
/// assert!(opts.recursive);
/// assert_eq!(opts.max_results, Some(10));
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Options for `get_parameter` and `get_parameters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetParameterOptions {
    pub with_decryption: bool,
}

impl GetParameterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decryption(mut self, enable: bool) -> Self {
        self.with_decryption = enable;
        self
    }
}

pub type GetParametersOptions = GetParameterOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetParametersByPathOptions {
    pub recursive: bool,
    pub with_decryption: bool,
    /// Non-list values in a loose option map read as `None`.
    #[serde(deserialize_with = "list_or_none")]
    pub parameter_filters: Option<Vec<ParameterFilter>>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

impl GetParametersByPathOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursive(mut self, enable: bool) -> Self {
        self.recursive = enable;
        self
    }

    pub fn with_decryption(mut self, enable: bool) -> Self {
        self.with_decryption = enable;
        self
    }

    pub fn parameter_filters(mut self, filters: Vec<ParameterFilter>) -> Self {
        self.parameter_filters = Some(filters);
        self
    }

    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(n);
        self
    }

    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PutParameterOptions {
    pub overwrite: bool,
    pub description: String,
    /// KMS key for `SecureString` values.
    pub key_id: Option<String>,
    /// Regex the remote side validates the value against.
    pub allowed_pattern: Option<String>,
}

impl PutParameterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overwrite(mut self, enable: bool) -> Self {
        self.overwrite = enable;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    pub fn allowed_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.allowed_pattern = Some(pattern.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetParameterHistoryOptions {
    pub with_decryption: bool,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

impl GetParameterHistoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decryption(mut self, enable: bool) -> Self {
        self.with_decryption = enable;
        self
    }

    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(n);
        self
    }

    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DescribeInstanceInformationOptions {
    pub filters: Vec<InstanceInformationFilter>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

impl DescribeInstanceInformationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: InstanceInformationFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(n);
        self
    }

    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DescribeParametersOptions {
    #[serde(deserialize_with = "list_or_none")]
    pub parameter_filters: Option<Vec<ParameterFilter>>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

impl DescribeParametersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter_filters(mut self, filters: Vec<ParameterFilter>) -> Self {
        self.parameter_filters = Some(filters);
        self
    }

    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(n);
        self
    }

    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelParameterVersionOptions {
    /// Version to label; the remote side uses the latest when omitted.
    pub parameter_version: Option<u64>,
}

impl LabelParameterVersionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter_version(mut self, version: u64) -> Self {
        self.parameter_version = Some(version);
        self
    }
}
