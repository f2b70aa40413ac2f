//! Parameter Store operations
//!
//! One builder function per remote action. Each maps typed arguments to a
//! [`RequestDescriptor`] and performs no I/O.
//!
//! The free functions use the default [`BuilderConfig`] (namespace
//! `AmazonSSM`, no endpoint). Use a [`RequestBuilder`] to stamp a custom
//! namespace or a resolved endpoint onto every descriptor.
//!
//! Pagination keys (`MaxResults`, `NextToken`) only appear in the payload
//! when the caller supplied them; absent is never written as null or zero.

mod instances;
mod parameters;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use tracing::debug;

use crate::options::{
    DescribeInstanceInformationOptions, DescribeParametersOptions, GetParameterHistoryOptions,
    GetParameterOptions, GetParametersByPathOptions, GetParametersOptions,
    LabelParameterVersionOptions, PutParameterOptions,
};
use crate::protocol::{
    Action, BuilderConfig, RequestDescriptor, HEADER_CONTENT_TYPE, HEADER_TARGET, METHOD, PATH,
};
use crate::types::IntoParameterType;
use crate::Result;

static DEFAULT_BUILDER: Lazy<RequestBuilder> = Lazy::new(RequestBuilder::default);

/// Builds descriptors under one [`BuilderConfig`].
///
/// Immutable once constructed; share it freely across threads.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: BuilderConfig,
    endpoint: Option<String>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            config: BuilderConfig::default(),
            endpoint: None,
        }
    }
}

impl RequestBuilder {
    /// Resolve the endpoint once; fails only on a bad endpoint URL.
    pub fn new(config: BuilderConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?.map(|u| u.to_string());
        Ok(Self { config, endpoint })
    }

    /// Builder configured from `SSM_REQUEST_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(BuilderConfig::from_env()?)
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn descriptor(&self, action: Action, payload: Map<String, Value>) -> RequestDescriptor {
        debug!(
            action = %action,
            payload_keys = payload.len(),
            "built request descriptor"
        );
        RequestDescriptor {
            action,
            service: self.config.service.clone(),
            endpoint: self.endpoint.clone(),
            method: METHOD.to_string(),
            path: PATH.to_string(),
            headers: vec![
                (
                    HEADER_TARGET.to_string(),
                    action.target(&self.config.target_prefix),
                ),
                (
                    HEADER_CONTENT_TYPE.to_string(),
                    self.config.content_type.clone(),
                ),
            ],
            payload,
        }
    }
}

/// Insert `key` only when a value was supplied.
pub(crate) fn maybe_add<V: Into<Value>>(payload: &mut Map<String, Value>, key: &str, value: Option<V>) {
    if let Some(v) = value {
        payload.insert(key.to_string(), v.into());
    }
}

pub(crate) fn add_pagination(
    payload: &mut Map<String, Value>,
    max_results: Option<u32>,
    next_token: Option<&str>,
) {
    maybe_add(payload, "MaxResults", max_results);
    maybe_add(payload, "NextToken", next_token);
}

/// Unwrap a `json!` object literal into its map.
pub(crate) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub(crate) fn string_list<S: AsRef<str>>(items: &[S]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|s| Value::String(s.as_ref().to_string()))
            .collect(),
    )
}

pub fn get_parameter(name: &str, options: &GetParameterOptions) -> RequestDescriptor {
    DEFAULT_BUILDER.get_parameter(name, options)
}

pub fn get_parameters<S: AsRef<str>>(
    names: &[S],
    options: &GetParametersOptions,
) -> RequestDescriptor {
    DEFAULT_BUILDER.get_parameters(names, options)
}

pub fn get_parameters_by_path(
    path: &str,
    options: &GetParametersByPathOptions,
) -> RequestDescriptor {
    DEFAULT_BUILDER.get_parameters_by_path(path, options)
}

/// Fails when `parameter_type` names a type outside {string, string_list, secure_string}.
pub fn put_parameter<T: IntoParameterType>(
    name: &str,
    parameter_type: T,
    value: &str,
    options: &PutParameterOptions,
) -> Result<RequestDescriptor> {
    DEFAULT_BUILDER.put_parameter(name, parameter_type, value, options)
}

pub fn delete_parameter(name: &str) -> RequestDescriptor {
    DEFAULT_BUILDER.delete_parameter(name)
}

pub fn delete_parameters<S: AsRef<str>>(names: &[S]) -> RequestDescriptor {
    DEFAULT_BUILDER.delete_parameters(names)
}

pub fn get_parameter_history(
    name: &str,
    options: &GetParameterHistoryOptions,
) -> RequestDescriptor {
    DEFAULT_BUILDER.get_parameter_history(name, options)
}

pub fn describe_parameters(options: &DescribeParametersOptions) -> RequestDescriptor {
    DEFAULT_BUILDER.describe_parameters(options)
}

pub fn label_parameter_version<S: AsRef<str>>(
    name: &str,
    labels: &[S],
    options: &LabelParameterVersionOptions,
) -> RequestDescriptor {
    DEFAULT_BUILDER.label_parameter_version(name, labels, options)
}

pub fn describe_instance_information(
    options: &DescribeInstanceInformationOptions,
) -> RequestDescriptor {
    DEFAULT_BUILDER.describe_instance_information(options)
}
