//! Query filters
//!
//! Filters are accepted with snake_case field names and written to the wire
//! with the capitalised keys the remote API expects.

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

/// Narrows `GetParametersByPath` / `DescribeParameters` results.
///
/// Written to the wire as `{"Key": .., "Option": .., "Values": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterFilter {
    pub key: String,
    /// Comparison, e.g. "Equals" or "BeginsWith".
    pub option: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl ParameterFilter {
    pub fn new<I, S>(key: impl Into<String>, option: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            option: option.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Wire object with capitalised keys.
    pub fn to_wire(&self) -> Value {
        json!({
            "Key": self.key,
            "Option": self.option,
            "Values": self.values,
        })
    }
}

/// Narrows `DescribeInstanceInformation` results.
///
/// Written to the wire as `{"Key": .., "Values": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstanceInformationFilter {
    pub key: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl InstanceInformationFilter {
    pub fn new<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Wire object with capitalised keys.
    pub fn to_wire(&self) -> Value {
        json!({
            "Key": self.key,
            "Values": self.values,
        })
    }
}

/// Deserialize an optional filter list, treating any non-array value as absent.
///
/// `null`, a string, a number or an object all yield `None`; an array must
/// contain well-formed filters.
pub(crate) fn list_or_none<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<T>, _>>()
            .map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_filter_wire_shape() {
        let f = ParameterFilter::new("Type", "Equals", ["SecureString"]);
        assert_eq!(
            f.to_wire(),
            json!({"Key": "Type", "Option": "Equals", "Values": ["SecureString"]})
        );
    }

    #[test]
    fn test_parameter_filter_reads_snake_case() {
        let f: ParameterFilter =
            serde_json::from_value(json!({"key": "Label", "option": "Equals", "values": ["prod"]}))
                .unwrap();
        assert_eq!(f, ParameterFilter::new("Label", "Equals", ["prod"]));
    }

    #[test]
    fn test_instance_filter_wire_shape() {
        let f = InstanceInformationFilter::new("PingStatus", ["Online"]);
        assert_eq!(
            f.to_wire(),
            json!({"Key": "PingStatus", "Values": ["Online"]})
        );
    }
}
