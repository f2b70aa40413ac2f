//! Parameter value types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorContext};
use crate::Result;

/// The closed set of value types a parameter may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    #[serde(rename = "String")]
    String,
    #[serde(rename = "StringList")]
    StringList,
    #[serde(rename = "SecureString")]
    SecureString,
}

impl ParameterType {
    /// Wire value (e.g., `"StringList"`).
    #[inline]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::SecureString => "SecureString",
        }
    }

    /// Caller-facing symbol (e.g., `"string_list"`).
    #[inline]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringList => "string_list",
            Self::SecureString => "secure_string",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for ParameterType {
    type Err = Error;

    /// Accepts only the symbols `string`, `string_list` and `secure_string`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(Self::String),
            "string_list" => Ok(Self::StringList),
            "secure_string" => Ok(Self::SecureString),
            other => Err(Error::invalid_argument_with_context(
                format!("unknown parameter type '{}'", other),
                ErrorContext::new()
                    .with_field_path("put_parameter.type")
                    .with_details("expected one of: string, string_list, secure_string")
                    .with_source("parameter_type"),
            )),
        }
    }
}

/// Anything that can name a [`ParameterType`], possibly failing.
///
/// Implemented for the enum itself (never fails) and for string symbols
/// (fails outside the closed set).
pub trait IntoParameterType {
    fn into_parameter_type(self) -> Result<ParameterType>;
}

impl IntoParameterType for ParameterType {
    fn into_parameter_type(self) -> Result<ParameterType> {
        Ok(self)
    }
}

impl IntoParameterType for &str {
    fn into_parameter_type(self) -> Result<ParameterType> {
        self.parse()
    }
}

impl IntoParameterType for String {
    fn into_parameter_type(self) -> Result<ParameterType> {
        self.as_str().parse()
    }
}

impl IntoParameterType for &String {
    fn into_parameter_type(self) -> Result<ParameterType> {
        self.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_map_to_wire_names() {
        let cases = [
            ("string", "String"),
            ("string_list", "StringList"),
            ("secure_string", "SecureString"),
        ];
        for (symbol, wire) in cases {
            let ty: ParameterType = symbol.parse().unwrap();
            assert_eq!(ty.wire_name(), wire);
            assert_eq!(ty.symbol(), symbol);
        }
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        for bad in ["String", "secure", "", "string-list"] {
            let err = bad.parse::<ParameterType>().unwrap_err();
            assert!(err.is_invalid_argument(), "'{}' should be rejected", bad);
        }
    }

    #[test]
    fn test_serializes_as_wire_name() {
        let v = serde_json::to_value(ParameterType::SecureString).unwrap();
        assert_eq!(v, serde_json::json!("SecureString"));
    }
}
