//! Parameter Store remote actions.
//!
//! Every operation in this crate maps to exactly one JSON 1.1 action. The wire
//! name is looked up from a static table rather than derived from the Rust
//! identifier, so the full mapping can be read in one place:
//!
//! | Action | Wire name |
//! |--------|-----------|
//! | `GetParameter` | `GetParameter` |
//! | `GetParameters` | `GetParameters` |
//! | `GetParametersByPath` | `GetParametersByPath` |
//! | `PutParameter` | `PutParameter` |
//! | `DeleteParameter` | `DeleteParameter` |
//! | `DeleteParameters` | `DeleteParameters` |
//! | `GetParameterHistory` | `GetParameterHistory` |
//! | `DescribeInstanceInformation` | `DescribeInstanceInformation` |
//! | `DescribeParameters` | `DescribeParameters` |
//! | `LabelParameterVersion` | `LabelParameterVersion` |
//!
//! ## Example
//!
//! ```rust
//! use ssm_request::protocol::Action;
//!
//! let action = Action::from_operation("get_parameters_by_path").unwrap();
//! assert_eq!(action.wire_name(), "GetParametersByPath");
//! assert_eq!(action.target("AmazonSSM"), "AmazonSSM.GetParametersByPath");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A remote Parameter Store action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    GetParameter,
    GetParameters,
    GetParametersByPath,
    PutParameter,
    DeleteParameter,
    DeleteParameters,
    GetParameterHistory,
    DescribeInstanceInformation,
    DescribeParameters,
    LabelParameterVersion,
}

impl Action {
    /// Every action, in table order.
    pub const ALL: [Action; 10] = [
        Self::GetParameter,
        Self::GetParameters,
        Self::GetParametersByPath,
        Self::PutParameter,
        Self::DeleteParameter,
        Self::DeleteParameters,
        Self::GetParameterHistory,
        Self::DescribeInstanceInformation,
        Self::DescribeParameters,
        Self::LabelParameterVersion,
    ];

    /// Returns the camel-cased wire action (e.g., `"GetParameter"`).
    #[inline]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::GetParameter => "GetParameter",
            Self::GetParameters => "GetParameters",
            Self::GetParametersByPath => "GetParametersByPath",
            Self::PutParameter => "PutParameter",
            Self::DeleteParameter => "DeleteParameter",
            Self::DeleteParameters => "DeleteParameters",
            Self::GetParameterHistory => "GetParameterHistory",
            Self::DescribeInstanceInformation => "DescribeInstanceInformation",
            Self::DescribeParameters => "DescribeParameters",
            Self::LabelParameterVersion => "LabelParameterVersion",
        }
    }

    /// Returns the operation symbol (e.g., `"get_parameter"`).
    #[inline]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::GetParameter => "get_parameter",
            Self::GetParameters => "get_parameters",
            Self::GetParametersByPath => "get_parameters_by_path",
            Self::PutParameter => "put_parameter",
            Self::DeleteParameter => "delete_parameter",
            Self::DeleteParameters => "delete_parameters",
            Self::GetParameterHistory => "get_parameter_history",
            Self::DescribeInstanceInformation => "describe_instance_information",
            Self::DescribeParameters => "describe_parameters",
            Self::LabelParameterVersion => "label_parameter_version",
        }
    }

    /// Builds the `x-amz-target` value for this action under `prefix`.
    pub fn target(&self, prefix: &str) -> String {
        format!("{}.{}", prefix, self.wire_name())
    }

    /// Maps an operation symbol back to its action.
    pub fn from_operation(operation: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.operation() == operation)
    }

    /// Maps a wire action name back to its action.
    pub fn from_wire_name(wire_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.wire_name() == wire_name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
