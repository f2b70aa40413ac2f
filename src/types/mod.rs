//! Domain types: parameter value types and query filters.

pub mod filter;
pub mod parameter;

pub use filter::{InstanceInformationFilter, ParameterFilter};
pub use parameter::{IntoParameterType, ParameterType};
