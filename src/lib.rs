//! # ssm-request
//!
//! Request descriptors for the Systems Manager Parameter Store JSON 1.1 API.
//!
//! ## Overview
//!
//! Each operation takes domain arguments (a parameter name, a value,
//! pagination tokens, filters) and returns a [`RequestDescriptor`]: method,
//! path, headers and JSON payload. Nothing here touches the network. Signing,
//! transport, retries and response decoding belong to the executor that
//! receives the descriptor.
//!
//! ## Quick Start
//!
//! ```rust
//! use ssm_request::options::{GetParameterOptions, PutParameterOptions};
//! use ssm_request::{get_parameter, put_parameter};
//!
//! let req = get_parameter("/db/password", &GetParameterOptions::new().with_decryption(true));
//! assert_eq!(req.target(), Some("AmazonSSM.GetParameter"));
//! assert_eq!(
//!     req.body(),
//!     serde_json::json!({"Name": "/db/password", "WithDecryption": true})
//! );
//!
//! let req = put_parameter(
//!     "/app/flag",
//!     "string_list",
//!     "a,b",
//!     &PutParameterOptions::new().overwrite(true),
//! )?;
//! assert_eq!(req.payload["Type"], "StringList");
//! # Ok::<(), ssm_request::Error>(())
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Wire constants, action table, config, request descriptor |
//! | [`operations`] | One builder function per remote action |
//! | [`options`] | Per-operation option structs and their defaults |
//! | [`types`] | Parameter value types and query filters |
//! | [`error`] | Error type and structured context |

pub mod error;
pub mod operations;
pub mod options;
pub mod protocol;
pub mod types;

pub use error::{Error, ErrorContext};
pub use operations::{
    delete_parameter, delete_parameters, describe_instance_information, describe_parameters,
    get_parameter, get_parameter_history, get_parameters, get_parameters_by_path,
    label_parameter_version, put_parameter, RequestBuilder,
};
pub use protocol::{Action, BuilderConfig, RequestDescriptor};
pub use types::{InstanceInformationFilter, ParameterFilter, ParameterType};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
