//! Wire protocol layer: constants, actions, configuration and the request descriptor.
//!
//! # Protocol Layer
//!
//! Parameter Store speaks JSON 1.1: every call is a `POST /` whose action is
//! named by the `x-amz-target` header and whose arguments travel as a JSON
//! object body.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`action`] | Static action table and target header derivation |
//! | [`config`] | Builder configuration (namespace, content type, endpoint) |
//! | [`request`] | The request descriptor handed to the executor |

pub mod action;
pub mod config;
pub mod request;

pub use action::Action;
pub use config::BuilderConfig;
pub use request::RequestDescriptor;

/// Default namespace for `x-amz-target`.
pub const TARGET_PREFIX: &str = "AmazonSSM";
/// Default service identifier.
pub const SERVICE_NAME: &str = "ssm";
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const METHOD: &str = "POST";
pub const PATH: &str = "/";

pub const HEADER_TARGET: &str = "x-amz-target";
pub const HEADER_CONTENT_TYPE: &str = "content-type";
