//!
//! Common types and utilities shared by the securities API requesters.
//!
//! This crate aggregates:
//! - `error`: unified error type `RequestError` used across the workspace.
//! - `result`: handy `Result<T, RequestError>` alias.
//! - `endpoint`: the backend endpoints and which part of their payload is printed.
//! - `payload`: the untyped JSON payload and its plain-text rendering.
//! - `net`: networking constants and small helpers.
#![warn(missing_docs)]
pub mod endpoint;
pub mod error;
pub mod net;
pub mod payload;
pub mod result;

pub use endpoint::Endpoint;
pub use error::RequestError;
pub use payload::Payload;
pub use result::Result;
