//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `RequestError`, so functions can simply return `Result<T>`.
use crate::error::RequestError;

/// Workspace-wide `Result` alias with `RequestError` as the default error.
pub type Result<T, E = RequestError> = std::result::Result<T, E>;
