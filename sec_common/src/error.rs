//! Error types shared by the requesters.
//!
//! The `RequestError` enum unifies the ways a request can fail before a status
//! code is available or after a successful status came back with an unusable
//! body. A non-200 status is not an error value: it is reported through the
//! requester's outcome instead.
use std::io;

use thiserror::Error;

/// Unified error type for the requesters.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Connection refused, DNS failure, or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 200 with a body that is not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL could not be parsed or joined with an endpoint path.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The payload has no value under the requested key.
    #[error("Payload has no `{0}` key")]
    MissingKey(String),

    /// I/O error while writing the result.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
