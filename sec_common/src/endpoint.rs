//! Backend endpoints known to the requesters.

use strum::Display;

/// Key under which the index endpoint lists its securities.
pub const SECURITIES_KEY: &str = "securities";

/// Which part of a decoded payload is printed on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The whole payload.
    Whole,
    /// The value stored under a top-level key.
    Key(&'static str),
}

/// Set of endpoints served by the local backend.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    /// Security analytics, `/getSec`.
    Sec,
    /// Index constituents, `/getIndex`.
    Index,
}

impl Endpoint {
    /// Absolute path of the endpoint on the backend.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Sec => "/getSec",
            Endpoint::Index => "/getIndex",
        }
    }

    /// Path relative to the backend base URL.
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Part of the payload this endpoint's requester prints.
    pub fn view(&self) -> View {
        match self {
            Endpoint::Sec => View::Whole,
            Endpoint::Index => View::Key(SECURITIES_KEY),
        }
    }
}
