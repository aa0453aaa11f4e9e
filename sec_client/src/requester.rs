//! Sending the single GET request to the backend.
//!
//! A `Requester` holds a blocking HTTP client and the backend base URL. It issues
//! exactly one request per call, with no parameters, headers, body, timeout or retry,
//! and branches on the status code.
use std::fmt::{self, Display, Formatter};

use log::{debug, info, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use sec_common::{Endpoint, Payload, Result};
use url::Url;

/// Status code and, on 200, the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Numeric HTTP status.
    pub status: u16,
    /// Decoded body, present only when `status` is 200.
    pub payload: Option<Payload>,
}

/// Result of a completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 with the part of the payload selected for the endpoint.
    Printed(Payload),
    /// Any other status.
    Failed(u16),
}

impl Outcome {
    /// `true` when a payload came back.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Printed(_))
    }

    /// Line written to stdout, with the payload as compact JSON when `json` is set.
    pub fn render(&self, json: bool) -> Result<String> {
        match self {
            Outcome::Printed(payload) if json => payload.to_json(),
            _ => Ok(self.to_string()),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Printed(payload) => write!(f, "{}", payload),
            Outcome::Failed(status) => write!(f, "Failed API Request, status code: {}", status),
        }
    }
}

/// Blocking requester bound to one backend.
pub struct Requester {
    http_client: Client,
    base_url: Url,
}

impl Requester {
    /// Create a requester for the backend at `base_url` (e.g., `http://localhost:8080`).
    ///
    /// A path prefix in `base_url` is kept: `http://host/api` serves `/api/getSec`.
    /// The client waits for the response as long as it takes.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http_client = Client::builder().timeout(None).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Full URL of `endpoint` on this backend.
    pub fn url(&self, endpoint: Endpoint) -> Result<Url> {
        Ok(self.base_url.join(endpoint.segment())?)
    }

    /// Perform the GET and decode the body if the status is 200.
    pub fn fetch(&self, endpoint: Endpoint) -> Result<Response> {
        let url = self.url(endpoint)?;
        info!("GET {}", url);

        let response = self.http_client.get(url).send()?;
        let status = response.status();
        debug!("{} answered {}", endpoint, status);

        if status != StatusCode::OK {
            return Ok(Response {
                status: status.as_u16(),
                payload: None,
            });
        }

        let body = response.bytes()?;
        Ok(Response {
            status: status.as_u16(),
            payload: Some(Payload::from_slice(&body)?),
        })
    }

    /// Fetch `endpoint` and select the part of the payload it prints.
    pub fn request(&self, endpoint: Endpoint) -> Result<Outcome> {
        let response = self.fetch(endpoint)?;
        match response.payload {
            Some(payload) => Ok(Outcome::Printed(payload.select(endpoint.view())?)),
            None => {
                warn!("{} request failed with status {}", endpoint, response.status);
                Ok(Outcome::Failed(response.status))
            }
        }
    }
}
