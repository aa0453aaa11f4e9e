//! Command-line arguments shared by the `get_sec` and `get_index` requesters.
//!
//! Every flag has a default, so running a requester without arguments performs its
//! single request against the local backend.
use clap::Parser;
use sec_common::net::{BASE_URL_ENV, default_base_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the backend serving the endpoint.
    #[clap(long, env = BASE_URL_ENV, default_value_t = default_base_url())]
    pub base_url: String,

    /// Print the payload as compact JSON instead of a literal.
    #[clap(long)]
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            base_url: default_base_url(),
            json: false,
        }
    }
}
