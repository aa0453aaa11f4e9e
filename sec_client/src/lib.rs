//! Securities API requesters. Blocking HTTP clients that fetch one endpoint of the
//! local backend and print either the payload or the failure status.
//!
//! Two binaries share this library:
//! - `get_sec` prints the whole `/getSec` payload.
//! - `get_index` prints the `securities` value of the `/getIndex` payload.
//!
//! Usage example (CLI):
//! ```bash
//! get_index
//! get_sec --base-url http://127.0.0.1:8080 --json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the level); stdout carries only the
//! outcome line.
#![warn(missing_docs)]
pub mod args;
pub mod requester;

use crate::args::Args;
use crate::requester::{Outcome, Requester};
use clap::Parser;
use log::{error, info};
use sec_common::{Endpoint, Result};
use std::io::Write;
use std::process::ExitCode;

/// Build a requester from `args` and perform the request for `endpoint`.
pub fn run(endpoint: Endpoint, args: &Args) -> Result<Outcome> {
    let requester = Requester::new(&args.base_url)?;
    info!("Requesting {} from {}", endpoint, args.base_url);
    requester.request(endpoint)
}

/// Write the outcome line to `out`.
pub fn report<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<()> {
    writeln!(out, "{}", outcome.render(json)?)?;
    Ok(())
}

/// Report the result of `run` and return the process exit code.
///
/// The outcome line goes to `out`; a request error is reported on `err` as
/// `Failed API Request: <error>`. Returns 0 only when a payload was printed.
pub fn conclude<O: Write, E: Write>(
    endpoint: Endpoint,
    result: Result<Outcome>,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> u8 {
    let result = result.and_then(|outcome| {
        report(out, &outcome, json)?;
        Ok(outcome)
    });

    match result {
        Ok(outcome) if outcome.is_success() => 0,
        Ok(_) => 1,
        Err(e) => {
            error!("{} request error: {}", endpoint, e);
            if let Err(write_err) = writeln!(err, "Failed API Request: {}", e) {
                error!("Cannot write error report: {}", write_err);
            }
            1
        }
    }
}

/// Entry point of a requester binary: parse arguments, run, print, map to an exit code.
pub fn main_for(endpoint: Endpoint) -> ExitCode {
    init_logger();
    let args = Args::parse();

    let result = run(endpoint, &args);
    let code = conclude(
        endpoint,
        result,
        args.json,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(code)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
