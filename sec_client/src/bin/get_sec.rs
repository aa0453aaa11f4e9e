//! Fetch `/getSec` and print the whole payload.
use sec_client::main_for;
use sec_common::Endpoint;
use std::process::ExitCode;

fn main() -> ExitCode {
    main_for(Endpoint::Sec)
}
