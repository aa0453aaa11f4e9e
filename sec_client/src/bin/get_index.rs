//! Fetch `/getIndex` and print its `securities`.
use sec_client::main_for;
use sec_common::Endpoint;
use std::process::ExitCode;

fn main() -> ExitCode {
    main_for(Endpoint::Index)
}
