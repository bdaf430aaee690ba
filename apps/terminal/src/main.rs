//! # Depot Terminal Entry Point
//!
//! The setup lives in lib.rs so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    match depot_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
