//! # Depot Terminal Library
//!
//! Startup and command dispatch for the POS terminal binary.
//!
//! ## Module Organization
//! ```text
//! depot_terminal/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap arguments
//! ├── config.rs       ◄─── TerminalConfig (TOML + DEPOT_* overrides)
//! ├── menu.rs         ◄─── Interactive counter menu and printing
//! └── error.rs        ◄─── TerminalError
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;

use std::io::{self, Write};

use clap::Parser;
use depot_store::{Store, StoreDesk};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{CheckoutArgs, Cli, Command};
use config::TerminalConfig;
use error::TerminalResult;
use menu::{write_order, write_tool_table, PosTerminal};

/// Runs the terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Terminal Startup                                  │
/// │                                                                         │
/// │  1. Parse Arguments ──────────────────────────────────────────────────► │
/// │     • --config <path>, subcommand (menu when omitted)                   │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → terminal.toml → DEPOT_* environment                    │
/// │                                                                         │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else the configured filter; always to stderr            │
/// │                                                                         │
/// │  4. Stock the Store ──────────────────────────────────────────────────► │
/// │     • standard inventory and/or [[inventory.tools]]                     │
/// │                                                                         │
/// │  5. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • menu / checkout / tools                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> TerminalResult<()> {
    let cli = Cli::parse();
    let config = TerminalConfig::load(cli.config.clone())?;

    init_tracing(&config.logging.filter);
    info!(store = %config.store.name, "Starting depot terminal");

    let store = Store::new();
    store.add_tools(config.inventory()?)?;
    let desk = store.rental_desk();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            let mut terminal = PosTerminal::new(
                &desk,
                config.store.name.as_str(),
                stdin.lock(),
                io::stdout().lock(),
                io::stderr().lock(),
            );
            terminal.run()
        }
        Command::Checkout(args) => checkout(&desk, &args, &mut io::stdout().lock()),
        Command::Tools => {
            let mut out = io::stdout().lock();
            write_tool_table(&mut out, &desk.tools()?)?;
            Ok(())
        }
    }
}

/// One-shot checkout: prints the placed order as text or JSON.
fn checkout(desk: &StoreDesk, args: &CheckoutArgs, out: &mut impl Write) -> TerminalResult<()> {
    let id = desk.checkout_one(&args.to_request())?;
    let order = desk.order(&id)?.ok_or_else(|| {
        depot_core::CoreError::Store(format!("order {id} missing right after checkout"))
    })?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &order)?;
        writeln!(out)?;
    } else {
        write_order(out, &order)?;
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=depot=trace` - Show trace for depot crates only
/// - Default: the configured filter (`info,depot=debug`)
///
/// Logs go to stderr so stdout carries only what the clerk sees.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: bool) -> CheckoutArgs {
        CheckoutArgs {
            tool_code: "JAKR".into(),
            days: 4,
            discount: 50,
            checkout_date: chrono::NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
            json,
        }
    }

    #[test]
    fn test_checkout_prints_agreement() {
        let desk = Store::seeded().unwrap().rental_desk();
        let mut out = Vec::new();

        checkout(&desk, &args(false), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Discount Amount: $1.50\nFinal Charge: $1.49\n"));
        assert_eq!(desk.ledger().count().unwrap(), 1);
    }

    #[test]
    fn test_checkout_json() {
        let desk = Store::seeded().unwrap().rental_desk();
        let mut out = Vec::new();

        checkout(&desk, &args(true), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["agreement"]["tool_code"], "JAKR");
        assert_eq!(value["agreement"]["final_charge"], 149);
        assert_eq!(value["agreement"]["tool_brand"], "RIDGID");
    }

    #[test]
    fn test_checkout_error_places_nothing() {
        let desk = Store::seeded().unwrap().rental_desk();
        let mut bad = args(false);
        bad.discount = 101;

        let err = checkout(&desk, &bad, &mut Vec::new()).unwrap_err();

        assert!(err.is_request_error());
        assert_eq!(desk.ledger().count().unwrap(), 0);
    }
}
