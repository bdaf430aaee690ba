//! Command line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use depot_core::validation::{parse_count, parse_date};
use depot_core::CheckoutRequest;

#[derive(Debug, Parser)]
#[command(name = "depot-terminal")]
#[command(about = "Tool Rental Depot point-of-sale terminal")]
pub struct Cli {
    /// Path to the terminal configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive counter menu (default)
    Menu,

    /// Check out one tool and print the agreement
    Checkout(CheckoutArgs),

    /// List the tools in stock
    Tools,
}

#[derive(Debug, clap::Args)]
pub struct CheckoutArgs {
    /// Tool code, e.g. LADW
    pub tool_code: String,

    /// Rental day count (1 or greater)
    #[arg(short = 'd', long, value_parser = parse_count)]
    pub days: i64,

    /// Discount percentage (0-100)
    #[arg(short = 'p', long, default_value = "0", value_parser = parse_count)]
    pub discount: i64,

    /// Checkout date (mm/dd/yy)
    #[arg(short = 'o', long = "on", value_parser = parse_date)]
    pub checkout_date: NaiveDate,

    /// Print the order as JSON instead of the agreement text
    #[arg(long)]
    pub json: bool,
}

impl CheckoutArgs {
    pub fn to_request(&self) -> CheckoutRequest {
        CheckoutRequest::new(
            self.tool_code.clone(),
            self.days,
            self.discount,
            self.checkout_date,
        )
    }
}
