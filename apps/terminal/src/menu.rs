//! # Counter Menu
//!
//! The interactive loop a clerk drives at the rental counter.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner                                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  tool table ◄──────────────────────────────────────────────┐            │
//! │  1. Rent a Tool / 2. Order Lookup / 3. Exit                 │            │
//! │     │                                                       │            │
//! │     ├── 1 ─► code, days, discount, date ─► print order ─────┤            │
//! │     ├── 2 ─► order id ─► print order (if found) ────────────┤            │
//! │     ├── other ─► "Invalid choice. Please try again." ───────┤            │
//! │     │                                                       │            │
//! │     │   request error ─► message on the error stream ───────┘            │
//! │     │                                                                   │
//! │     └── 3 / end of input ─► "Exiting..."                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use depot_core::validation::{parse_count, parse_date, parse_order_id};
use depot_core::{
    CheckoutRequest, CoreError, Order, OrderId, OrderLedger, RentalDesk, Tool, ToolCatalog,
};
use tracing::debug;

use crate::error::{TerminalError, TerminalResult};

const RULE_WIDTH: usize = 35;
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const EXIT_MESSAGE: &str = "Exiting...";

// =============================================================================
// Shared Printing
// =============================================================================

/// Prints the tool table: code, type and daily price.
pub fn write_tool_table(out: &mut impl Write, tools: &[Tool]) -> std::io::Result<()> {
    writeln!(out, "{:<10} {:>10} {:>10}", "Tool Code", "Tool Type", "Price")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for tool in tools {
        writeln!(
            out,
            "{:<10} {:>10} {:>10}",
            tool.code,
            tool.tool_type.display_name(),
            tool.price.daily_charge.to_string()
        )?;
    }
    Ok(())
}

/// Prints one order between `*` rules.
pub fn write_order(out: &mut impl Write, order: &Order) -> std::io::Result<()> {
    let rule = "*".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", order.id)?;
    writeln!(out, "{}", order.agreement)?;
    writeln!(out, "{rule}")
}

fn banner(store_name: &str) -> String {
    let inner = format!("*  {store_name}  *");
    let border = "*".repeat(inner.chars().count());
    format!("{border}\n{inner}\n{border}\n")
}

// =============================================================================
// Terminal
// =============================================================================

/// What the loop does after a menu choice.
enum Next {
    Continue,
    Exit,
}

/// The interactive counter.
///
/// Generic over its streams so tests can script a session.
pub struct PosTerminal<'a, C, L, R, W, E> {
    desk: &'a RentalDesk<C, L>,
    store_name: String,
    input: R,
    out: W,
    err: E,
}

impl<'a, C, L, R, W, E> PosTerminal<'a, C, L, R, W, E>
where
    C: ToolCatalog,
    L: OrderLedger,
    CoreError: From<C::Error> + From<L::Error>,
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(
        desk: &'a RentalDesk<C, L>,
        store_name: impl Into<String>,
        input: R,
        out: W,
        err: E,
    ) -> Self {
        PosTerminal {
            desk,
            store_name: store_name.into(),
            input,
            out,
            err,
        }
    }

    /// Runs the menu until the clerk exits or input ends.
    pub fn run(&mut self) -> TerminalResult<()> {
        writeln!(self.out, "{}", banner(&self.store_name))?;

        loop {
            match self.step() {
                Ok(Next::Continue) => {}
                Ok(Next::Exit) | Err(TerminalError::InputClosed) => break,
                Err(e) if e.is_request_error() => {
                    debug!(error = %e, "Request rejected at the counter");
                    writeln!(self.err, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.out, "{EXIT_MESSAGE}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Hands back the output streams.
    pub fn into_streams(self) -> (W, E) {
        (self.out, self.err)
    }

    fn step(&mut self) -> TerminalResult<Next> {
        let tools = self.desk.tools()?;
        write_tool_table(&mut self.out, &tools)?;
        writeln!(self.out, "1. Rent a Tool")?;
        writeln!(self.out, "2. Order Lookup")?;
        writeln!(self.out, "3. Exit")?;

        let choice = self.prompt("Choose an option: ")?;
        match choice.as_str() {
            "1" => self.rent()?,
            "2" => self.lookup()?,
            "3" => return Ok(Next::Exit),
            _ => writeln!(self.out, "{INVALID_CHOICE}")?,
        }
        Ok(Next::Continue)
    }

    fn rent(&mut self) -> TerminalResult<()> {
        let code = self.prompt("Enter the tool code: ")?;
        let days = parse_count(&self.prompt("Enter rental day count (1 or greater): ")?)?;
        let discount = parse_count(&self.prompt("Enter discount percentage (range 0-100): ")?)?;
        let checkout_date = parse_date(&self.prompt("Enter checkout date (mm/dd/yy): ")?)?;

        let request = CheckoutRequest::new(code, days, discount, checkout_date);
        let mut placed = Vec::new();
        for result in self.desk.checkout(std::slice::from_ref(&request)) {
            placed.push(result?);
        }
        self.print_orders(&placed)
    }

    fn lookup(&mut self) -> TerminalResult<()> {
        let id = parse_order_id(&self.prompt("Enter Order ID: ")?)?;
        self.print_orders(&[id])
    }

    fn print_orders(&mut self, ids: &[OrderId]) -> TerminalResult<()> {
        for id in ids {
            match self.desk.order(id)? {
                Some(order) => write_order(&mut self.out, &order)?,
                None => debug!(order_id = %id, "No order with this id"),
            }
        }
        Ok(())
    }

    /// Prints a prompt and reads one trimmed line.
    fn prompt(&mut self, text: &str) -> TerminalResult<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TerminalError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
