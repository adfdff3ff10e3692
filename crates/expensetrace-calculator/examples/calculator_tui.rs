//! Interactive amount keypad demo
//!
//! Run with `cargo run --example calculator_tui`, optionally passing the
//! starting amount: `cargo run --example calculator_tui -- 42.50`.
//! Set `RUST_LOG=debug` to see commit events on stderr.

use expensetrace_calculator::prelude::*;
use expensetrace_calculator::tui::{self, TuiError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TuiError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let initial = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0.0);

    let mut app = KeypadApp::new(initial);
    tui::run(&mut app)?;

    println!("committed amount: {}", format_amount(app.committed()));
    if !app.log().is_empty() {
        for entry in app.log().iter() {
            println!("  {}", entry.line());
        }
    }

    Ok(())
}
