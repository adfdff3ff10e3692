//! Core amount-entry engine
//!
//! String-based display editing plus the sequential two-operand state
//! machine behind it. Nothing in here can fail: degraded input falls back
//! to zero, and division by zero flows through as the platform's
//! non-finite float rather than an error.

pub mod display;
pub mod engine;
pub mod history;
mod operator;

pub use operator::Operator;

/// Parses a display string into an amount.
///
/// An empty or non-numeric display counts as zero. Keypad editing never
/// produces one on its own, but backspacing through a non-finite result
/// text ("inf" -> "in") can.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Formats a computed amount for the display.
///
/// This is the platform's default float-to-string conversion: shortest
/// round-trip, no fixed decimal places. Repeated operations may accumulate
/// representation artifacts ("0.30000000000000004"); they are shown as-is.
#[must_use]
pub fn format_amount(value: f64) -> String {
    value.to_string()
}
