//! String-based display editing
//!
//! The amount being edited is held as text, not as a numeric accumulator.
//! That is deliberate: a trailing decimal point ("7.") and leading-zero
//! suppression only exist at the text level, so the text is the source of
//! truth and the numeric value is derived from it on demand.

use crate::core::{format_amount, parse_amount};

/// The editable text of the amount display.
///
/// Invariants: never empty, and digit/decimal editing introduces at most
/// one decimal point. After a computation the buffer holds the formatted
/// result, which may be negative or non-finite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl DisplayBuffer {
    /// Creates a buffer seeded with an initial amount
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            text: format_amount(initial),
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the numeric value of the display, zero if unparsable
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_amount(&self.text)
    }

    /// Appends a digit, suppressing a leading zero
    pub fn push_digit(&mut self, digit: u8) {
        let c = Self::digit_char(digit);
        if self.text == "0" {
            self.text.clear();
        }
        self.text.push(c);
    }

    /// Starts a fresh number with the given digit
    pub fn start_with_digit(&mut self, digit: u8) {
        self.text.clear();
        self.text.push(Self::digit_char(digit));
    }

    /// Appends a decimal point; a second one is a silent no-op
    pub fn push_decimal(&mut self) {
        if !self.text.contains('.') {
            self.text.push('.');
        }
    }

    /// Starts a fresh number as "0."
    pub fn start_with_decimal(&mut self) {
        self.text.clear();
        self.text.push_str("0.");
    }

    /// Drops the trailing character; a single-character display becomes "0"
    pub fn backspace(&mut self) {
        if self.text.len() > 1 {
            self.text.pop();
        } else {
            self.reset();
        }
    }

    /// Resets the display to "0"
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push('0');
    }

    /// Replaces the display with a formatted computation result
    pub fn set_result(&mut self, value: f64) {
        self.text = format_amount(value);
    }

    fn digit_char(digit: u8) -> char {
        char::from_digit(u32::from(digit % 10), 10).unwrap_or('0')
    }
}
