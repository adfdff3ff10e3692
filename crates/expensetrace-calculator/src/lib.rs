//! ExpenseTrace Amount Keypad
//!
//! The amount-entry calculator that the ExpenseTrace transaction form
//! embeds: a textual display, a fixed keypad, and a sequential two-operand
//! arithmetic engine. The engine evaluates strictly left to right, with no
//! operator precedence and no expression parsing, because that is how a
//! keypad calculator behaves.
//!
//! The surrounding application (pages, charts, modals) is not part of this
//! crate. It talks to the keypad through two seams only: an initial amount
//! supplied at construction, and the committed amount each press may emit.
//!
//! # Example
//!
//! ```rust
//! use expensetrace_calculator::prelude::*;
//!
//! let mut calc = SequentialCalculator::new(0.0);
//! calc.press(Key::Digit(6));
//! calc.press(Key::Operator(Operator::Add));
//! calc.press(Key::Digit(3));
//! // Chaining computes the pending operation before arming the next one.
//! assert_eq!(calc.press(Key::Operator(Operator::Multiply)), Some(9.0));
//! calc.press(Key::Digit(2));
//! assert_eq!(calc.press(Key::Equals), Some(18.0));
//! assert_eq!(calc.display(), "18");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::display::DisplayBuffer;
    pub use crate::core::engine::{Key, PendingOperation, SequentialCalculator};
    pub use crate::core::history::{CommitEntry, CommitLog};
    pub use crate::core::{format_amount, parse_amount, Operator};
    pub use crate::driver::{AmountPadDriver, ScriptDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{Keypad, KeypadApp, KeypadButton};
}
