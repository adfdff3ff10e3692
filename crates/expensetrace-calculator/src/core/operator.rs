//! Binary operators of the keypad

use serde::{Deserialize, Serialize};

/// A binary operator selected from the keypad.
///
/// `Equals` doubles as an internal identity tag: applied as a binary
/// operation it returns the right-hand operand unchanged. The keypad never
/// leaves it armed as a pending operator, so the passthrough is not
/// user-reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Identity passthrough (=)
    Equals,
}

impl Operator {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equals => "=",
        }
    }

    /// Maps a keypad character to its binary operator, if any
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division is not guarded: dividing by zero yields the platform's
    /// infinite or NaN float, which flows into the display and the commit
    /// unchanged.
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Equals => b,
        }
    }
}
