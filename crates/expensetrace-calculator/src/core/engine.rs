//! Sequential two-operand arithmetic engine
//!
//! One press, one synchronous transition, at most one committed amount.
//! Chained operators evaluate strictly left to right: the engine never
//! holds more than one pending operation, so there is nothing to reorder
//! by precedence.

use crate::core::display::DisplayBuffer;
use crate::core::Operator;

/// A pending binary operation: the left operand together with the operator
/// awaiting the next entry.
///
/// Operand and operator travel as one value, so "operand present but
/// operator missing" (and the zero-versus-absent confusion that comes with
/// encoding absence as a falsy number) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Left-hand operand captured when the operator was pressed
    pub operand: f64,
    /// Operator awaiting the right-hand operand
    pub operator: Operator,
}

/// One keypad press accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// Drop the trailing display character
    Backspace,
    /// Reset display and pending state
    Clear,
    /// Arm (or chain) a binary operator
    Operator(Operator),
    /// Complete the pending operation, or commit the raw display
    Equals,
}

/// The amount-entry calculator embedded by the transaction form.
///
/// Constructed once from the form's current amount; later changes to that
/// external value are not observed. Each [`press`](Self::press) returns the
/// committed amount when the transition produced one; the host forwards it
/// to whoever owns the amount field.
#[derive(Debug, Clone)]
pub struct SequentialCalculator {
    display: DisplayBuffer,
    pending: Option<PendingOperation>,
    awaiting_new_entry: bool,
}

impl Default for SequentialCalculator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SequentialCalculator {
    /// Creates a calculator seeded with the form's current amount
    #[must_use]
    pub fn new(current_amount: f64) -> Self {
        Self {
            display: DisplayBuffer::new(current_amount),
            pending: None,
            awaiting_new_entry: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.display.as_str()
    }

    /// Returns the numeric value of the display
    #[must_use]
    pub fn value(&self) -> f64 {
        self.display.value()
    }

    /// Returns the pending operation, if one is armed
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Returns true if the next digit starts a fresh number
    #[must_use]
    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Applies one button press.
    ///
    /// Returns the committed amount when the press produced one: zero on
    /// Clear, the reparsed display on Backspace, the computed result when
    /// an operator press or Equals completed a pending operation, and the
    /// raw display value on Equals with nothing pending. Digit and decimal
    /// edits commit nothing.
    pub fn press(&mut self, key: Key) -> Option<f64> {
        match key {
            Key::Digit(d) => {
                if self.awaiting_new_entry {
                    self.display.start_with_digit(d);
                    self.awaiting_new_entry = false;
                } else {
                    self.display.push_digit(d);
                }
                None
            }
            Key::Decimal => {
                if self.awaiting_new_entry {
                    self.display.start_with_decimal();
                    self.awaiting_new_entry = false;
                } else {
                    self.display.push_decimal();
                }
                None
            }
            Key::Clear => {
                self.display.reset();
                self.pending = None;
                self.awaiting_new_entry = false;
                Some(0.0)
            }
            Key::Backspace => {
                self.display.backspace();
                Some(self.display.value())
            }
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
        }
    }

    /// Arms `op`, first completing any operation already pending.
    ///
    /// Two operators in a row therefore compute: the unchanged display is
    /// taken as the right-hand operand. Matches the hand-held calculator
    /// behaviour the transaction form relies on.
    fn press_operator(&mut self, op: Operator) -> Option<f64> {
        let input = self.display.value();
        self.awaiting_new_entry = true;

        match self.pending {
            None => {
                self.pending = Some(PendingOperation {
                    operand: input,
                    operator: op,
                });
                None
            }
            Some(prev) => {
                let result = prev.operator.apply(prev.operand, input);
                self.display.set_result(result);
                self.pending = Some(PendingOperation {
                    operand: result,
                    operator: op,
                });
                Some(result)
            }
        }
    }

    fn press_equals(&mut self) -> Option<f64> {
        let input = self.display.value();
        self.awaiting_new_entry = true;

        match self.pending.take() {
            Some(prev) => {
                let result = prev.operator.apply(prev.operand, input);
                self.display.set_result(result);
                Some(result)
            }
            None => Some(input),
        }
    }
}
