//! TUI application state
//!
//! Hosts the engine the way a transaction form would: every commit
//! notification updates the committed amount and lands in the log.

use crate::core::engine::{Key, SequentialCalculator};
use crate::core::history::CommitLog;

/// Application state for the keypad TUI
#[derive(Debug)]
pub struct KeypadApp {
    calculator: SequentialCalculator,
    committed: f64,
    log: CommitLog,
    should_quit: bool,
}

impl Default for KeypadApp {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl KeypadApp {
    /// Creates an app seeded with the current amount of the form
    #[must_use]
    pub fn new(current_amount: f64) -> Self {
        Self {
            calculator: SequentialCalculator::new(current_amount),
            committed: current_amount,
            log: CommitLog::new(),
            should_quit: false,
        }
    }

    /// Presses one key, recording any commit notification
    pub fn press(&mut self, key: Key) {
        if let Some(amount) = self.calculator.press(key) {
            tracing::debug!(display = self.calculator.display(), amount, "commit");
            self.committed = amount;
            self.log.record(self.calculator.display(), amount);
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the last committed amount
    #[must_use]
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// Returns the commit log
    #[must_use]
    pub fn log(&self) -> &CommitLog {
        &self.log
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn calculator(&self) -> &SequentialCalculator {
        &self.calculator
    }

    /// Returns true once quit has been requested
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown of the event loop
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
