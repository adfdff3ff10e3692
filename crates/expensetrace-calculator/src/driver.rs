//! Scripted keypad driving
//!
//! One behavioural specification, runnable against any surface that hosts
//! the engine. A driver turns a press script into engine transitions and
//! records the commit notifications, so the verifications below can assert
//! on the exact stream a transaction form would have received.

use crate::core::engine::{Key, SequentialCalculator};
use crate::core::Operator;

/// Abstract driver over an amount keypad surface
pub trait AmountPadDriver {
    /// Presses one key
    fn press(&mut self, key: Key);

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns the last committed amount
    fn committed(&self) -> f64;

    /// Returns every committed amount, oldest first
    fn commits(&self) -> Vec<f64>;

    /// Restores construction state and forgets recorded commits
    fn reset(&mut self);

    /// Presses a whole script, one key per character.
    ///
    /// Digits, '.', the four operator characters and '=' map to their
    /// keys; 'C' clears and '<' backspaces. Anything else is skipped.
    fn press_sequence(&mut self, script: &str) {
        for c in script.chars() {
            let key = match c {
                '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
                '.' => Some(Key::Decimal),
                '=' => Some(Key::Equals),
                'C' | 'c' => Some(Key::Clear),
                '<' => Some(Key::Backspace),
                _ => Operator::from_char(c).map(Key::Operator),
            };
            if let Some(key) = key {
                self.press(key);
            }
        }
    }
}

/// Headless driver wrapping the bare engine
#[derive(Debug, Clone)]
pub struct ScriptDriver {
    calculator: SequentialCalculator,
    initial: f64,
    committed: f64,
    commits: Vec<f64>,
}

impl Default for ScriptDriver {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScriptDriver {
    /// Creates a driver with the given initial amount
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            calculator: SequentialCalculator::new(initial),
            initial,
            committed: initial,
            commits: Vec::new(),
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn calculator(&self) -> &SequentialCalculator {
        &self.calculator
    }
}

impl AmountPadDriver for ScriptDriver {
    fn press(&mut self, key: Key) {
        if let Some(amount) = self.calculator.press(key) {
            self.committed = amount;
            self.commits.push(amount);
        }
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn committed(&self) -> f64 {
        self.committed
    }

    fn commits(&self) -> Vec<f64> {
        self.commits.clone()
    }

    fn reset(&mut self) {
        self.calculator = SequentialCalculator::new(self.initial);
        self.committed = self.initial;
        self.commits.clear();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{AmountPadDriver, Key};
    use crate::tui::KeypadApp;

    /// Driver wrapping the TUI app, commit log included
    #[derive(Debug)]
    pub struct TuiDriver {
        app: KeypadApp,
        initial: f64,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new(0.0)
        }
    }

    impl TuiDriver {
        /// Creates a TUI driver with the given initial amount
        #[must_use]
        pub fn new(initial: f64) -> Self {
            Self {
                app: KeypadApp::new(initial),
                initial,
            }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &KeypadApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut KeypadApp {
            &mut self.app
        }
    }

    impl AmountPadDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn committed(&self) -> f64 {
            self.app.committed()
        }

        fn commits(&self) -> Vec<f64> {
            self.app.log().iter().map(|e| e.amount).collect()
        }

        fn reset(&mut self) {
            self.app = KeypadApp::new(self.initial);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behavioural specifications =====
// These run against ANY AmountPadDriver implementation.

/// Digits accumulate with leading-zero suppression and commit nothing
pub fn verify_digit_entry<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("123");
    assert_eq!(driver.display(), "123");
    assert!(driver.commits().is_empty());
}

/// A second decimal point in one number is ignored
pub fn verify_decimal_entry<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("1..2");
    assert_eq!(driver.display(), "1.2");
}

/// Clear resets the display and commits zero
pub fn verify_clear<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("75C");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.commits(), vec![0.0]);
}

/// Backspace drops one character and commits the reparse; a single
/// character resets to "0" and commits zero
pub fn verify_backspace<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("12<");
    assert_eq!(driver.display(), "1");
    assert_eq!(driver.committed(), 1.0);

    driver.press_sequence("<");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.committed(), 0.0);
}

/// Chained operators evaluate strictly left to right, committing each
/// intermediate result
pub fn verify_sequential_chaining<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("6+3*2=");
    assert_eq!(driver.commits(), vec![9.0, 18.0]);
    assert_eq!(driver.display(), "18");
}

/// Equals with nothing pending commits the raw display value
pub fn verify_equals_passthrough<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("5=");
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.commits(), vec![5.0]);
}

/// Division by zero commits and displays the same non-finite value
pub fn verify_division_by_zero<D: AmountPadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("5/0=");
    assert!(driver.committed().is_infinite());
    assert_eq!(driver.display(), "inf");
}

/// Complete verification suite
pub fn run_full_specification<D: AmountPadDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_entry(driver);
    verify_clear(driver);
    verify_backspace(driver);
    verify_sequential_chaining(driver);
    verify_equals_passthrough(driver);
    verify_division_by_zero(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ScriptDriver tests =====

    #[test]
    fn test_script_driver_new() {
        let driver = ScriptDriver::new(25.0);
        assert_eq!(driver.display(), "25");
        assert_eq!(driver.committed(), 25.0);
        assert!(driver.commits().is_empty());
    }

    #[test]
    fn test_script_driver_default() {
        let driver = ScriptDriver::default();
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_script_driver_records_commit_stream() {
        let mut driver = ScriptDriver::new(0.0);
        driver.press_sequence("6+3*2=");
        assert_eq!(driver.commits(), vec![9.0, 18.0]);
        assert_eq!(driver.committed(), 18.0);
    }

    #[test]
    fn test_script_driver_skips_unknown_chars() {
        let mut driver = ScriptDriver::new(0.0);
        driver.press_sequence("1 x2");
        assert_eq!(driver.display(), "12");
    }

    #[test]
    fn test_script_driver_reset() {
        let mut driver = ScriptDriver::new(7.0);
        driver.press_sequence("5=");
        driver.reset();
        assert_eq!(driver.display(), "7");
        assert_eq!(driver.committed(), 7.0);
        assert!(driver.commits().is_empty());
    }

    #[test]
    fn test_script_driver_engine_access() {
        let mut driver = ScriptDriver::new(0.0);
        driver.press_sequence("6+");
        assert!(driver.calculator().pending().is_some());
    }

    // ===== Unified specification against the headless driver =====

    #[test]
    fn test_unified_digit_entry() {
        run_spec(verify_digit_entry);
    }

    #[test]
    fn test_unified_decimal_entry() {
        run_spec(verify_decimal_entry);
    }

    #[test]
    fn test_unified_clear() {
        run_spec(verify_clear);
    }

    #[test]
    fn test_unified_backspace() {
        run_spec(verify_backspace);
    }

    #[test]
    fn test_unified_sequential_chaining() {
        run_spec(verify_sequential_chaining);
    }

    #[test]
    fn test_unified_equals_passthrough() {
        run_spec(verify_equals_passthrough);
    }

    #[test]
    fn test_unified_division_by_zero() {
        run_spec(verify_division_by_zero);
    }

    #[test]
    fn test_full_specification() {
        run_spec(run_full_specification::<ScriptDriver>);
    }

    fn run_spec(spec: impl Fn(&mut ScriptDriver)) {
        let mut driver = ScriptDriver::new(0.0);
        spec(&mut driver);
    }

    // ===== Unified specification against the TUI surface =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new(3.0);
            assert_eq!(driver.display(), "3");
            assert_eq!(driver.committed(), 3.0);
        }

        #[test]
        fn test_tui_driver_app_access() {
            let mut driver = TuiDriver::new(0.0);
            driver.app_mut().press(Key::Digit(4));
            assert_eq!(driver.app().display(), "4");
        }

        #[test]
        fn test_tui_full_specification() {
            let mut driver = TuiDriver::new(0.0);
            run_full_specification(&mut driver);
        }
    }
}
