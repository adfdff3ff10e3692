//! Keyboard input mapping
//!
//! The engine itself never sees keyboard events; this layer translates
//! crossterm events into engine keys for the demo shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::engine::Key;
use crate::core::Operator;

/// What the shell should do with a keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Press an engine key
    Press(Key),
    /// Leave the event loop
    Quit,
    /// Nothing to do
    None,
}

/// Translates keyboard events into shell actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps one keyboard event
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> ShellAction {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => ShellAction::Quit,
                _ => ShellAction::None,
            };
        }

        match event.code {
            KeyCode::Char(c @ '0'..='9') => {
                ShellAction::Press(Key::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.') => ShellAction::Press(Key::Decimal),
            KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => Operator::from_char(c)
                .map_or(ShellAction::None, |op| ShellAction::Press(Key::Operator(op))),
            KeyCode::Char('=') | KeyCode::Enter => ShellAction::Press(Key::Equals),
            KeyCode::Backspace => ShellAction::Press(Key::Backspace),
            KeyCode::Char('c' | 'C') | KeyCode::Delete => ShellAction::Press(Key::Clear),
            KeyCode::Char('q') | KeyCode::Esc => ShellAction::Quit,
            _ => ShellAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    // ===== Digit and decimal mapping =====

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                ShellAction::Press(Key::Digit(d))
            );
        }
    }

    #[test]
    fn test_decimal_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.'))),
            ShellAction::Press(Key::Decimal)
        );
    }

    // ===== Operator mapping =====

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                ShellAction::Press(Key::Operator(op))
            );
        }
    }

    #[test]
    fn test_equals_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            ShellAction::Press(Key::Equals)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            ShellAction::Press(Key::Equals)
        );
    }

    // ===== Editing mapping =====

    #[test]
    fn test_backspace_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            ShellAction::Press(Key::Backspace)
        );
    }

    #[test]
    fn test_clear_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c'))),
            ShellAction::Press(Key::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Delete)),
            ShellAction::Press(Key::Clear)
        );
    }

    // ===== Quit mapping =====

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), ShellAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), ShellAction::Quit);
        assert_eq!(handler.handle_key(ctrl('c')), ShellAction::Quit);
        assert_eq!(handler.handle_key(ctrl('q')), ShellAction::Quit);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), ShellAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), ShellAction::None);
        assert_eq!(handler.handle_key(ctrl('x')), ShellAction::None);
    }
}
