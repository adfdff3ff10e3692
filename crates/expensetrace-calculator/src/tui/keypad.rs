//! Amount keypad grid
//!
//! A fixed 4-column button grid bound directly to engine keys. Buttons can
//! be activated by mouse (hit-testing against the rendered area) and
//! highlighted when the matching key arrives from the demo shell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::engine::Key;
use crate::core::Operator;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single keypad button bound to an engine key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button
    pub label: &'static str,
    /// The engine key this button presses
    pub key: Key,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    row: usize,
    col: usize,
    span: usize,
}

impl KeypadButton {
    fn new(label: &'static str, key: Key, row: usize, col: usize, span: usize) -> Self {
        Self {
            label,
            key,
            pressed: false,
            row,
            col,
            span,
        }
    }

    fn digit(d: u8, row: usize, col: usize, span: usize) -> Self {
        Self::new(DIGIT_LABELS[d as usize], Key::Digit(d), row, col, span)
    }

    /// Sets the highlight state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns the (row, col) grid position
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Returns how many grid columns the button covers
    #[must_use]
    pub fn span(&self) -> usize {
        self.span
    }
}

/// The keypad layout - a 5x4 grid with two double-wide buttons
/// ```text
/// [ C ] [ ⌫ ] [ / ] [ * ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ . ]
/// [    0     ] [    =    ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard amount keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ⌫ / *
            KeypadButton::new("C", Key::Clear, 0, 0, 1),
            KeypadButton::new("⌫", Key::Backspace, 0, 1, 1),
            KeypadButton::new("/", Key::Operator(Operator::Divide), 0, 2, 1),
            KeypadButton::new("*", Key::Operator(Operator::Multiply), 0, 3, 1),
            // Row 2: 7 8 9 -
            KeypadButton::digit(7, 1, 0, 1),
            KeypadButton::digit(8, 1, 1, 1),
            KeypadButton::digit(9, 1, 2, 1),
            KeypadButton::new("-", Key::Operator(Operator::Subtract), 1, 3, 1),
            // Row 3: 4 5 6 +
            KeypadButton::digit(4, 2, 0, 1),
            KeypadButton::digit(5, 2, 1, 1),
            KeypadButton::digit(6, 2, 2, 1),
            KeypadButton::new("+", Key::Operator(Operator::Add), 2, 3, 1),
            // Row 4: 1 2 3 .
            KeypadButton::digit(1, 3, 0, 1),
            KeypadButton::digit(2, 3, 1, 1),
            KeypadButton::digit(3, 3, 2, 1),
            KeypadButton::new(".", Key::Decimal, 3, 3, 1),
            // Row 5: 0 and = are double-wide
            KeypadButton::digit(0, 4, 0, 2),
            KeypadButton::new("=", Key::Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a mutable button by index
    pub fn get_button_mut(&mut self, index: usize) -> Option<&mut KeypadButton> {
        self.buttons.get_mut(index)
    }

    /// Gets the button covering a grid cell, span-aware
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.col && col < b.col + b.span)
    }

    /// Finds the button bound to an engine key
    #[must_use]
    pub fn find_by_key(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button bound to `key`, releasing every other one
    pub fn highlight_key(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_by_key(key) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside the rendered area to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }

        self.buttons
            .iter()
            .position(|b| b.row == row && col >= b.col && col < b.col + b.span)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.key {
            Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White),
            Key::Operator(_) => Style::default().fg(Color::Yellow),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Backspace => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for btn in self.keypad.buttons() {
            let (row, col) = btn.position();
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);
            let width = btn.span() as u16 * btn_width;

            if width < 3 {
                continue;
            }

            let label = format!("[{}]", btn.label);
            let label_x = x + (width.saturating_sub(label.chars().count() as u16)) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, Self::button_style(btn)),
                    width,
                );
            }
        }
    }
}
