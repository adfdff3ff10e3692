//! Screen layout and rendering
//!
//! Amount display on top, committed amount below it, then the keypad with
//! the commit log and a help sidebar alongside.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::format_amount;
use crate::tui::app::KeypadApp;
use crate::tui::keypad::{Keypad, KeypadWidget};

/// Keyboard shortcuts shown in the help sidebar
const HELP_SHORTCUTS: &[&str] = &[
    "0-9 .  enter amount",
    "+ - * /  operator",
    "= / Enter  commit",
    "Backspace  erase",
    "c / Del  clear",
    "q / Esc  quit",
    "",
    "Click buttons with",
    "the mouse too.",
];

/// Screen regions for one rendered frame
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// The amount being edited
    pub display: Rect,
    /// The last committed amount
    pub committed: Rect,
    /// The button grid, used for mouse hit-testing
    pub keypad: Rect,
    /// Recent commits
    pub log: Rect,
    /// Keyboard shortcuts
    pub help: Rect,
}

impl AppLayout {
    /// Splits the terminal area into the screen regions
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(28), Constraint::Length(24)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(12),
                Constraint::Min(3),
            ])
            .split(columns[0]);

        Self {
            display: rows[0],
            committed: rows[1],
            keypad: rows[2],
            log: rows[3],
            help: columns[1],
        }
    }
}

/// Renders one frame, returning the regions for mouse hit-testing
pub fn render(frame: &mut Frame, app: &KeypadApp, keypad: &Keypad) -> AppLayout {
    let layout = AppLayout::compute(frame.area());

    let display = Paragraph::new(app.display())
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Amount ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(display, layout.display);

    let committed = Paragraph::new(format_amount(app.committed()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title(" Committed ").borders(Borders::ALL));
    frame.render_widget(committed, layout.committed);

    frame.render_widget(KeypadWidget::new(keypad), layout.keypad);

    let visible = layout.log.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .log()
        .iter_rev()
        .take(visible)
        .map(|entry| Line::from(entry.line()))
        .collect();
    let log = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" Commits ").borders(Borders::ALL));
    frame.render_widget(log, layout.log);

    let help_lines: Vec<Line> = HELP_SHORTCUTS.iter().map(|s| Line::from(*s)).collect();
    let help = Paragraph::new(help_lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title(" Keys ").borders(Borders::ALL));
    frame.render_widget(help, layout.help);

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Key;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &KeypadApp) -> String {
        let keypad = Keypad::new();
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render(frame, app, &keypad);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_regions_fit() {
        let area = Rect::new(0, 0, 60, 24);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.display.height, 3);
        assert_eq!(layout.committed.height, 3);
        assert_eq!(layout.keypad.height, 12);
        assert!(layout.log.height >= 3);
        assert_eq!(layout.help.width, 24);
    }

    #[test]
    fn test_layout_keypad_below_display() {
        let layout = AppLayout::compute(Rect::new(0, 0, 60, 24));
        assert!(layout.keypad.y > layout.display.y);
        assert!(layout.log.y > layout.keypad.y);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_panels() {
        let content = draw(&KeypadApp::new(0.0));
        assert!(content.contains("Amount"));
        assert!(content.contains("Committed"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Commits"));
        assert!(content.contains("Keys"));
    }

    #[test]
    fn test_render_shows_display_text() {
        let mut app = KeypadApp::new(0.0);
        app.press(Key::Digit(4));
        app.press(Key::Digit(2));
        let content = draw(&app);
        assert!(content.contains("42"));
    }

    #[test]
    fn test_render_shows_commit_lines() {
        let mut app = KeypadApp::new(0.0);
        app.press(Key::Digit(5));
        app.press(Key::Equals);
        let content = draw(&app);
        assert!(content.contains("5 = 5"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let keypad = Keypad::new();
        let app = KeypadApp::new(0.0);
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render(frame, &app, &keypad);
            })
            .unwrap();
    }
}
