//! Terminal keypad shell
//!
//! A ratatui front end for the amount engine, driven by keyboard and
//! mouse. The engine stays oblivious to both; this module owns the
//! terminal lifecycle and translates events into key presses.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::KeypadApp;
pub use input::{InputHandler, ShellAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::AppLayout;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use thiserror::Error;

/// Errors at the terminal boundary
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal I/O failed
    #[error("terminal I/O: {0}")]
    Io(#[from] io::Error),
}

/// Runs the keypad shell until the user quits.
///
/// Takes over the terminal (raw mode, alternate screen, mouse capture)
/// and restores it on the way out, including on error.
pub fn run(app: &mut KeypadApp) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut KeypadApp) -> Result<(), TuiError> {
    let mut keypad = Keypad::new();
    let handler = InputHandler::new();
    let mut layout = AppLayout::compute(Rect::default());

    while !app.should_quit() {
        terminal.draw(|frame| {
            layout = ui::render(frame, app, &keypad);
        })?;

        if !event::poll(Duration::from_millis(150))? {
            // Tick with no input, drop the button highlight
            keypad.release_all();
            continue;
        }

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match handler.handle_key(key_event) {
                    ShellAction::Press(key) => {
                        keypad.highlight_key(key);
                        app.press(key);
                    }
                    ShellAction::Quit => app.quit(),
                    ShellAction::None => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = keypad.hit_test(layout.keypad, mouse.column, mouse.row) {
                    if let Some(button) = keypad.get_button(index) {
                        let key = button.key;
                        keypad.release_all();
                        keypad.press_button(index);
                        app.press(key);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}
