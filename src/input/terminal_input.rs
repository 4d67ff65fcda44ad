//! Keyboard input for the interactive game
//!
//! Uses crossterm's event system in raw mode when stdin is a terminal and
//! falls back to reading whole lines when input is piped.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal,
};
use log::{debug, info};
use std::io::{self, BufRead};
use std::time::Duration;

use crate::display::GameDisplay;
use crate::input::line_editor::{EditKey, EditOutcome, LineEditor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Walk(Direction),
    /// No key arrived within the poll interval
    Idle,
    Quit,
}

pub struct TerminalInput {
    editor: LineEditor,
    in_raw_mode: bool,
    interactive: bool,
    poll_interval: Duration,
}

impl TerminalInput {
    pub fn new(limit: usize) -> Self {
        let interactive = atty::is(atty::Stream::Stdin);
        debug!("Terminal input (interactive: {})", interactive);
        TerminalInput {
            editor: LineEditor::new(limit),
            in_raw_mode: false,
            interactive,
            poll_interval: Duration::from_millis(100),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn cleanup(&mut self) {
        if self.in_raw_mode {
            let _ = terminal::disable_raw_mode();
            self.in_raw_mode = false;
        }
    }

    /// Waits up to one poll interval for input. Piped input blocks for a line
    /// and reports `Quit` at end of file.
    pub fn next_event(&mut self, display: &mut dyn GameDisplay) -> Result<InputEvent, String> {
        if !self.interactive {
            return self.read_line_standard();
        }

        if !self.in_raw_mode {
            terminal::enable_raw_mode()
                .map_err(|e| format!("Failed to enable raw mode: {}", e))?;
            self.in_raw_mode = true;
            display
                .show_input_line(self.editor.line())
                .map_err(String::from)?;
        }

        if !event::poll(self.poll_interval).map_err(|e| format!("Event poll error: {}", e))? {
            return Ok(InputEvent::Idle);
        }

        match event::read().map_err(|e| format!("Event read error: {}", e))? {
            Event::Key(key) => self.handle_key_event(key, display),
            Event::Paste(text) => {
                for c in text.chars() {
                    if self.editor.handle(EditKey::Char(c)) == EditOutcome::Rejected {
                        display.blip().map_err(String::from)?;
                        break;
                    }
                }
                display
                    .show_input_line(self.editor.line())
                    .map_err(String::from)?;
                Ok(InputEvent::Idle)
            }
            _ => Ok(InputEvent::Idle),
        }
    }

    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        display: &mut dyn GameDisplay,
    ) -> Result<InputEvent, String> {
        if key.kind == KeyEventKind::Release {
            return Ok(InputEvent::Idle);
        }
        let edit = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                debug!("Ctrl+C pressed");
                self.cleanup();
                return Ok(InputEvent::Quit);
            }
            KeyCode::Esc => {
                self.cleanup();
                return Ok(InputEvent::Quit);
            }
            KeyCode::Left => return Ok(InputEvent::Walk(Direction::Left)),
            KeyCode::Right => return Ok(InputEvent::Walk(Direction::Right)),
            KeyCode::Char(c) => EditKey::Char(c),
            KeyCode::Backspace => EditKey::Backspace,
            KeyCode::Enter => EditKey::Enter,
            KeyCode::F(3) => EditKey::Recall,
            _ => return Ok(InputEvent::Idle),
        };

        match self.editor.handle(edit) {
            EditOutcome::Edited => {
                display
                    .show_input_line(self.editor.line())
                    .map_err(String::from)?;
                Ok(InputEvent::Idle)
            }
            EditOutcome::Rejected => {
                display.blip().map_err(String::from)?;
                Ok(InputEvent::Idle)
            }
            EditOutcome::Ignored => Ok(InputEvent::Idle),
            EditOutcome::Submitted(line) => {
                self.cleanup();
                let _ = execute!(io::stdout(), Print("\r\n"));
                info!("Command: {}", line);
                Ok(InputEvent::Line(line))
            }
        }
    }

    fn read_line_standard(&mut self) -> Result<InputEvent, String> {
        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(InputEvent::Quit);
        }
        let line = input.trim_end_matches(['\n', '\r']).to_string();
        Ok(InputEvent::Line(line))
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        self.cleanup();
    }
}
