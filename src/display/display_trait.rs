//! Core display trait for the game's text output
//!
//! Verb handlers and the game loop talk to the player only through this
//! trait, whether the output goes to a terminal or is collected by a test.

use std::fmt;

pub trait GameDisplay {
    /// Show a paragraph of text
    fn display_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Show canned text by scroll category and number
    fn display_scroll_chain(&mut self, category: char, id: u16) -> Result<(), DisplayError>;

    /// Ask a yes/no question
    fn display_question(&mut self, question: &str) -> Result<bool, DisplayError>;

    /// Update the status line
    fn show_status(&mut self, room: &str, score: u16, moves: u32) -> Result<(), DisplayError>;

    /// Redraw the line being typed
    fn show_input_line(&mut self, _line: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Audible refusal, e.g. when the input line is full
    fn blip(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DisplayError>;
}

impl<T: GameDisplay + ?Sized> GameDisplay for Box<T> {
    fn display_text(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).display_text(text)
    }

    fn display_scroll_chain(&mut self, category: char, id: u16) -> Result<(), DisplayError> {
        (**self).display_scroll_chain(category, id)
    }

    fn display_question(&mut self, question: &str) -> Result<bool, DisplayError> {
        (**self).display_question(question)
    }

    fn show_status(&mut self, room: &str, score: u16, moves: u32) -> Result<(), DisplayError> {
        (**self).show_status(room, score, moves)
    }

    fn show_input_line(&mut self, line: &str) -> Result<(), DisplayError> {
        (**self).show_input_line(line)
    }

    fn blip(&mut self) -> Result<(), DisplayError> {
        (**self).blip()
    }

    fn clear_screen(&mut self) -> Result<(), DisplayError> {
        (**self).clear_screen()
    }
}

/// Display error type
#[derive(Debug, Clone)]
pub struct DisplayError {
    pub message: String,
}

impl DisplayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display error: {}", self.message)
    }
}

impl std::error::Error for DisplayError {}

impl From<std::io::Error> for DisplayError {
    fn from(error: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

impl From<DisplayError> for String {
    fn from(error: DisplayError) -> String {
        error.message
    }
}
