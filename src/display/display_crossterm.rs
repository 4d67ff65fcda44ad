//! Crossterm-based terminal display
//!
//! Text is word-wrapped to the terminal width and printed with explicit
//! carriage returns so it reads correctly while the input side has the
//! terminal in raw mode.

use crossterm::{
    cursor::{MoveTo, MoveToColumn, RestorePosition, SavePosition},
    event::{self, Event, KeyCode},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use log::debug;
use std::io::{self, Stdout, Write};

use crate::display::display_trait::{DisplayError, GameDisplay};
use crate::text::scrolls;

pub struct CrosstermDisplay {
    stdout: Stdout,
    terminal_width: u16,
    is_tty: bool,
}

impl CrosstermDisplay {
    pub fn new() -> Result<Self, DisplayError> {
        let is_tty = atty::is(atty::Stream::Stdout);
        let (width, _) = if is_tty {
            terminal::size().unwrap_or((80, 24))
        } else {
            (80, 24)
        };
        debug!("Terminal width {} (tty: {})", width, is_tty);
        Ok(CrosstermDisplay {
            stdout: io::stdout(),
            terminal_width: width.max(20),
            is_tty,
        })
    }

    fn print_wrapped(&mut self, text: &str) -> Result<(), DisplayError> {
        for line in wrap(text, self.terminal_width as usize) {
            queue!(self.stdout, Print(line), Print("\r\n"))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn read_yes_no_raw(&mut self) -> Result<bool, DisplayError> {
        terminal::enable_raw_mode()?;
        let answer = loop {
            match event::read() {
                Ok(Event::Key(key)) => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => break Ok(true),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => break Ok(false),
                    _ => {}
                },
                Ok(_) => {}
                Err(e) => break Err(DisplayError::from(e)),
            }
        };
        terminal::disable_raw_mode()?;
        answer
    }

    fn read_yes_no_line(&mut self) -> Result<bool, DisplayError> {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim_start().to_ascii_lowercase().starts_with('y'))
    }
}

/// Breaks `text` into lines no wider than `width`, at spaces where possible.
/// Embedded newlines start a new line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ') {
            let extra = if current.is_empty() { 0 } else { 1 };
            if !current.is_empty() && current.chars().count() + extra + word.chars().count() > width
            {
                lines.push(std::mem::take(&mut current));
            } else if extra == 1 {
                current.push(' ');
            }
            current.push_str(word);
            while current.chars().count() > width {
                let tail: String = current.chars().skip(width).collect();
                let head: String = current.chars().take(width).collect();
                lines.push(head);
                current = tail;
            }
        }
        lines.push(current);
    }
    lines
}

impl GameDisplay for CrosstermDisplay {
    fn display_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.print_wrapped(text)
    }

    fn display_scroll_chain(&mut self, category: char, id: u16) -> Result<(), DisplayError> {
        match scrolls::scroll(category, id) {
            Some(text) => self.print_wrapped(text),
            None => {
                debug!("Missing scroll {}{}", category, id);
                self.print_wrapped(&format!("[scroll {}{}]", category, id))
            }
        }
    }

    fn display_question(&mut self, question: &str) -> Result<bool, DisplayError> {
        self.print_wrapped(question)?;
        queue!(self.stdout, Print("(Y/N) "))?;
        self.stdout.flush()?;
        let answer = if self.is_tty && atty::is(atty::Stream::Stdin) {
            self.read_yes_no_raw()?
        } else {
            self.read_yes_no_line()?
        };
        queue!(
            self.stdout,
            Print(if answer { "Yes" } else { "No" }),
            Print("\r\n")
        )?;
        self.stdout.flush()?;
        Ok(answer)
    }

    fn show_status(&mut self, room: &str, score: u16, moves: u32) -> Result<(), DisplayError> {
        if !self.is_tty {
            return Ok(());
        }
        let status = format!(" {}   Score: {}   Moves: {}", room, score, moves);
        let padded = format!("{:width$}", status, width = self.terminal_width as usize);
        execute!(
            self.stdout,
            SavePosition,
            MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(padded),
            SetAttribute(Attribute::Reset),
            RestorePosition
        )?;
        Ok(())
    }

    fn show_input_line(&mut self, line: &str) -> Result<(), DisplayError> {
        execute!(
            self.stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print("> "),
            Print(line)
        )?;
        Ok(())
    }

    fn blip(&mut self) -> Result<(), DisplayError> {
        execute!(self.stdout, Print('\x07'))?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DisplayError> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 1))?;
        Ok(())
    }
}

impl Drop for CrosstermDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, SetAttribute(Attribute::Reset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_at_spaces() {
        let lines = wrap("The quick brown fox jumps over the lazy dog", 10);
        assert_eq!(
            lines,
            vec!["The quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines_and_splits_long_words() {
        let lines = wrap("ab\nabcdefghij", 4);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
    }
}
