//! Logging wrapper for display implementations
//!
//! This wrapper logs every display operation to help debug game sessions.

use crate::display::display_trait::{DisplayError, GameDisplay};
use log::info;

pub struct LoggingDisplay {
    inner: Box<dyn GameDisplay>,
    op_count: usize,
}

impl LoggingDisplay {
    pub fn new(inner: Box<dyn GameDisplay>) -> Self {
        info!("=== DISPLAY LOGGING STARTED ===");
        Self { inner, op_count: 0 }
    }

    fn log_op(&mut self, op: &str) {
        self.op_count += 1;
        info!("[OP {:04}] {}", self.op_count, op);
    }
}

fn preview(text: &str) -> String {
    text.chars()
        .take(50)
        .collect::<String>()
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

impl GameDisplay for LoggingDisplay {
    fn display_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.log_op(&format!("display_text('{}')", preview(text)));
        self.inner.display_text(text)
    }

    fn display_scroll_chain(&mut self, category: char, id: u16) -> Result<(), DisplayError> {
        self.log_op(&format!("display_scroll_chain('{}', {})", category, id));
        self.inner.display_scroll_chain(category, id)
    }

    fn display_question(&mut self, question: &str) -> Result<bool, DisplayError> {
        self.log_op(&format!("display_question('{}')", preview(question)));
        let answer = self.inner.display_question(question)?;
        info!("  answered {}", answer);
        Ok(answer)
    }

    fn show_status(&mut self, room: &str, score: u16, moves: u32) -> Result<(), DisplayError> {
        self.log_op(&format!("show_status('{}', {}, {})", room, score, moves));
        self.inner.show_status(room, score, moves)
    }

    fn show_input_line(&mut self, line: &str) -> Result<(), DisplayError> {
        self.inner.show_input_line(line)
    }

    fn blip(&mut self) -> Result<(), DisplayError> {
        self.log_op("blip()");
        self.inner.blip()
    }

    fn clear_screen(&mut self) -> Result<(), DisplayError> {
        self.log_op("clear_screen()");
        self.inner.clear_screen()
    }
}

impl Drop for LoggingDisplay {
    fn drop(&mut self) {
        info!(
            "=== DISPLAY LOGGING ENDED ({} operations) ===",
            self.op_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HeadlessDisplay;

    #[test_log::test]
    fn test_forwards_to_inner() {
        let mut d = LoggingDisplay::new(Box::new(HeadlessDisplay::new()));
        d.display_text("Hello.").unwrap();
        d.display_scroll_chain('Q', 57).unwrap();
        assert!(!d.display_question("Quit?").unwrap());
        assert_eq!(d.op_count, 3);
    }
}
