//! Headless display implementation for testing and piped sessions
//!
//! Collects all output without displaying it. Questions are answered from a
//! script; an unscripted question is answered "no".

use crate::display::display_trait::{DisplayError, GameDisplay};
use crate::text::scrolls;
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    buffer: Vec<String>,
    scrolls: Vec<(char, u16)>,
    questions: Vec<String>,
    answers: VecDeque<bool>,
    status: Option<String>,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer to the next question asked
    pub fn answer_next(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Get the current buffer content (for testing)
    pub fn get_buffer(&self) -> &[String] {
        &self.buffer
    }

    /// Get all output as a single string
    pub fn get_output(&self) -> String {
        self.buffer.join("\n")
    }

    pub fn last_text(&self) -> Option<&str> {
        self.buffer.last().map(|s| s.as_str())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.buffer.iter().any(|line| line.contains(text))
    }

    pub fn scrolls(&self) -> &[(char, u16)] {
        &self.scrolls
    }

    pub fn shown_scroll(&self, category: char, id: u16) -> bool {
        self.scrolls.contains(&(category, id))
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.scrolls.clear();
        self.questions.clear();
    }
}

impl GameDisplay for HeadlessDisplay {
    fn display_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn display_scroll_chain(&mut self, category: char, id: u16) -> Result<(), DisplayError> {
        debug!("Headless: scroll {}{}", category, id);
        self.scrolls.push((category, id));
        let text = scrolls::scroll(category, id)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("[scroll {}{}]", category, id));
        self.buffer.push(text);
        Ok(())
    }

    fn display_question(&mut self, question: &str) -> Result<bool, DisplayError> {
        self.questions.push(question.to_string());
        self.buffer.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }

    fn show_status(&mut self, room: &str, score: u16, moves: u32) -> Result<(), DisplayError> {
        self.status = Some(format!("{} Score: {} Moves: {}", room, score, moves));
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DisplayError> {
        self.buffer.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_text_and_scrolls() {
        let mut d = HeadlessDisplay::new();
        d.display_text("Hello.").unwrap();
        d.display_scroll_chain('Q', 57).unwrap();
        d.display_scroll_chain('Q', 9999).unwrap();

        assert_eq!(d.get_buffer()[0], "Hello.");
        assert_eq!(d.get_buffer()[1], "You can't pick that up, Avvy!");
        assert_eq!(d.last_text(), Some("[scroll Q9999]"));
        assert!(d.shown_scroll('Q', 57));
    }

    #[test]
    fn test_scripted_answers() {
        let mut d = HeadlessDisplay::new();
        d.answer_next(true);
        assert!(d.display_question("Really?").unwrap());
        assert!(!d.display_question("Again?").unwrap());
        assert_eq!(d.questions().len(), 2);
    }
}
