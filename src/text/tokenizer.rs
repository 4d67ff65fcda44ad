//! Splits a typed line into words

/// Characters removed from a word before it is looked up
const PUNCTUATION: &str = "~`!@#$%^&*()_+-={}[]:\"|;'\\,./<>?";

/// A single word of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as typed, used in messages and for quote detection
    pub display: String,
    /// Uppercased and stripped of punctuation, used for lookup
    pub matched: String,
}

/// Lazy sequence of tokens over a line. It holds no state besides the unread
/// remainder, so tokenizing the same text again yields the same tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let trimmed = self.rest.trim_start_matches(' ');
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed.find(' ').unwrap_or(trimmed.len());
        let display = &trimmed[..end];
        self.rest = &trimmed[end..];

        Some(Token {
            display: display.to_string(),
            matched: strip_punctuation(&display.to_uppercase()),
        })
    }
}

pub fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|c| !PUNCTUATION.contains(*c)).collect()
}

/// Capitalises the first letter of every word and lowercases the rest
pub fn proper_nouns(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut start_of_word = true;
    for ch in text.chars() {
        if start_of_word {
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
        start_of_word = ch == ' ';
    }
    result
}
