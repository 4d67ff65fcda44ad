//! Command-line editing
//!
//! Quote marks typed on the command line alternate between an opening `"`
//! and a closing `` ` ``, whichever key was pressed.

use log::debug;

pub const DEFAULT_LINE_LIMIT: usize = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Char(char),
    Backspace,
    Enter,
    /// F3: append the rest of the previous command
    Recall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The line changed; redraw it
    Edited,
    /// The key did nothing
    Ignored,
    /// The line is full
    Rejected,
    /// Enter on a non-empty line
    Submitted(String),
}

#[derive(Debug, Clone)]
pub struct LineEditor {
    line: String,
    backup: String,
    quote: bool,
    limit: usize,
}

impl Default for LineEditor {
    fn default() -> Self {
        LineEditor::new(DEFAULT_LINE_LIMIT)
    }
}

impl LineEditor {
    pub fn new(limit: usize) -> Self {
        LineEditor {
            line: String::new(),
            backup: String::new(),
            quote: false,
            limit,
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// The last submitted command
    pub fn backup(&self) -> &str {
        &self.backup
    }

    fn len(&self) -> usize {
        self.line.chars().count()
    }

    pub fn handle(&mut self, key: EditKey) -> EditOutcome {
        match key {
            EditKey::Char(c) => {
                if self.len() >= self.limit {
                    return EditOutcome::Rejected;
                }
                if c == '"' || c == '`' {
                    self.quote = !self.quote;
                    self.line.push(if self.quote { '"' } else { '`' });
                } else if c.is_control() {
                    return EditOutcome::Ignored;
                } else {
                    self.line.push(c);
                }
                EditOutcome::Edited
            }
            EditKey::Backspace => match self.line.pop() {
                Some('"') | Some('`') => {
                    self.quote = !self.quote;
                    EditOutcome::Edited
                }
                Some(_) => EditOutcome::Edited,
                None => EditOutcome::Ignored,
            },
            EditKey::Recall => {
                let typed = self.len();
                let rest: Vec<char> = self.backup.chars().skip(typed).collect();
                if rest.is_empty() {
                    return EditOutcome::Ignored;
                }
                for c in rest {
                    if self.len() >= self.limit {
                        break;
                    }
                    if c == '"' || c == '`' {
                        self.quote = !self.quote;
                    }
                    self.line.push(c);
                }
                EditOutcome::Edited
            }
            EditKey::Enter => {
                if self.line.is_empty() {
                    return EditOutcome::Ignored;
                }
                let line = std::mem::take(&mut self.line);
                self.backup = line.clone();
                self.quote = false;
                debug!("Line submitted: '{}'", line);
                EditOutcome::Submitted(line)
            }
        }
    }
}
