//! Word resolution: room-local synonyms first, then the global vocabulary

use crate::text::vocabulary::{Vocabulary, WordCode, ALSO_BASE};
use log::debug;

/// Number of room-local synonym slots
pub const ALSO_SLOTS: usize = 31;

/// A resolved word paired with the text it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub code: WordCode,
    /// Original spelling; `None` past the retained-word limit
    pub raw: Option<String>,
}

impl Word {
    pub fn new(code: WordCode, raw: Option<String>) -> Self {
        Word { code, raw }
    }
}

/// One room-local synonym slot
#[derive(Debug, Clone, PartialEq)]
pub struct AlsoEntry {
    /// Comma-joined uppercase names, with a leading and trailing comma
    pub names: String,
    pub description: String,
}

/// Room-specific words ("also" table). Slot 0 holds the room itself, so its
/// description doubles as the text of LOOK.
#[derive(Debug, Clone, Default)]
pub struct AlsoTable {
    slots: Vec<Option<AlsoEntry>>,
}

impl AlsoTable {
    pub fn new() -> Self {
        AlsoTable {
            slots: vec![None; ALSO_SLOTS],
        }
    }

    /// Fills a slot. `names` is a list of words, joined here as `,A,B,`.
    pub fn set(&mut self, slot: usize, names: &[&str], description: &str) {
        if slot >= ALSO_SLOTS {
            return;
        }
        let mut joined = String::from(",");
        for name in names {
            joined.push_str(&name.to_uppercase());
            joined.push(',');
        }
        self.slots[slot] = Some(AlsoEntry {
            names: joined,
            description: description.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.slots = vec![None; ALSO_SLOTS];
    }

    pub fn get(&self, slot: usize) -> Option<&AlsoEntry> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub fn description(&self, slot: usize) -> Option<&str> {
        self.get(slot).map(|e| e.description.as_str())
    }

    /// Slot whose names contain `,TOKEN`. When several slots match, the last
    /// one wins.
    pub fn matching_slot(&self, token: &str) -> Option<usize> {
        if token.is_empty() {
            return None;
        }
        let needle = format!(",{}", token);
        let mut found = None;
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some(entry) = entry {
                if !entry.names.is_empty() && entry.names.contains(&needle) {
                    found = Some(slot);
                }
            }
        }
        found
    }
}

/// Resolves one uppercase token to a word code
pub fn resolve(token: &str, also: &AlsoTable, vocabulary: &Vocabulary) -> WordCode {
    if let Some(slot) = also.matching_slot(token) {
        debug!("'{}' matched also slot {}", token, slot);
        return WordCode::Object(ALSO_BASE + slot as u8);
    }

    vocabulary.lookup(token).unwrap_or(WordCode::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::vocabulary::Verb;

    fn bedroom() -> AlsoTable {
        let mut also = AlsoTable::new();
        also.set(0, &["bedroom"], "You're in your bedroom.");
        also.set(4, &["box", "chest"], "It's a large wooden box.");
        also.set(6, &["bed"], "Your four-poster bed.");
        also
    }

    #[test]
    fn test_local_words_take_priority() {
        let vocab = Vocabulary::new().unwrap();
        let also = bedroom();
        assert_eq!(resolve("CHEST", &also, &vocab), WordCode::Object(103));
        assert_eq!(resolve("EXAMINE", &also, &vocab), WordCode::Verb(Verb::Examine));
        assert_eq!(resolve("ZORKMID", &also, &vocab), WordCode::Unknown);
    }

    #[test]
    fn test_local_match_is_a_prefix_match() {
        let also = bedroom();
        assert_eq!(also.matching_slot("BO"), Some(4));
        assert_eq!(also.matching_slot("OX"), None);
        assert_eq!(also.matching_slot(""), None);
    }

    #[test]
    fn test_last_matching_slot_wins() {
        let mut also = bedroom();
        also.set(9, &["bedpost"], "A carved bedpost.");
        // ",BED" is found in slots 0, 6 and 9
        assert_eq!(also.matching_slot("BED"), Some(9));
    }

    #[test]
    fn test_descriptions() {
        let also = bedroom();
        assert_eq!(also.description(4), Some("It's a large wooden box."));
        assert_eq!(also.description(5), None);
        assert_eq!(also.description(40), None);
    }
}
