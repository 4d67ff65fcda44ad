//! Pulls the verb, operands and politeness out of a normalized word sequence
//!
//! Each field has its own tie-break rule, kept in a named function so the
//! policy is stated once:
//!
//! * verb: the first verb in reading order
//! * thing / thing2: the last object, and the one before it
//! * person: the first person in reading order

use crate::text::resolver::Word;
use crate::text::vocabulary::{Verb, WordCode, LAST_BLOCKING_PREPOSITION};
use crate::world::People;
use log::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrammarResult {
    pub verb: Option<Verb>,
    /// Unslipped object code of the last object mentioned
    pub thing: Option<u8>,
    /// Object mentioned before `thing`
    pub thing2: Option<u8>,
    pub person: Option<People>,
    pub polite: bool,
    /// Subject of conversation, for TALK and SAY
    pub subject: Option<WordCode>,
}

/// Finds the subject of conversation and neutralizes its slot so the main
/// extraction does not count it again. Tried in order: a quoted word, the
/// word after ABOUT, the word after TALK unless it is a blocking preposition.
pub fn extract_subject(words: &mut [Word]) -> Option<WordCode> {
    let quoted = words.iter().position(|w| {
        w.raw
            .as_deref()
            .map_or(false, |raw| raw.starts_with('"') || raw.starts_with('`'))
    });
    if let Some(i) = quoted {
        return take_subject(words, i);
    }

    if words.len() < 2 {
        return None;
    }

    if let Some(i) = (0..words.len() - 1).find(|&i| words[i].code == WordCode::TopicMarker) {
        return take_subject(words, i + 1);
    }

    let after_talk = (0..words.len() - 1).find(|&i| {
        words[i].code == WordCode::Verb(Verb::Talk)
            && match words[i + 1].code {
                WordCode::Moved => false,
                WordCode::Preposition(p) => p > LAST_BLOCKING_PREPOSITION,
                _ => true,
            }
    });
    after_talk.and_then(|i| take_subject(words, i + 1))
}

fn take_subject(words: &mut [Word], index: usize) -> Option<WordCode> {
    let code = std::mem::replace(&mut words[index].code, WordCode::Moved);
    match code {
        WordCode::Moved => None,
        code => Some(code),
    }
}

pub fn first_verb_in_order(words: &[Word]) -> Option<Verb> {
    words.iter().find_map(|w| w.code.as_verb())
}

/// Returns `(thing, thing2)`: the last object code in reading order and the
/// one before it
pub fn last_two_objects_in_order(words: &[Word]) -> (Option<u8>, Option<u8>) {
    let mut objects = words.iter().rev().filter_map(|w| match w.code {
        WordCode::Object(code) => Some(code),
        _ => None,
    });
    let thing = objects.next();
    let thing2 = objects.next();
    (thing, thing2)
}

pub fn first_person_in_order(words: &[Word]) -> Option<People> {
    words.iter().find_map(|w| match w.code {
        WordCode::Person(p) => Some(p),
        _ => None,
    })
}

pub fn is_polite(words: &[Word]) -> bool {
    words.iter().any(|w| w.code == WordCode::Politeness)
}

pub fn extract(words: &mut [Word]) -> GrammarResult {
    let subject = extract_subject(words);
    let (thing, thing2) = last_two_objects_in_order(words);

    let result = GrammarResult {
        verb: first_verb_in_order(words),
        thing,
        thing2,
        person: first_person_in_order(words),
        polite: is_polite(words),
        subject,
    };
    debug!("Extracted {:?}", result);
    result
}
