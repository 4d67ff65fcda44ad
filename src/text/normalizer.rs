//! Folds idioms and room-dependent names in a resolved word sequence

use crate::text::resolver::Word;
use crate::text::vocabulary::{
    Homonym, Verb, WordCode, PREP_AT, PREP_DOWN, PREP_INTO, PREP_OFF, PREP_ON, PREP_UP,
};
use crate::world::{People, Room};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Replacement {
    Delete,
    With(WordCode),
}

/// A contiguous code sequence and what it collapses to
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseRule {
    pub pattern: Vec<WordCode>,
    pub replacement: Replacement,
}

impl PhraseRule {
    pub fn new(pattern: Vec<WordCode>, replacement: Replacement) -> Self {
        PhraseRule {
            pattern,
            replacement,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhraseNormalizer {
    idioms: Vec<PhraseRule>,
}

impl Default for PhraseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseNormalizer {
    pub fn new() -> Self {
        use WordCode::{Preposition as P, Verb as V};

        let fold = |pattern: Vec<WordCode>, verb: Verb| {
            PhraseRule::new(pattern, Replacement::With(WordCode::Verb(verb)))
        };

        let idioms = vec![
            PhraseRule::new(vec![WordCode::Noise], Replacement::Delete),
            fold(vec![V(Verb::Look), P(PREP_AT)], Verb::Examine),
            fold(vec![V(Verb::Look), P(PREP_INTO)], Verb::Examine),
            fold(vec![V(Verb::Get), P(PREP_UP)], Verb::Stand),
            fold(vec![V(Verb::Get), P(PREP_DOWN)], Verb::Stand),
            fold(vec![V(Verb::Go), P(PREP_INTO)], Verb::Open),
            PhraseRule::new(
                vec![V(Verb::Pee), P(PREP_OFF)],
                Replacement::With(WordCode::Swear),
            ),
            // "take inventory"
            fold(vec![V(Verb::Get), V(Verb::Inventory)], Verb::Inventory),
            fold(vec![V(Verb::Put), P(PREP_ON)], Verb::Wear),
            fold(vec![V(Verb::Get), P(PREP_OFF)], Verb::Undress),
        ];

        PhraseNormalizer { idioms }
    }

    /// Rules for a room, in application order: idioms, then homonyms
    pub fn rules_for(&self, room: Room) -> Vec<PhraseRule> {
        let mut rules = self.idioms.clone();
        rules.extend(homonym_rules(room));
        rules
    }

    pub fn normalize(&self, words: &mut Vec<Word>, room: Room) {
        for rule in self.rules_for(room) {
            let applied = apply_rule(words, &rule);
            if applied > 0 {
                debug!("Rule {:?} applied {} time(s)", rule.pattern, applied);
            }
        }
    }
}

/// Names whose referent depends on where Avvy is standing
pub fn homonym_rules(room: Room) -> Vec<PhraseRule> {
    let barman = if room == Room::NottsPub {
        People::Port
    } else {
        People::Malagauche
    };

    let monk = match room {
        Room::AylesOffice => People::Ayles,
        Room::MusicRoom => People::Jacques,
        _ => People::Ibythneth,
    };

    vec![
        PhraseRule::new(
            vec![WordCode::Homonym(Homonym::Barman)],
            Replacement::With(WordCode::Person(barman)),
        ),
        PhraseRule::new(
            vec![WordCode::Homonym(Homonym::Monk)],
            Replacement::With(WordCode::Person(monk)),
        ),
    ]
}

fn find_pattern(words: &[Word], pattern: &[WordCode]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > words.len() {
        return None;
    }
    words
        .windows(pattern.len())
        .position(|window| window.iter().zip(pattern).all(|(w, p)| w.code == *p))
}

/// Applies one rule until it no longer matches, rescanning from the start
/// after every splice. Returns the number of splices.
pub fn apply_rule(words: &mut Vec<Word>, rule: &PhraseRule) -> usize {
    let mut applied = 0;
    while let Some(start) = find_pattern(words, &rule.pattern) {
        let end = start + rule.pattern.len();
        match rule.replacement {
            Replacement::Delete => {
                words.drain(start..end);
            }
            Replacement::With(code) => {
                let raw_parts: Vec<String> = words[start..end]
                    .iter()
                    .filter_map(|w| w.raw.clone())
                    .collect();
                let raw = if raw_parts.is_empty() {
                    None
                } else {
                    Some(raw_parts.join(" "))
                };
                words.splice(start..end, std::iter::once(Word::new(code, raw)));
            }
        }
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::vocabulary::{Pronoun, PREP_TO};

    fn words(codes: &[WordCode]) -> Vec<Word> {
        codes
            .iter()
            .enumerate()
            .map(|(i, c)| Word::new(*c, Some(format!("w{}", i))))
            .collect()
    }

    fn codes(words: &[Word]) -> Vec<WordCode> {
        words.iter().map(|w| w.code).collect()
    }

    #[test]
    fn test_noise_is_deleted() {
        let n = PhraseNormalizer::new();
        let mut w = words(&[
            WordCode::Verb(Verb::Examine),
            WordCode::Noise,
            WordCode::Noise,
            WordCode::Object(52),
        ]);
        n.normalize(&mut w, Room::Yours);
        assert_eq!(codes(&w), vec![WordCode::Verb(Verb::Examine), WordCode::Object(52)]);
        assert_eq!(w[1].raw.as_deref(), Some("w3"));
    }

    #[test]
    fn test_idiom_folding_after_noise_removal() {
        let n = PhraseNormalizer::new();
        // "look the at" only becomes "look at" once the noise is gone
        let mut w = words(&[
            WordCode::Verb(Verb::Look),
            WordCode::Noise,
            WordCode::Preposition(PREP_AT),
            WordCode::Object(61),
        ]);
        n.normalize(&mut w, Room::Yours);
        assert_eq!(codes(&w), vec![WordCode::Verb(Verb::Examine), WordCode::Object(61)]);
        assert_eq!(w[0].raw.as_deref(), Some("w0 w2"));
    }

    #[test]
    fn test_repeated_matches_all_fold() {
        let n = PhraseNormalizer::new();
        let mut w = words(&[
            WordCode::Verb(Verb::Get),
            WordCode::Verb(Verb::Get),
            WordCode::Verb(Verb::Inventory),
        ]);
        n.normalize(&mut w, Room::Yours);
        assert_eq!(codes(&w), vec![WordCode::Verb(Verb::Inventory)]);
    }

    #[test]
    fn test_homonyms_depend_on_room() {
        let n = PhraseNormalizer::new();
        let barman = [WordCode::Homonym(Homonym::Barman)];
        let monk = [WordCode::Homonym(Homonym::Monk)];

        let mut w = words(&barman);
        n.normalize(&mut w, Room::NottsPub);
        assert_eq!(codes(&w), vec![WordCode::Person(People::Port)]);

        let mut w = words(&barman);
        n.normalize(&mut w, Room::ArgentPub);
        assert_eq!(codes(&w), vec![WordCode::Person(People::Malagauche)]);

        let mut w = words(&monk);
        n.normalize(&mut w, Room::AylesOffice);
        assert_eq!(codes(&w), vec![WordCode::Person(People::Ayles)]);

        let mut w = words(&monk);
        n.normalize(&mut w, Room::MusicRoom);
        assert_eq!(codes(&w), vec![WordCode::Person(People::Jacques)]);

        let mut w = words(&monk);
        n.normalize(&mut w, Room::ArgentPub);
        assert_eq!(codes(&w), vec![WordCode::Person(People::Ibythneth)]);
    }

    #[test]
    fn test_unmatched_codes_pass_through() {
        let n = PhraseNormalizer::new();
        let original = [
            WordCode::Verb(Verb::Give),
            WordCode::Object(50),
            WordCode::Preposition(PREP_TO),
            WordCode::Pronoun(Pronoun::Him),
        ];
        let mut w = words(&original);
        n.normalize(&mut w, Room::Yours);
        assert_eq!(codes(&w), original.to_vec());
    }

    /// Every sequence of up to four codes drawn from the codes the rules
    /// mention normalizes to a fixed point.
    #[test]
    fn test_normalization_is_idempotent() {
        let n = PhraseNormalizer::new();
        let rooms = [Room::Yours, Room::NottsPub, Room::AylesOffice, Room::MusicRoom];

        let mut alphabet: Vec<WordCode> = Vec::new();
        for rule in n.rules_for(Room::Yours) {
            for code in rule.pattern.iter().copied() {
                if !alphabet.contains(&code) {
                    alphabet.push(code);
                }
            }
            if let Replacement::With(code) = rule.replacement {
                if !alphabet.contains(&code) {
                    alphabet.push(code);
                }
            }
        }

        let base = alphabet.len();
        for len in 1..=4u32 {
            for mut index in 0..base.pow(len) {
                let mut seq = Vec::new();
                for _ in 0..len {
                    seq.push(alphabet[index % base]);
                    index /= base;
                }
                for room in rooms {
                    let mut once = words(&seq);
                    n.normalize(&mut once, room);
                    let mut twice = once.clone();
                    n.normalize(&mut twice, room);
                    assert_eq!(codes(&once), codes(&twice), "sequence {:?} in {:?}", seq, room);
                }
            }
        }
    }
}
