//! Pronoun registers and their resolution

use crate::text::grammar::GrammarResult;
use crate::text::resolver::Word;
use crate::text::vocabulary::{Pronoun, WordCode};
use crate::world::{Item, People};
use log::debug;
use serde::{Deserialize, Serialize};

/// What "him", "her" and "it" currently refer to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscourseContext {
    pub him: Option<People>,
    pub her: Option<People>,
    /// Unslipped object code
    pub it: Option<u8>,
}

impl DiscourseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the operands of a successfully extracted command
    pub fn remember(&mut self, grammar: &GrammarResult) {
        if let Some(thing) = grammar.thing {
            self.it = Some(thing);
        }
        if let Some(person) = grammar.person {
            if person.is_female() {
                self.her = Some(person);
            } else {
                self.him = Some(person);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PronounResolution {
    /// Names of the referents, one per pronoun, for echoing back as `{ Name }`
    Resolved(Vec<String>),
    /// One prompt per pronoun that had nothing to refer to
    NeedsDisambiguation(Vec<&'static str>),
}

/// Replaces every pronoun in place with the register it names
pub fn resolve_pronouns(words: &mut [Word], context: &DiscourseContext) -> PronounResolution {
    let mut prompts = Vec::new();
    let mut echoes = Vec::new();

    for word in words.iter_mut() {
        let pronoun = match word.code {
            WordCode::Pronoun(p) => p,
            _ => continue,
        };

        let replacement = match pronoun {
            Pronoun::Him => context.him.map(WordCode::Person),
            Pronoun::Her => context.her.map(WordCode::Person),
            Pronoun::It => context.it.map(WordCode::Object),
        };

        match replacement {
            Some(code) => {
                debug!("{:?} resolved to {:?}", pronoun, code);
                word.code = code;
                if let Some(name) = referent_name(code) {
                    echoes.push(name);
                }
            }
            None => prompts.push(match pronoun {
                Pronoun::Him | Pronoun::Her => "Whom?",
                Pronoun::It => "What?",
            }),
        }
    }

    if prompts.is_empty() {
        PronounResolution::Resolved(echoes)
    } else {
        PronounResolution::NeedsDisambiguation(prompts)
    }
}

fn referent_name(code: WordCode) -> Option<String> {
    match code {
        WordCode::Person(person) => Some(person.name().to_string()),
        WordCode::Object(code) => Item::from_word_code(code).map(|i| i.description().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::vocabulary::Verb;

    fn word(code: WordCode) -> Word {
        Word::new(code, None)
    }

    #[test]
    fn test_remember_splits_by_sex() {
        let mut context = DiscourseContext::new();
        context.remember(&GrammarResult {
            person: Some(People::Crapulus),
            thing: Some(50),
            ..Default::default()
        });
        context.remember(&GrammarResult {
            person: Some(People::Geida),
            ..Default::default()
        });

        assert_eq!(context.him, Some(People::Crapulus));
        assert_eq!(context.her, Some(People::Geida));
        assert_eq!(context.it, Some(50));
    }

    #[test]
    fn test_pronouns_are_substituted() {
        let context = DiscourseContext {
            him: Some(People::Spludwick),
            her: None,
            it: Some(67),
        };
        let mut words = vec![
            word(WordCode::Verb(Verb::Give)),
            word(WordCode::Pronoun(Pronoun::It)),
            word(WordCode::Pronoun(Pronoun::Him)),
        ];

        assert_eq!(
            resolve_pronouns(&mut words, &context),
            PronounResolution::Resolved(vec!["an onion".to_string(), "Spludwick".to_string()])
        );
        assert_eq!(words[1].code, WordCode::Object(67));
        assert_eq!(words[2].code, WordCode::Person(People::Spludwick));
    }

    #[test]
    fn test_empty_registers_ask_for_clarification() {
        let context = DiscourseContext::new();
        let mut words = vec![
            word(WordCode::Verb(Verb::Kiss)),
            word(WordCode::Pronoun(Pronoun::Her)),
            word(WordCode::Pronoun(Pronoun::It)),
        ];

        assert_eq!(
            resolve_pronouns(&mut words, &context),
            PronounResolution::NeedsDisambiguation(vec!["Whom?", "What?"])
        );
    }
}
