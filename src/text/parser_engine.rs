//! Input parser: tokenizer, resolver, normalizer, pronouns and grammar in one pass

use crate::text::grammar::{self, GrammarResult};
use crate::text::normalizer::PhraseNormalizer;
use crate::text::reference::{resolve_pronouns, DiscourseContext, PronounResolution};
use crate::text::resolver::{resolve, AlsoTable, Word};
use crate::text::tokenizer::tokenize;
use crate::text::vocabulary::{Vocabulary, WordCode};
use crate::world::Room;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Parser configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Words beyond this many are resolved but their text is not kept
    pub max_words: usize,

    /// Longest line the line editor accepts
    pub max_input_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_words: 11,
            max_input_length: 76,
        }
    }
}

/// A command ready for the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub grammar: GrammarResult,
    /// Retained words as typed, in order
    pub raw_words: Vec<String>,
    /// Who or what each pronoun turned out to mean
    pub echoes: Vec<String>,
}

/// Result of parsing user input
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Blank line; nothing changes
    Nothing,
    Command(Command),
    /// A pronoun had nothing to refer to; the command is dropped
    NeedsDisambiguation(Vec<&'static str>),
    /// An unknown word outside the tolerant verbs; the command is dropped
    NotUnderstood(String),
}

#[derive(Debug, Clone)]
pub struct ParserEngine {
    pub vocabulary: Vocabulary,
    pub normalizer: PhraseNormalizer,
    pub config: ParserConfig,

    /// Output of the last non-blank parse
    pub grammar: GrammarResult,
}

impl ParserEngine {
    pub fn new(config: ParserConfig) -> Result<Self, String> {
        Ok(ParserEngine {
            vocabulary: Vocabulary::new()?,
            normalizer: PhraseNormalizer::new(),
            config,
            grammar: GrammarResult::default(),
        })
    }

    pub fn parse(
        &mut self,
        input: &str,
        room: Room,
        also: &AlsoTable,
        discourse: &mut DiscourseContext,
    ) -> ParseResult {
        if input.trim().is_empty() {
            debug!("Blank input, nothing to do");
            return ParseResult::Nothing;
        }

        self.grammar = GrammarResult::default();

        let mut unknown: Option<String> = None;
        let mut words = Vec::new();
        for (index, token) in tokenize(input).enumerate() {
            let code = resolve(&token.matched, also, &self.vocabulary);
            if code == WordCode::Unknown && unknown.is_none() {
                unknown = Some(token.display.clone());
            }
            let raw = if index < self.config.max_words {
                Some(token.display)
            } else {
                None
            };
            words.push(Word::new(code, raw));
        }
        debug!("Resolved: {:?}", codes(&words));

        self.normalizer.normalize(&mut words, room);
        debug!("Normalized: {:?}", codes(&words));

        let echoes = match resolve_pronouns(&mut words, discourse) {
            PronounResolution::Resolved(echoes) => echoes,
            PronounResolution::NeedsDisambiguation(prompts) => {
                return ParseResult::NeedsDisambiguation(prompts)
            }
        };

        let result = grammar::extract(&mut words);
        self.grammar = result.clone();
        discourse.remember(&result);

        if let Some(word) = unknown {
            let tolerated = result.verb.map_or(false, |v| v.tolerates_unknown_words());
            if !tolerated {
                debug!("Unknown word '{}' with verb {:?}", word, result.verb);
                return ParseResult::NotUnderstood(format!(
                    "Sorry, but I have no idea what \"{}\" means. Can you rephrase it?",
                    word
                ));
            }
        }

        info!("Parsed '{}' as {:?}", input.trim(), result);
        ParseResult::Command(Command {
            grammar: result,
            raw_words: tokenize(input)
                .take(self.config.max_words)
                .map(|t| t.display)
                .collect(),
            echoes,
        })
    }
}

fn codes(words: &[Word]) -> Vec<u8> {
    words.iter().map(|w| w.code.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::vocabulary::Verb;
    use crate::world::People;

    fn engine() -> ParserEngine {
        ParserEngine::new(ParserConfig::default()).unwrap()
    }

    fn parse(engine: &mut ParserEngine, input: &str, discourse: &mut DiscourseContext) -> ParseResult {
        engine.parse(input, Room::ArgentPub, &AlsoTable::new(), discourse)
    }

    #[test]
    fn test_blank_input_keeps_previous_result() {
        let mut e = engine();
        let mut d = DiscourseContext::new();
        parse(&mut e, "examine wine", &mut d);
        let before = e.grammar.clone();

        assert_eq!(parse(&mut e, "   ", &mut d), ParseResult::Nothing);
        assert_eq!(parse(&mut e, "", &mut d), ParseResult::Nothing);
        assert_eq!(e.grammar, before);
    }

    #[test]
    fn test_simple_command() {
        let mut e = engine();
        let mut d = DiscourseContext::new();
        match parse(&mut e, "give the wine to crapulus", &mut d) {
            ParseResult::Command(cmd) => {
                assert_eq!(cmd.grammar.verb, Some(Verb::Give));
                assert_eq!(cmd.grammar.thing, Some(50));
                assert_eq!(cmd.grammar.person, Some(People::Crapulus));
                assert_eq!(cmd.raw_words, vec!["give", "the", "wine", "to", "crapulus"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_word_message_names_first_unknown() {
        let mut e = engine();
        let mut d = DiscourseContext::new();
        assert_eq!(
            parse(&mut e, "get Frobozz zorkmid", &mut d),
            ParseResult::NotUnderstood(
                "Sorry, but I have no idea what \"Frobozz\" means. Can you rephrase it?"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_raw_words_are_capped() {
        let mut e = ParserEngine::new(ParserConfig {
            max_words: 2,
            ..Default::default()
        })
        .unwrap();
        let mut d = DiscourseContext::new();
        match parse(&mut e, "look at the bell", &mut d) {
            ParseResult::Command(cmd) => {
                assert_eq!(cmd.raw_words, vec!["look", "at"]);
                assert_eq!(cmd.grammar.verb, Some(Verb::Examine));
                assert_eq!(cmd.grammar.thing, Some(61));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_barman_in_argent_pub() {
        let mut e = engine();
        let mut d = DiscourseContext::new();
        match parse(&mut e, "talk to the barman", &mut d) {
            ParseResult::Command(cmd) => {
                assert_eq!(cmd.grammar.person, Some(People::Malagauche));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(d.him, Some(People::Malagauche));
    }
}
