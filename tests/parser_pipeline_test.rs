//! Whole-line parses through tokenizer, resolver, normalizer, pronouns and grammar

use avalanche::text::parser_engine::{ParseResult, ParserConfig, ParserEngine};
use avalanche::text::reference::DiscourseContext;
use avalanche::text::vocabulary::{Verb, WordCode};
use avalanche::world::{People, Room, World};
use test_log::test;

struct Harness {
    parser: ParserEngine,
    world: World,
    discourse: DiscourseContext,
    room: Room,
}

impl Harness {
    fn new(room: Room) -> Self {
        Harness {
            parser: ParserEngine::new(ParserConfig::default()).unwrap(),
            world: World::new(),
            discourse: DiscourseContext::new(),
            room,
        }
    }

    fn parse(&mut self, line: &str) -> ParseResult {
        let also = self.world.also_table(self.room);
        self.parser
            .parse(line, self.room, &also, &mut self.discourse)
    }
}

#[test]
fn test_first_verb_wins() {
    let mut h = Harness::new(Room::Yours);
    match h.parse("examine the sword the take the bell") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Examine));
            // The bell comes last, so it is the main object
            assert_eq!(command.grammar.thing, Some(61));
            assert_eq!(command.grammar.thing2, Some(52));
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_last_object_wins() {
    let mut h = Harness::new(Room::Yours);
    match h.parse("give wine bell") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.thing, Some(61));
            assert_eq!(command.grammar.thing2, Some(50));
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_pronoun_round_trip_through_him() {
    let mut h = Harness::new(Room::OutsideYours);
    assert!(matches!(h.parse("talk to crapulus"), ParseResult::Command(_)));
    assert_eq!(h.discourse.him, Some(People::Crapulus));

    match h.parse("give the wine to him") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Give));
            assert_eq!(command.grammar.person, Some(People::Crapulus));
            assert_eq!(command.grammar.thing, Some(50));
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_pronoun_with_nothing_to_refer_to() {
    let mut h = Harness::new(Room::Yours);
    assert_eq!(
        h.parse("kiss her"),
        ParseResult::NeedsDisambiguation(vec!["Whom?"])
    );
    assert_eq!(
        h.parse("examine it"),
        ParseResult::NeedsDisambiguation(vec!["What?"])
    );
}

#[test]
fn test_save_tolerates_unknown_words() {
    let mut h = Harness::new(Room::Yours);
    match h.parse("save Before the xyzzy") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Save));
            assert_eq!(command.raw_words, vec!["save", "Before", "the", "xyzzy"]);
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_examine_rejects_unknown_words() {
    let mut h = Harness::new(Room::Yours);
    match h.parse("examine the xyzzy") {
        ParseResult::NotUnderstood(message) => assert!(message.contains("\"xyzzy\"")),
        other => panic!("expected a refusal, got {:?}", other),
    }
}

#[test]
fn test_verbless_line_rejects_unknown_words() {
    let mut h = Harness::new(Room::Yours);
    assert!(matches!(h.parse("plugh"), ParseResult::NotUnderstood(_)));
}

#[test]
fn test_empty_input_keeps_previous_outputs() {
    let mut h = Harness::new(Room::Yours);
    assert!(matches!(h.parse("examine bell"), ParseResult::Command(_)));
    let before = h.parser.grammar.clone();
    let discourse = h.discourse.clone();

    assert_eq!(h.parse(""), ParseResult::Nothing);
    assert_eq!(h.parse("    "), ParseResult::Nothing);
    assert_eq!(h.parser.grammar, before);
    assert_eq!(h.discourse, discourse);
}

#[test]
fn test_look_at_folds_to_examine() {
    let mut h = Harness::new(Room::Yours);
    match h.parse("look at the bell") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Examine));
            assert_eq!(command.grammar.thing, Some(61));
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_swearing_acts_as_a_verb() {
    let mut h = Harness::new(Room::Yours);
    let word = h.parser.vocabulary.entries().iter().find(|e| e.code == WordCode::Swear);
    let word = word.expect("vocabulary has swear words").word.to_lowercase();
    match h.parse(&word) {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Expletive))
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_bound_pronoun_echoes_its_referent() {
    let mut h = Harness::new(Room::OutsideYours);
    assert!(matches!(h.parse("kiss crapulus"), ParseResult::Command(_)));

    match h.parse("give wine to him") {
        ParseResult::Command(command) => {
            assert_eq!(command.echoes, vec!["Crapulus".to_string()]);
            assert_eq!(command.grammar.person, Some(People::Crapulus));
        }
        other => panic!("expected a command, got {:?}", other),
    }

    // No pronoun, no echo
    match h.parse("give wine to crapulus") {
        ParseResult::Command(command) => assert!(command.echoes.is_empty()),
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_pronoun_round_trip_through_her() {
    let mut h = Harness::new(Room::Yours);
    assert!(matches!(h.parse("kiss arkata"), ParseResult::Command(_)));
    assert_eq!(h.discourse.her, Some(People::Arkata));
    assert_eq!(h.discourse.him, None);

    match h.parse("kiss her") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Kiss));
            assert_eq!(command.grammar.person, Some(People::Arkata));
            assert_eq!(command.echoes, vec!["Arkata".to_string()]);
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_barman_means_the_local_landlord() {
    let mut h = Harness::new(Room::NottsPub);
    match h.parse("talk to the barman") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Talk));
            assert_eq!(command.grammar.person, Some(People::Port));
        }
        other => panic!("expected a command, got {:?}", other),
    }

    let mut h = Harness::new(Room::ArgentPub);
    match h.parse("talk to the barman") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.person, Some(People::Malagauche))
        }
        other => panic!("expected a command, got {:?}", other),
    }
}

#[test]
fn test_monk_means_the_local_monk() {
    let mut h = Harness::new(Room::AylesOffice);
    match h.parse("wake the monk") {
        ParseResult::Command(command) => {
            assert_eq!(command.grammar.verb, Some(Verb::Wake));
            assert_eq!(command.grammar.person, Some(People::Ayles));
        }
        other => panic!("expected a command, got {:?}", other),
    }
}
