use avalanche::text::resolver::{resolve, AlsoTable};
use avalanche::text::vocabulary::{Vocabulary, WordCode};
use avalanche::world::{Room, World};
use std::env;

fn kind(code: WordCode) -> String {
    match code {
        WordCode::Verb(v) => format!("verb {:?}", v),
        WordCode::Object(c) => format!("object {}", c),
        WordCode::Person(p) => format!("person {:?}", p),
        WordCode::Pronoun(p) => format!("pronoun {:?}", p),
        WordCode::Homonym(h) => format!("homonym {:?}", h),
        WordCode::Preposition(c) => format!("preposition {}", c),
        other => format!("{:?}", other).to_lowercase(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let vocabulary = Vocabulary::new()?;
    let words: Vec<String> = env::args().skip(1).map(|w| w.to_uppercase()).collect();

    if words.is_empty() {
        println!("Avalanche vocabulary ({} entries)\n", vocabulary.entries().len());
        for entry in vocabulary.entries() {
            println!("{:>3}  {:<12} {}", entry.code.code(), entry.word, kind(entry.code));
        }
        return Ok(());
    }

    // Words given on the command line are resolved as if typed in Avvy's bedroom
    let world = World::new();
    let also: AlsoTable = world.also_table(Room::Yours);
    for word in words.iter() {
        let code = resolve(word, &also, &vocabulary);
        println!("{:<12} -> {:>3}  {}", word, code.code(), kind(code));
    }
    Ok(())
}
