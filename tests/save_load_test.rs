//! SAVE, LOAD and DIR through the game, against memory and file persistence

use avalanche::config::Config;
use avalanche::display::HeadlessDisplay;
use avalanche::engine::Game;
use avalanche::persistence::{FilePersistence, MemoryPersistence, Persistence};
use avalanche::scheduler::Reason;
use avalanche::world::{Item, Room};
use std::fs;
use std::path::PathBuf;
use test_log::test;

fn game_with<P: Persistence>(persistence: P) -> Game<HeadlessDisplay, P> {
    let mut config = Config::default();
    config.game.seed = Some(3);
    let mut game = Game::new(config, HeadlessDisplay::new(), persistence).unwrap();
    game.state.avvy_is_awake = true;
    game.state.avvy_in_bed = false;
    game
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("avalanche-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_save_keeps_unknown_words_as_description() {
    let mut game = game_with(MemoryPersistence::new());
    game.handle_line("save Before the Quixotic bridge").unwrap();

    let slots = game.persistence.list_save_slots().unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].slot, 1);
    assert_eq!(slots[0].description, "Before the Quixotic bridge");
    assert!(game.display.contains("slot 1"));
}

#[test]
fn test_saving_under_the_same_name_reuses_the_slot() {
    let mut game = game_with(MemoryPersistence::new());
    game.handle_line("save first").unwrap();
    game.handle_line("save second").unwrap();
    game.handle_line("save FIRST").unwrap();

    let slots = game.persistence.list_save_slots().unwrap();
    assert_eq!(slots.len(), 2);
}

#[test]
fn test_load_restores_state_and_forgets_timers() {
    let mut game = game_with(MemoryPersistence::new());
    game.handle_line("save bedroom").unwrap();
    let saved = game.state.clone();

    game.state.room = Room::ArgentRoad;
    game.state.give_item(Item::Wine);
    game.state.score = 40;
    game.handle_line("load bedroom").unwrap();

    assert!(game.display.contains("Game restored."));
    assert_eq!(game.state.room, Room::Yours);
    assert!(!game.state.holds(Item::Wine));
    assert_eq!(game.state.score, saved.score);
    assert!(!game.timers.is_pending(Reason::ArkataShouts));
}

#[test]
fn test_load_by_number_and_latest() {
    let mut game = game_with(MemoryPersistence::new());
    game.handle_line("save one").unwrap();
    game.state.money = 5;
    game.handle_line("save two").unwrap();
    game.state.money = 99;

    game.handle_line("load 1").unwrap();
    assert_ne!(game.state.money, 5);

    game.handle_line("load").unwrap();
    assert_eq!(game.state.money, 5);
}

#[test]
fn test_nothing_to_load() {
    let mut game = game_with(MemoryPersistence::new());
    game.handle_line("load").unwrap();
    assert_eq!(game.display.last_text(), Some("There are no saved games."));

    game.handle_line("save here").unwrap();
    game.handle_line("load elsewhere").unwrap();
    assert!(game.display.contains("There's no saved game called \"elsewhere\"."));
}

#[test]
fn test_dir_lists_slots() {
    let mut game = game_with(MemoryPersistence::new());
    game.handle_line("save in bed").unwrap();
    game.handle_line("save at the pub").unwrap();
    game.handle_line("dir").unwrap();

    let listing = game.display.last_text().unwrap_or_default().to_string();
    assert!(listing.starts_with("Saved games:"));
    assert!(listing.contains("  1: in bed"));
    assert!(listing.contains("  2: at the pub"));
}

#[test]
fn test_saves_survive_a_new_session() {
    let dir = temp_dir("sessions");

    let mut game = game_with(FilePersistence::new(&dir));
    game.state.give_item(Item::Onion);
    game.handle_line("save with onion").unwrap();
    drop(game);

    let mut game = game_with(FilePersistence::new(&dir));
    assert!(!game.state.holds(Item::Onion));
    game.handle_line("load with onion").unwrap();
    assert!(game.state.holds(Item::Onion));

    let _ = fs::remove_dir_all(&dir);
}
