//! Saved-game storage
//!
//! The dispatcher only sees the [`Persistence`] trait. [`FilePersistence`]
//! keeps one TOML record per slot on disk; [`MemoryPersistence`] keeps them in
//! a map and is what the tests use.

pub mod save_file;

pub use self::save_file::*;

use crate::world::GameState;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// A saved game as listed to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    pub slot: u32,
    pub description: String,
}

pub trait Persistence {
    /// Every saved game, in slot order
    fn list_save_slots(&self) -> Result<Vec<SaveSlot>, PersistenceError>;

    /// Writes `state` to `slot`, replacing what was there
    fn save(&mut self, slot: u32, description: &str, state: &GameState)
        -> Result<(), PersistenceError>;

    /// Reads `slot`; `None` when nothing is saved there
    fn load(&self, slot: u32) -> Result<Option<GameState>, PersistenceError>;
}

#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    /// A record that could not be encoded or decoded
    Format(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "Save file error: {}", e),
            PersistenceError::Format(msg) => write!(f, "Save file error: {}", msg),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(error: std::io::Error) -> Self {
        PersistenceError::Io(error)
    }
}

impl From<toml::de::Error> for PersistenceError {
    fn from(error: toml::de::Error) -> Self {
        PersistenceError::Format(error.to_string())
    }
}

impl From<toml::ser::Error> for PersistenceError {
    fn from(error: toml::ser::Error) -> Self {
        PersistenceError::Format(error.to_string())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPersistence {
    slots: BTreeMap<u32, (String, GameState)>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryPersistence {
    fn list_save_slots(&self) -> Result<Vec<SaveSlot>, PersistenceError> {
        Ok(self
            .slots
            .iter()
            .map(|(slot, (description, _))| SaveSlot {
                slot: *slot,
                description: description.clone(),
            })
            .collect())
    }

    fn save(
        &mut self,
        slot: u32,
        description: &str,
        state: &GameState,
    ) -> Result<(), PersistenceError> {
        debug!("Saving slot {} in memory", slot);
        self.slots
            .insert(slot, (description.to_string(), state.clone()));
        Ok(())
    }

    fn load(&self, slot: u32) -> Result<Option<GameState>, PersistenceError> {
        Ok(self.slots.get(&slot).map(|(_, state)| state.clone()))
    }
}

/// The slot a new save called `description` goes into: the slot already
/// holding that description, or one past the highest slot in use
pub fn slot_for(slots: &[SaveSlot], description: &str) -> u32 {
    slots
        .iter()
        .find(|s| s.description.eq_ignore_ascii_case(description))
        .map(|s| s.slot)
        .unwrap_or_else(|| slots.iter().map(|s| s.slot).max().unwrap_or(0) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut p = MemoryPersistence::new();
        let mut state = GameState::new_game(0);
        state.score = 12;
        p.save(2, "before the bridge", &state).unwrap();

        assert_eq!(p.load(2).unwrap(), Some(state));
        assert_eq!(p.load(3).unwrap(), None);
        assert_eq!(
            p.list_save_slots().unwrap(),
            vec![SaveSlot {
                slot: 2,
                description: "before the bridge".to_string()
            }]
        );
    }

    #[test]
    fn test_slot_for_reuses_matching_description() {
        let slots = vec![
            SaveSlot {
                slot: 1,
                description: "Pub".to_string(),
            },
            SaveSlot {
                slot: 4,
                description: "Bridge".to_string(),
            },
        ];
        assert_eq!(slot_for(&slots, "pub"), 1);
        assert_eq!(slot_for(&slots, "castle"), 5);
        assert_eq!(slot_for(&[], "castle"), 1);
    }
}
