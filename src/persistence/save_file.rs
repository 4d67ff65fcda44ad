//! Saved games on disk, one TOML file per slot
//!
//! Each file carries a format version so a record written by an incompatible
//! build is refused instead of half-loaded.

use crate::persistence::{Persistence, PersistenceError, SaveSlot};
use crate::world::GameState;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAVE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub slot: u32,
    pub description: String,
    pub state: GameState,
}

pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FilePersistence { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: u32) -> PathBuf {
        self.dir.join(format!("slot-{:03}.toml", slot))
    }

    fn read_record(path: &Path) -> Result<SaveRecord, PersistenceError> {
        let text = fs::read_to_string(path)?;
        let record: SaveRecord = toml::from_str(&text)?;
        if record.version != SAVE_FORMAT_VERSION {
            return Err(PersistenceError::Format(format!(
                "{:?} has format version {}, expected {}",
                path, record.version, SAVE_FORMAT_VERSION
            )));
        }
        Ok(record)
    }
}

fn slot_from_file_name(name: &str) -> Option<u32> {
    name.strip_prefix("slot-")?
        .strip_suffix(".toml")?
        .parse()
        .ok()
}

impl Persistence for FilePersistence {
    fn list_save_slots(&self) -> Result<Vec<SaveSlot>, PersistenceError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut slots = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let slot = match path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(slot_from_file_name)
            {
                Some(slot) => slot,
                None => continue,
            };
            match Self::read_record(&path) {
                Ok(record) => slots.push(SaveSlot {
                    slot,
                    description: record.description,
                }),
                Err(e) => warn!("Skipping unreadable save {:?}: {}", path, e),
            }
        }
        slots.sort_by_key(|s| s.slot);
        debug!("Found {} saved games in {:?}", slots.len(), self.dir);
        Ok(slots)
    }

    fn save(
        &mut self,
        slot: u32,
        description: &str,
        state: &GameState,
    ) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let record = SaveRecord {
            version: SAVE_FORMAT_VERSION,
            slot,
            description: description.to_string(),
            state: state.clone(),
        };
        let text = toml::to_string(&record)?;
        let path = self.slot_path(slot);
        fs::write(&path, text)?;
        info!("Saved game to {:?}", path);
        Ok(())
    }

    fn load(&self, slot: u32) -> Result<Option<GameState>, PersistenceError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let record = Self::read_record(&path)?;
        info!("Loaded game from {:?}", path);
        Ok(Some(record.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "avalanche-save-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_slot_file_names() {
        assert_eq!(slot_from_file_name("slot-007.toml"), Some(7));
        assert_eq!(slot_from_file_name("slot-x.toml"), None);
        assert_eq!(slot_from_file_name("notes.txt"), None);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = temp_dir("round-trip");
        let mut p = FilePersistence::new(&dir);
        assert!(p.list_save_slots().unwrap().is_empty());

        let mut state = GameState::new_game(5);
        state.money = 17;
        state.discourse.it = Some(52);
        p.save(3, "in the pub", &state).unwrap();

        assert_eq!(p.load(3).unwrap(), Some(state));
        assert_eq!(p.load(4).unwrap(), None);
        assert_eq!(p.list_save_slots().unwrap()[0].description, "in the pub");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_wrong_version_is_refused() {
        let dir = temp_dir("version");
        let mut p = FilePersistence::new(&dir);
        p.save(1, "old", &GameState::new_game(0)).unwrap();

        let path = dir.join("slot-001.toml");
        let text = fs::read_to_string(&path).unwrap();
        fs::write(&path, text.replacen("version = 1", "version = 99", 1)).unwrap();

        assert!(matches!(p.load(1), Err(PersistenceError::Format(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
