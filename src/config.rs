//! Game configuration, read from an optional TOML file

use crate::text::parser_engine::ParserConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Most objects Avvy can carry at once
    pub carry_limit: usize,
    /// Directory holding saved games
    pub save_dir: PathBuf,
    /// Fixes the drawbridge password when set
    pub seed: Option<u64>,
    /// Timer ticks that pass per command when input is not a terminal
    pub ticks_per_command: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            carry_limit: 12,
            save_dir: PathBuf::from("saves"),
            seed: None,
            ticks_per_command: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub game: GameConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error)
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads the file at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Config::from_toml(&text)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.parser.max_words, 11);
        assert_eq!(config.parser.max_input_length, 76);
        assert_eq!(config.game.carry_limit, 12);
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml("[game]\nseed = 42\ncarry_limit = 5\n").unwrap();
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.game.carry_limit, 5);
        assert_eq!(config.game.save_dir, PathBuf::from("saves"));
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(
            Config::from_toml("[game\nseed = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Path::new("/nonexistent/avalanche.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
