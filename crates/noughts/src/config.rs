//! Player and storage configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::PlayerId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display color for a player's marks.
///
/// Tokens rather than raw colors: the presentation layer decides what
/// each token looks like on its surface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorToken {
    /// Default color for the first player.
    Turquoise,
    /// Default color for the second player.
    Yellow,
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Magenta.
    Magenta,
}

/// Display profile for one player.
///
/// Static configuration, never persisted with game state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Name shown in the turn panel and the completion modal.
    name: String,
    /// Single-character mark drawn on the board.
    icon: char,
    /// Mark color.
    color: ColorToken,
}

impl PlayerProfile {
    /// Creates a profile.
    pub fn new(name: impl Into<String>, icon: char, color: ColorToken) -> Self {
        Self {
            name: name.into(),
            icon,
            color,
        }
    }
}

/// Application configuration, loadable from a TOML file.
///
/// Every field has a default, so the file is optional and may be
/// partial.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// The two player profiles, in play order.
    #[serde(default = "default_players")]
    players: [PlayerProfile; 2],

    /// Key the serialized state document is stored under.
    #[serde(default = "default_storage_key")]
    storage_key: String,
}

fn default_players() -> [PlayerProfile; 2] {
    [
        PlayerProfile::new("Player 1", 'X', ColorToken::Turquoise),
        PlayerProfile::new("Player 2", 'O', ColorToken::Yellow),
    ]
}

fn default_storage_key() -> String {
    "noughts".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            storage_key: default_storage_key(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(storage_key = %config.storage_key, "Config loaded");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Profile for the given player.
    pub fn profile(&self, player: PlayerId) -> &PlayerProfile {
        match player {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }
}

/// Configuration error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
