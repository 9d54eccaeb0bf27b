//! Player identity.

use crate::error::StateError;
use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Identity only: names, icons, and colors are display configuration and
/// live with the presentation layer. Serialization goes through the
/// 1-based player number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PlayerId {
    /// First player; acts on even turn indices.
    One,
    /// Second player; acts on odd turn indices.
    Two,
}

impl PlayerId {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based player number, as persisted.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Player acting at the given turn index.
    pub fn from_parity(turn: usize) -> Self {
        if turn % 2 == 0 {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.number()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            _ => Err(StateError::InvalidPlayer(value)),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
