//! Board positions for the 3x3 grid.

use crate::error::StateError;
use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// Cells map to row-major indices:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
///
/// Serialization goes through the numeric index, so a persisted move is
/// an integer in `[0, 8]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    /// Top-left (index 0).
    TopLeft,
    /// Top-center (index 1).
    TopCenter,
    /// Top-right (index 2).
    TopRight,
    /// Middle-left (index 3).
    MiddleLeft,
    /// Center (index 4).
    Center,
    /// Middle-right (index 5).
    MiddleRight,
    /// Bottom-left (index 6).
    BottomLeft,
    /// Bottom-center (index 7).
    BottomCenter,
    /// Bottom-right (index 8).
    BottomRight,
}

impl Position {
    /// Row-major index in `[0, 8]`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Row on the board (0-2).
    pub fn row(self) -> u8 {
        self.index() / 3
    }

    /// Column on the board (0-2).
    pub fn col(self) -> u8 {
        self.index() % 3
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Center => "center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.index()
    }
}

impl TryFrom<u8> for Position {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let position = match value {
            0 => Position::TopLeft,
            1 => Position::TopCenter,
            2 => Position::TopRight,
            3 => Position::MiddleLeft,
            4 => Position::Center,
            5 => Position::MiddleRight,
            6 => Position::BottomLeft,
            7 => Position::BottomCenter,
            8 => Position::BottomRight,
            _ => return Err(StateError::InvalidCell(value)),
        };
        Ok(position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
