//! Game state snapshots and lifecycle transitions.

use crate::error::StateError;
use crate::game;
use crate::player::PlayerId;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A finished game archived into the round history.
///
/// Immutable once archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGame {
    /// Completion flag at the time of archiving; archived games are
    /// always complete, the field is kept for the wire format.
    pub is_complete: bool,
    /// Winning player; `None` for a tie.
    pub winner: Option<PlayerId>,
    /// The full move log of the game.
    pub moves: Vec<Position>,
}

/// Complete application state: the live move log plus archived history.
///
/// Snapshots are immutable by convention; every transition returns a
/// fresh value and leaves the receiver untouched, so consumers can diff
/// old against new. On the wire this is a single camelCase JSON document:
///
/// ```text
/// {"currentGameMoves":[4,0],"roundHistory":[],"allHistory":[]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Moves of the game in progress, in play order.
    pub current_game_moves: Vec<Position>,
    /// Games completed since the last new round.
    pub round_history: Vec<CompletedGame>,
    /// Round histories archived by previous new rounds.
    pub all_history: Vec<Vec<CompletedGame>>,
}

impl GameState {
    /// Returns a snapshot with `position` appended, or `None` when the
    /// cell was already played. Callers treat `None` as a no-op, which
    /// makes repeated identical input idempotent.
    #[instrument(skip(self))]
    pub fn with_move(&self, position: Position) -> Option<Self> {
        if self.current_game_moves.contains(&position) {
            debug!(cell = position.index(), "Cell already played, rejecting move");
            return None;
        }
        let mut next = self.clone();
        next.current_game_moves.push(position);
        Some(next)
    }

    /// Ends the game in progress.
    ///
    /// A complete game is archived into the round history; an incomplete
    /// one is discarded. The move log is cleared either way.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Self {
        let mut next = self.clone();
        let current = game::derive(&self.current_game_moves);
        if current.is_complete {
            debug!(winner = ?current.winner, "Archiving completed game");
            next.round_history.push(current.archive());
        }
        next.current_game_moves.clear();
        next
    }

    /// Ends the current round: performs a reset, then moves the round
    /// history wholesale (even when empty) into the long-term archive.
    #[instrument(skip(self))]
    pub fn new_round(&self) -> Self {
        let mut next = self.reset();
        let finished = std::mem::take(&mut next.round_history);
        next.all_history.push(finished);
        next
    }

    /// Checks the move-log invariants: at most nine moves, no cell twice.
    ///
    /// A violation is a programming error or corrupt data, not a runtime
    /// condition the transitions above can produce.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.current_game_moves.len() > 9 {
            return Err(StateError::OversizedLog(self.current_game_moves.len()));
        }
        for (i, position) in self.current_game_moves.iter().enumerate() {
            if self.current_game_moves[..i].contains(position) {
                return Err(StateError::DuplicateMove(*position));
            }
        }
        Ok(())
    }
}
