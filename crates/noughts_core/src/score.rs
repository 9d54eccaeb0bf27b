//! Score aggregation over the round history.

use crate::player::PlayerId;
use crate::state::CompletedGame;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Win and tie counts for the current round.
///
/// Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    /// Games won by player one.
    pub player1_wins: usize,
    /// Games won by player two.
    pub player2_wins: usize,
    /// Games with no winner.
    pub ties: usize,
}

/// Folds the round history into win and tie counts.
///
/// Ties are the remainder: archived games without a winner.
#[instrument(skip(history), fields(games = history.len()))]
pub fn tally(history: &[CompletedGame]) -> Scores {
    let player1_wins = history
        .iter()
        .filter(|game| game.winner == Some(PlayerId::One))
        .count();
    let player2_wins = history
        .iter()
        .filter(|game| game.winner == Some(PlayerId::Two))
        .count();

    Scores {
        player1_wins,
        player2_wins,
        ties: history.len() - player1_wins - player2_wins,
    }
}
