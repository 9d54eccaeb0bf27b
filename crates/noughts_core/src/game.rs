//! Derived game state: completion, winner, and turn order from a move log.

use crate::player::PlayerId;
use crate::position::Position;
use crate::state::CompletedGame;
use tracing::instrument;

/// The 8 winning lines, scanned in fixed order: rows, columns, diagonals.
pub const WINNING_TRIPLES: [[Position; 3]; 8] = {
    use Position::*;
    [
        [TopLeft, TopCenter, TopRight],
        [MiddleLeft, Center, MiddleRight],
        [BottomLeft, BottomCenter, BottomRight],
        [TopLeft, MiddleLeft, BottomLeft],
        [TopCenter, Center, BottomCenter],
        [TopRight, MiddleRight, BottomRight],
        [TopLeft, Center, BottomRight],
        [TopRight, Center, BottomLeft],
    ]
};

/// Game state derived from a move log.
///
/// Total over any valid log; the caller guarantees cell uniqueness and
/// bounds (see `GameState::validate`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// True when the board is full or a player completed a triple.
    pub is_complete: bool,
    /// Player who made the most recent move; `None` on an empty board.
    pub last_player: Option<PlayerId>,
    /// Player to move next.
    pub next_player: PlayerId,
    /// Winning player, if any.
    pub winner: Option<PlayerId>,
    /// The move log the game was derived from.
    pub moves: Vec<Position>,
}

impl Game {
    /// Cells played by the given player, in play order.
    pub fn moves_of(&self, player: PlayerId) -> Vec<Position> {
        let parity = match player {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        };
        self.moves
            .iter()
            .enumerate()
            .filter_map(|(turn, position)| (turn % 2 == parity).then_some(*position))
            .collect()
    }

    /// Freezes this game into an archive entry.
    pub fn archive(&self) -> CompletedGame {
        CompletedGame {
            is_complete: self.is_complete,
            winner: self.winner,
            moves: self.moves.clone(),
        }
    }
}

/// Derives completion, winner, and turn order from a move log.
///
/// Only the most recent mover is scanned against the winning triples:
/// nobody else can have completed one on this turn.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn derive(moves: &[Position]) -> Game {
    let last_player = moves.len().checked_sub(1).map(PlayerId::from_parity);
    let next_player = PlayerId::from_parity(moves.len());

    let mut winner = None;
    // A win takes at least five moves: three for one player, two for the other.
    if let Some(last) = last_player
        && moves.len() >= 5
    {
        let parity = (moves.len() - 1) % 2;
        let cells: Vec<Position> = moves
            .iter()
            .enumerate()
            .filter_map(|(turn, position)| (turn % 2 == parity).then_some(*position))
            .collect();

        for triple in &WINNING_TRIPLES {
            if triple.iter().all(|cell| cells.contains(cell)) {
                winner = Some(last);
                break;
            }
        }
    }

    Game {
        is_complete: moves.len() == 9 || winner.is_some(),
        last_player,
        next_player,
        winner,
        moves: moves.to_vec(),
    }
}
