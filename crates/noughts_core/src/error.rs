//! Errors for invalid state data.

use crate::position::Position;
use derive_more::Display;

/// Violation of the move-log invariants.
///
/// These signal corrupt data or a programming error, never a recoverable
/// runtime fault: rejected moves are no-ops, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StateError {
    /// Cell index outside `[0, 8]`.
    #[display("Cell index {} is out of bounds", _0)]
    InvalidCell(u8),

    /// Player number other than 1 or 2.
    #[display("Invalid player number {}", _0)]
    InvalidPlayer(u8),

    /// The same cell appears more than once in a move log.
    #[display("Cell {} was played twice", _0)]
    DuplicateMove(Position),

    /// A move log longer than the board has cells.
    #[display("Move log holds {} moves, the board has 9 cells", _0)]
    OversizedLog(usize),
}

impl std::error::Error for StateError {}
