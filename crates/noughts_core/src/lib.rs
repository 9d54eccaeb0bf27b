//! Pure noughts-and-crosses game logic.
//!
//! The single source of truth is an append-only move log; everything else
//! is derived from it by pure functions:
//!
//! - **State**: [`GameState`] holds the live move log plus the archived
//!   round history. Lifecycle transitions are copy-on-write: each returns
//!   a fresh snapshot, so consumers can diff old against new.
//! - **Deriver**: [`derive`] computes completion, winner, and turn order
//!   from a move log.
//! - **Scores**: [`tally`] folds the round history into win/tie counts.
//!
//! Nothing in this crate does I/O; persistence and presentation live in
//! the application crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod player;
mod position;
mod score;
mod state;

pub use error::StateError;
pub use game::{Game, WINNING_TRIPLES, derive};
pub use player::PlayerId;
pub use position::Position;
pub use score::{Scores, tally};
pub use state::{CompletedGame, GameState};
