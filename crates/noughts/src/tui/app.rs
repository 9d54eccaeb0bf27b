//! Application state and key handling.

use super::input;
use crossterm::event::KeyCode;
use noughts_core::{Game, Position, Scores};

/// Typed intent emitted by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play the cell under the cursor.
    Move(Position),
    /// Reset the game, archiving it when complete.
    Reset,
    /// Start a new round.
    NewRound,
    /// Leave the application.
    Quit,
}

/// Snapshot-holding application state.
///
/// Holds the most recent derived game and scores, rebuilt from the store
/// after every change notification.
pub struct App {
    game: Game,
    scores: Scores,
    cursor: Position,
}

impl App {
    /// Creates the application state from initial snapshots.
    pub fn new(game: Game, scores: Scores) -> Self {
        Self {
            game,
            scores,
            cursor: Position::Center,
        }
    }

    /// Current derived game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Replaces the snapshots after a state change.
    pub fn sync(&mut self, game: Game, scores: Scores) {
        self.game = game;
        self.scores = scores;
    }

    /// Translates a key press into a typed intent.
    ///
    /// Arrow keys only move the cursor. While the game is complete the
    /// modal owns Enter ("Play again") and move intents are suppressed,
    /// the same way the modal overlay swallows board clicks.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Intent> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
            KeyCode::Char('r') => Some(Intent::Reset),
            KeyCode::Char('n') => Some(Intent::NewRound),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game.is_complete {
                    Some(Intent::Reset)
                } else {
                    Some(Intent::Move(self.cursor))
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
                None
            }
            _ => None,
        }
    }
}
