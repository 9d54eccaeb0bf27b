//! State store and persistence shim.
//!
//! The store keeps a single serialized `GameState` document in a
//! key-value backend and re-emits a change notification after every
//! save, so the presentation layer can re-render from fresh snapshots.
//! Reads and writes are synchronous; the only race with another process
//! on the same backend is last writer wins.

mod backend;
mod error;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StoreError;

use noughts_core::{Game, GameState, Position, Scores, derive, tally};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info, instrument, warn};

/// Where a change notification originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A mutation performed through this store.
    Local,
    /// A write by another process, picked up by a refresh pass.
    External,
}

/// Notification emitted after every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    /// Origin of the change.
    pub origin: ChangeOrigin,
}

/// Synchronous state store over a key-value backend.
///
/// All mutations load the current snapshot, apply a pure transition, and
/// write the replacement back whole; nothing is patched in place.
pub struct Store {
    backend: Box<dyn Backend>,
    key: String,
    listeners: Vec<Sender<StateChange>>,
    last_seen: Option<String>,
}

impl Store {
    /// Creates a store reading and writing `key` in `backend`.
    pub fn new(backend: Box<dyn Backend>, key: impl Into<String>) -> Self {
        let key = key.into();
        let last_seen = match backend.get(&key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Could not read initial state");
                None
            }
        };
        Self {
            backend,
            key,
            listeners: Vec::new(),
            last_seen,
        }
    }

    /// Subscribes to change notifications.
    ///
    /// Dropped receivers are pruned on the next notification.
    pub fn subscribe(&mut self) -> Receiver<StateChange> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Loads the current state, or the fixed empty default when nothing
    /// has been saved yet.
    ///
    /// Malformed persisted state fails fast; nothing is repaired or
    /// discarded here.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn state(&self) -> Result<GameState, StoreError> {
        match self.backend.get(&self.key)? {
            None => Ok(GameState::default()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::new(format!("Corrupt saved state: {}", e))),
        }
    }

    /// Derived view of the game in progress.
    pub fn game(&self) -> Result<Game, StoreError> {
        Ok(derive(&self.state()?.current_game_moves))
    }

    /// Derived win and tie counts for the current round.
    pub fn scores(&self) -> Result<Scores, StoreError> {
        Ok(tally(&self.state()?.round_history))
    }

    /// Plays a move on an empty cell.
    ///
    /// Returns `false` without saving when the cell is already taken.
    #[instrument(skip(self), fields(cell = position.index()))]
    pub fn player_move(&mut self, position: Position) -> Result<bool, StoreError> {
        let state = self.state()?;
        match state.with_move(position) {
            Some(next) => {
                info!(cell = position.index(), "Move played");
                self.save_state(next)?;
                Ok(true)
            }
            None => {
                debug!(cell = position.index(), "Cell taken, move ignored");
                Ok(false)
            }
        }
    }

    /// Resets the game, archiving it into the round history first when
    /// it is complete.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let next = self.state()?.reset();
        info!(archived = next.round_history.len(), "Game reset");
        self.save_state(next)
    }

    /// Starts a new round: resets, then moves the round history into the
    /// long-term archive.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Result<(), StoreError> {
        let next = self.state()?.new_round();
        info!(rounds = next.all_history.len(), "New round started");
        self.save_state(next)
    }

    /// Replaces the stored state and notifies subscribers.
    ///
    /// A state violating the move-log invariants is a programming error
    /// and is rejected before anything is written.
    #[instrument(skip_all)]
    pub fn save_state(&mut self, state: GameState) -> Result<(), StoreError> {
        state.validate()?;
        let raw = serde_json::to_string(&state)?;
        self.backend.set(&self.key, &raw)?;
        self.last_seen = Some(raw);
        self.notify(ChangeOrigin::Local);
        Ok(())
    }

    /// Picks up writes made by another process sharing the backend.
    ///
    /// Compares the raw stored document against the last one seen and
    /// notifies subscribers on a difference. The replacement is applied
    /// whole; no merge is attempted.
    #[instrument(skip(self))]
    pub fn refresh(&mut self) -> Result<bool, StoreError> {
        let raw = self.backend.get(&self.key)?;
        if raw == self.last_seen {
            return Ok(false);
        }
        debug!("State changed outside this process");
        self.last_seen = raw;
        self.notify(ChangeOrigin::External);
        Ok(true)
    }

    fn notify(&mut self, origin: ChangeOrigin) {
        self.listeners
            .retain(|tx| tx.send(StateChange { origin }).is_ok());
    }
}
