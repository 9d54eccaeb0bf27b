//! Noughts and crosses for the terminal.
//!
//! # Architecture
//!
//! - **Core**: pure move-log logic from `noughts_core`: derivation,
//!   scoring, copy-on-write lifecycle transitions.
//! - **Store**: synchronous key-value persistence shim with change
//!   notifications; file-backed or in-memory.
//! - **Config**: player display profiles and the storage key, from an
//!   optional TOML file.
//! - **Tui**: terminal presentation layer that renders derived snapshots
//!   and forwards typed intents back to the store.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod store;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ColorToken, ConfigError, PlayerProfile};

// Crate-level exports - State store
pub use store::{
    Backend, ChangeOrigin, FileBackend, MemoryBackend, StateChange, Store, StoreError,
};

// Crate-level exports - Terminal UI
pub use tui::{Intent, run_tui};
