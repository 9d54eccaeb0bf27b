//! Terminal UI: renders derived state and forwards typed intents.
//!
//! Single-threaded and strictly sequential: one input event at a time,
//! with the poll timeout doubling as an idle tick that picks up writes
//! from other processes sharing the state directory.

mod app;
mod input;
mod ui;

pub use app::Intent;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::store::{Backend, FileBackend, MemoryBackend, StateChange, Store};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tracing::{debug, error, info};

/// Idle poll interval; also the cadence of external-change checks.
const TICK: Duration = Duration::from_millis(200);

/// Runs the terminal UI until the user quits.
pub fn run_tui(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let backend: Box<dyn Backend> = if cli.ephemeral {
        info!("Using in-memory state backend");
        Box::new(MemoryBackend::new())
    } else {
        info!(dir = %cli.data_dir.display(), "Using file state backend");
        Box::new(FileBackend::new(&cli.data_dir)?)
    };

    let mut store = Store::new(backend, config.storage_key().clone());
    let changes = store.subscribe();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = run_loop(&mut terminal, &mut store, &changes, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    store: &mut Store,
    changes: &Receiver<StateChange>,
    config: &AppConfig,
) -> Result<()> {
    let mut app = App::new(store.game()?, store.scores()?);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app, config))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match app.handle_key(key.code) {
                    Some(Intent::Quit) => {
                        info!("User quit");
                        return Ok(());
                    }
                    Some(Intent::Move(position)) => {
                        store.player_move(position)?;
                    }
                    Some(Intent::Reset) => {
                        store.reset()?;
                    }
                    Some(Intent::NewRound) => {
                        store.new_round()?;
                    }
                    None => {}
                }
            }
        } else {
            // Idle tick: pick up writes from other processes.
            store.refresh()?;
        }

        let mut dirty = false;
        while let Ok(change) = changes.try_recv() {
            debug!(origin = ?change.origin, "State changed");
            dirty = true;
        }
        if dirty {
            app.sync(store.game()?, store.scores()?);
        }
    }
}
