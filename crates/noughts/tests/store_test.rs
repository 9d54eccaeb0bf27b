//! Tests for the state store and persistence shim.

use noughts::{Backend, ChangeOrigin, FileBackend, MemoryBackend, Store};
use noughts_core::{GameState, PlayerId, Position};

fn memory_store() -> Store {
    Store::new(Box::new(MemoryBackend::new()), "noughts")
}

fn position(index: u8) -> Position {
    Position::try_from(index).expect("valid cell")
}

#[test]
fn test_missing_key_yields_default_state() {
    let store = memory_store();

    let state = store.state().expect("state loads");
    assert_eq!(state, GameState::default());

    let game = store.game().expect("game derives");
    assert!(!game.is_complete);
}

#[test]
fn test_move_persists_and_notifies() {
    let mut store = memory_store();
    let changes = store.subscribe();

    let played = store.player_move(position(4)).expect("move saves");
    assert!(played);

    let state = store.state().expect("state loads");
    assert_eq!(state.current_game_moves, vec![position(4)]);

    let change = changes.try_recv().expect("notification sent");
    assert_eq!(change.origin, ChangeOrigin::Local);
}

#[test]
fn test_occupied_cell_is_a_noop() {
    let mut store = memory_store();
    let changes = store.subscribe();

    assert!(store.player_move(position(4)).expect("move saves"));
    assert!(!store.player_move(position(4)).expect("no-op succeeds"));

    // Only the first move produced a save, so only one notification.
    assert!(changes.try_recv().is_ok());
    assert!(changes.try_recv().is_err());

    let state = store.state().expect("state loads");
    assert_eq!(state.current_game_moves.len(), 1);
}

#[test]
fn test_reset_archives_completed_game() {
    let mut store = memory_store();
    for index in [0, 4, 1, 5, 2] {
        store.player_move(position(index)).expect("move saves");
    }

    store.reset().expect("reset saves");

    let scores = store.scores().expect("scores derive");
    assert_eq!(scores.player1_wins, 1);
    assert_eq!(scores.ties, 0);

    let state = store.state().expect("state loads");
    assert!(state.current_game_moves.is_empty());
    assert_eq!(state.round_history[0].winner, Some(PlayerId::One));
}

#[test]
fn test_reset_discards_incomplete_game() {
    let mut store = memory_store();
    store.player_move(position(0)).expect("move saves");

    store.reset().expect("reset saves");

    let state = store.state().expect("state loads");
    assert!(state.current_game_moves.is_empty());
    assert!(state.round_history.is_empty());
}

#[test]
fn test_new_round_rolls_scores_into_archive() {
    let mut store = memory_store();
    for index in [0, 4, 1, 5, 2] {
        store.player_move(position(index)).expect("move saves");
    }
    store.reset().expect("reset saves");

    store.new_round().expect("new round saves");

    let scores = store.scores().expect("scores derive");
    assert_eq!(scores.player1_wins, 0);

    let state = store.state().expect("state loads");
    assert!(state.round_history.is_empty());
    assert_eq!(state.all_history.len(), 1);
    assert_eq!(state.all_history[0].len(), 1);
}

#[test]
fn test_save_rejects_invalid_state() {
    let mut store = memory_store();

    let mut broken = GameState::default();
    broken.current_game_moves = vec![position(4), position(4)];

    let err = store.save_state(broken).expect_err("duplicate rejected");
    assert!(err.message.contains("Invalid state"));

    // Nothing was written.
    assert_eq!(store.state().expect("state loads"), GameState::default());
}

#[test]
fn test_corrupt_state_fails_fast() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut backend = FileBackend::new(dir.path()).expect("backend opens");
    backend
        .set("noughts", "{ not json")
        .expect("raw write succeeds");

    let store = Store::new(Box::new(backend), "noughts");
    let err = store.state().expect_err("corrupt state rejected");
    assert!(err.message.contains("Corrupt saved state"));
}

#[test]
fn test_file_backend_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut backend = FileBackend::new(dir.path()).expect("backend opens");

    assert_eq!(backend.get("noughts").expect("read"), None);

    backend.set("noughts", "{}").expect("write");
    assert_eq!(
        backend.get("noughts").expect("read"),
        Some("{}".to_string())
    );
}

#[test]
fn test_state_survives_reopening() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let backend = FileBackend::new(dir.path()).expect("backend opens");
        let mut store = Store::new(Box::new(backend), "noughts");
        store.player_move(position(8)).expect("move saves");
    }

    let backend = FileBackend::new(dir.path()).expect("backend reopens");
    let store = Store::new(Box::new(backend), "noughts");
    let state = store.state().expect("state loads");
    assert_eq!(state.current_game_moves, vec![position(8)]);
}

#[test]
fn test_refresh_detects_external_writes() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut ours = Store::new(
        Box::new(FileBackend::new(dir.path()).expect("backend opens")),
        "noughts",
    );
    let changes = ours.subscribe();

    let mut theirs = Store::new(
        Box::new(FileBackend::new(dir.path()).expect("backend opens")),
        "noughts",
    );

    // Nothing to pick up yet.
    assert!(!ours.refresh().expect("refresh runs"));

    theirs.player_move(position(0)).expect("move saves");

    assert!(ours.refresh().expect("refresh runs"));
    let change = changes.try_recv().expect("notification sent");
    assert_eq!(change.origin, ChangeOrigin::External);

    let state = ours.state().expect("state loads");
    assert_eq!(state.current_game_moves, vec![position(0)]);

    // The same document is not reported twice.
    assert!(!ours.refresh().expect("refresh runs"));
}
