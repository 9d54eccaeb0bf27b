//! Tests for copy-on-write state transitions.

use noughts_core::{GameState, PlayerId, Position, StateError, derive};

fn played(indices: &[u8]) -> GameState {
    let mut state = GameState::default();
    for &index in indices {
        let position = Position::try_from(index).expect("valid cell");
        state = state.with_move(position).expect("cell is free");
    }
    state
}

#[test]
fn test_with_move_leaves_snapshot_untouched() {
    let before = GameState::default();
    let after = before.with_move(Position::Center).expect("cell is free");

    assert!(before.current_game_moves.is_empty());
    assert_eq!(after.current_game_moves, vec![Position::Center]);
}

#[test]
fn test_repeated_move_is_rejected() {
    let state = played(&[4]);

    assert!(state.with_move(Position::Center).is_none());
    assert_eq!(state.current_game_moves.len(), 1);
}

#[test]
fn test_reset_discards_incomplete_game() {
    let state = played(&[0, 4, 1]);
    let after = state.reset();

    assert!(after.current_game_moves.is_empty());
    assert!(after.round_history.is_empty());
}

#[test]
fn test_reset_archives_complete_game() {
    let state = played(&[0, 4, 1, 5, 2]);
    assert!(derive(&state.current_game_moves).is_complete);

    let after = state.reset();

    assert!(after.current_game_moves.is_empty());
    assert_eq!(after.round_history.len(), 1);

    let archived = &after.round_history[0];
    assert!(archived.is_complete);
    assert_eq!(archived.winner, Some(PlayerId::One));
    assert_eq!(archived.moves.len(), 5);
}

#[test]
fn test_double_reset_archives_once() {
    let after = played(&[0, 4, 1, 5, 2]).reset().reset();

    assert_eq!(after.round_history.len(), 1);
}

#[test]
fn test_tied_game_archives_without_winner() {
    let after = played(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).reset();

    assert_eq!(after.round_history.len(), 1);
    assert_eq!(after.round_history[0].winner, None);
}

#[test]
fn test_new_round_rolls_history_into_archive() {
    let state = played(&[0, 4, 1, 5, 2]).reset();
    let state = {
        let mut next = state;
        for &index in &[3, 0, 4, 1, 5] {
            next = next
                .with_move(Position::try_from(index).expect("valid cell"))
                .expect("cell is free");
        }
        next
    };
    let after = state.new_round();

    assert!(after.round_history.is_empty());
    assert_eq!(after.all_history.len(), 1);
    // Both completed games land in the archived round: the earlier reset
    // plus the game still on the board when the round ended.
    assert_eq!(after.all_history[0].len(), 2);
}

#[test]
fn test_new_round_archives_empty_history() {
    let after = GameState::default().new_round();

    assert!(after.round_history.is_empty());
    assert_eq!(after.all_history, vec![vec![]]);
}

#[test]
fn test_new_round_discards_incomplete_game() {
    let after = played(&[0, 4]).new_round();

    assert!(after.current_game_moves.is_empty());
    assert_eq!(after.all_history, vec![vec![]]);
}

#[test]
fn test_validate_accepts_live_states() {
    assert!(GameState::default().validate().is_ok());
    assert!(played(&[0, 4, 1, 5, 2]).validate().is_ok());
}

#[test]
fn test_validate_rejects_duplicate_moves() {
    let mut state = GameState::default();
    state.current_game_moves = vec![Position::Center, Position::TopLeft, Position::Center];

    assert!(matches!(
        state.validate(),
        Err(StateError::DuplicateMove(Position::Center))
    ));
}

#[test]
fn test_validate_rejects_oversized_log() {
    let mut state = GameState::default();
    state.current_game_moves = vec![Position::Center; 10];

    assert!(matches!(state.validate(), Err(StateError::OversizedLog(10))));
}
