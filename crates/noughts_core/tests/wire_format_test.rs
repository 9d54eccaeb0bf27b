//! Tests for the persisted JSON document format.

use noughts_core::{CompletedGame, GameState, PlayerId, Position};
use serde_json::json;

#[test]
fn test_state_round_trips() {
    let state = GameState {
        current_game_moves: vec![Position::Center, Position::TopLeft],
        round_history: vec![CompletedGame {
            is_complete: true,
            winner: Some(PlayerId::Two),
            moves: vec![Position::TopLeft],
        }],
        all_history: vec![vec![]],
    };

    let raw = serde_json::to_string(&state).expect("serializes");
    let parsed: GameState = serde_json::from_str(&raw).expect("parses");

    assert_eq!(parsed, state);
}

#[test]
fn test_document_shape() {
    let state = GameState {
        current_game_moves: vec![Position::Center, Position::TopLeft],
        round_history: vec![
            CompletedGame {
                is_complete: true,
                winner: Some(PlayerId::One),
                moves: vec![Position::TopLeft],
            },
            CompletedGame {
                is_complete: true,
                winner: None,
                moves: vec![Position::BottomRight],
            },
        ],
        all_history: vec![],
    };

    let value = serde_json::to_value(&state).expect("serializes");

    // camelCase keys, numeric cells, player numbers for winners.
    assert_eq!(value["currentGameMoves"], json!([4, 0]));
    assert_eq!(value["roundHistory"][0]["isComplete"], json!(true));
    assert_eq!(value["roundHistory"][0]["winner"], json!(1));
    assert_eq!(value["roundHistory"][1]["winner"], json!(null));
    assert_eq!(value["allHistory"], json!([]));
}

#[test]
fn test_empty_document_parses() {
    let raw = r#"{"currentGameMoves":[],"roundHistory":[],"allHistory":[]}"#;
    let parsed: GameState = serde_json::from_str(raw).expect("parses");

    assert_eq!(parsed, GameState::default());
}

#[test]
fn test_out_of_range_cell_is_rejected() {
    let raw = r#"{"currentGameMoves":[9],"roundHistory":[],"allHistory":[]}"#;

    assert!(serde_json::from_str::<GameState>(raw).is_err());
}

#[test]
fn test_invalid_player_number_is_rejected() {
    let raw = r#"{
        "currentGameMoves": [],
        "roundHistory": [{"isComplete": true, "winner": 3, "moves": []}],
        "allHistory": []
    }"#;

    assert!(serde_json::from_str::<GameState>(raw).is_err());
}
