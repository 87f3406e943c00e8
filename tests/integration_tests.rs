//! Integration tests for full games driven through the public API

use tui_linkup::core::{GameSession, ManualClock, SessionConfig};
use tui_linkup::engine::{find_hint, AutoPlayer};
use tui_linkup::input::{handle_key_event, Cursor};
use tui_linkup::types::{GameAction, MatchOutcome, Phase, Pos};

use crossterm::event::{KeyCode, KeyEvent};

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(SessionConfig::with_seed(12345), ManualClock::new(0));
    assert_eq!(session.phase(), Phase::Menu);

    assert!(session.apply_action(GameAction::Start));
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.board().remaining_tiles(), 60);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_auto_player_finishes_every_game() {
    for seed in 1..=20 {
        let mut session = GameSession::new(SessionConfig::with_seed(seed), ManualClock::new(0));
        let moves = AutoPlayer::play(&mut session, 1000);

        assert_eq!(session.phase(), Phase::GameOver, "seed {}", seed);
        assert_eq!(moves.len() * 2 + session.board().remaining_tiles(), 60);
        assert_eq!(session.won(), session.board().is_cleared());

        // Score never decreases.
        let mut last = 0;
        for m in &moves {
            assert!(m.score_after >= last);
            last = m.score_after;
        }
        if session.won() {
            assert_eq!(session.score(), moves.len() as u32 * 10 + 300);
        } else {
            assert_eq!(session.score(), moves.len() as u32 * 10);
            assert!(!session.board().has_possible_moves());
        }
    }
}

#[test]
fn test_hint_pair_is_always_matchable() {
    let mut session = GameSession::new(SessionConfig::with_seed(31), ManualClock::new(0));
    session.start_new_game();

    for _ in 0..10 {
        let Some((a, b)) = find_hint(session.board()) else {
            break;
        };
        assert_eq!(session.board().kind_at(a), session.board().kind_at(b));
        session.handle_click(a);
        assert!(matches!(session.handle_click(b), MatchOutcome::Matched(_)));
        session.tick();
        if session.phase() != Phase::Playing {
            break;
        }
    }
}

#[test]
fn test_keyboard_cursor_selects_tiles() {
    let mut session = GameSession::new(SessionConfig::with_seed(2), ManualClock::new(0));
    session.start_new_game();
    let mut cursor = Cursor::new(session.board().size());

    for code in [KeyCode::Right, KeyCode::Right, KeyCode::Down] {
        let action = handle_key_event(KeyEvent::from(code)).unwrap();
        assert!(cursor.apply(action));
    }
    assert_eq!(cursor.pos(), Pos::new(2, 1));

    let select = handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap();
    assert_eq!(select, GameAction::Select);
    assert!(!cursor.apply(select));

    let outcome = session.handle_click(cursor.pos());
    if session.board().kind_at(cursor.pos()).is_some() {
        assert_eq!(outcome, MatchOutcome::AwaitingSecond);
    }
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut session = GameSession::new(SessionConfig::with_seed(8), ManualClock::new(0));
    session.start_new_game();
    let (a, _) = find_hint(session.board()).unwrap();
    session.handle_click(a);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["size"], 8);
    assert_eq!(json["board"].as_array().unwrap().len(), 64);
    assert_eq!(json["selection"][0]["x"], a.x);
    assert_eq!(json["remaining_tiles"], 60);
}
