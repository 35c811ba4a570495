//! Tests for the typestate round lifecycle.

use oxo_core::{
    Move, MoveError, Outcome, Player, Position, RoundInProgress, RoundSetup, RoundTransition,
};

#[test]
fn test_typestate_lifecycle() {
    // Setup phase
    let round = RoundSetup::new();

    // Start the round
    let round = round.start(Player::X);
    assert_eq!(round.to_move(), Player::X);

    // Play a move
    let action = Move::new(Player::X, Position::Center);
    let result = round.play(action).expect("Valid move");

    let round = match result {
        RoundTransition::InProgress(r) => r,
        RoundTransition::Over(_) => panic!("Round shouldn't finish after one move"),
    };

    assert_eq!(round.to_move(), Player::O);
    assert_eq!(round.history().len(), 1);
}

#[test]
fn test_occupied_square_rejected() {
    let round = RoundSetup::new().start(Player::X);

    let action = Move::new(Player::X, Position::Center);
    let result = round.play(action);
    assert!(result.is_ok());

    let round = match result.unwrap() {
        RoundTransition::InProgress(r) => r,
        RoundTransition::Over(_) => panic!("Unexpected finish"),
    };

    // Same square again - must fail
    let action = Move::new(Player::O, Position::Center);
    let result = round.play(action);
    assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
}

#[test]
fn test_wrong_player_rejected() {
    let round = RoundSetup::new().start(Player::X);

    // O plays when it's X's turn
    let action = Move::new(Player::O, Position::Center);
    let result = round.play(action);
    assert!(matches!(result, Err(MoveError::WrongPlayer(_))));
}

#[test]
fn test_rejected_move_leaves_clone_usable() {
    let round = RoundSetup::new().start(Player::X);
    let action = Move::new(Player::X, Position::Center);

    let round = match round.play(action).unwrap() {
        RoundTransition::InProgress(r) => r,
        RoundTransition::Over(_) => panic!("Unexpected finish"),
    };

    // A caller that clones before playing keeps the round on rejection.
    let rejected = round.clone().play(Move::new(Player::O, Position::Center));
    assert!(rejected.is_err());

    let accepted = round.play(Move::new(Player::O, Position::TopLeft));
    assert!(accepted.is_ok());
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
        Move::new(Player::O, Position::TopRight),
        Move::new(Player::X, Position::BottomLeft),
    ];

    let result = RoundInProgress::replay(Player::X, &moves).expect("Valid replay");

    match result {
        RoundTransition::InProgress(round) => {
            assert_eq!(round.history().len(), 5);
            assert_eq!(round.to_move(), Player::O);
        }
        RoundTransition::Over(_) => panic!("Round shouldn't finish"),
    }
}

#[test]
fn test_replay_with_o_opening() {
    let moves = vec![
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::BottomLeft),
    ];

    let result = RoundInProgress::replay(Player::O, &moves).expect("Valid replay");

    match result {
        RoundTransition::InProgress(round) => {
            assert_eq!(round.to_move(), Player::X);
        }
        RoundTransition::Over(_) => panic!("Round shouldn't finish"),
    }
}

#[test]
fn test_win_detection_with_line() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight), // X completes the top row
    ];

    let result = RoundInProgress::replay(Player::X, &moves).expect("Valid replay");

    match result {
        RoundTransition::Over(round) => {
            let win = round.outcome().win().expect("X won");
            assert_eq!(win.player, Player::X);
            assert_eq!(
                win.line,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            );
        }
        RoundTransition::InProgress(_) => panic!("Round should be finished"),
    }
}

#[test]
fn test_draw_detection() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::TopCenter),
        Move::new(Player::X, Position::MiddleLeft),
        Move::new(Player::O, Position::MiddleRight),
        Move::new(Player::X, Position::BottomCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::BottomRight), // Board full, no line
    ];

    let result = RoundInProgress::replay(Player::X, &moves).expect("Valid replay");

    match result {
        RoundTransition::Over(round) => {
            assert_eq!(round.outcome(), &Outcome::Draw);
        }
        RoundTransition::InProgress(_) => panic!("Round should be finished"),
    }
}

#[test]
fn test_restart_clears_board() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight),
    ];

    let result = RoundInProgress::replay(Player::X, &moves).unwrap();

    if let RoundTransition::Over(round) = result {
        let next = round.restart().start(Player::X);
        assert_eq!(next.to_move(), Player::X);
        assert!(next.history().is_empty());
        assert!(Position::ALL.iter().all(|&p| next.board().is_empty(p)));
    } else {
        panic!("Round should be finished");
    }
}

#[test]
fn test_history_serializes_for_replay() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
    ];

    let round = match RoundInProgress::replay(Player::X, &moves).unwrap() {
        RoundTransition::InProgress(r) => r,
        RoundTransition::Over(_) => panic!("Round shouldn't finish"),
    };

    // Persist the history as JSON and rebuild the round from it.
    let json = serde_json::to_string(round.history()).unwrap();
    let restored: Vec<Move> = serde_json::from_str(&json).unwrap();

    match RoundInProgress::replay(Player::X, &restored).unwrap() {
        RoundTransition::InProgress(rebuilt) => {
            assert_eq!(rebuilt.board(), round.board());
            assert_eq!(rebuilt.to_move(), round.to_move());
        }
        RoundTransition::Over(_) => panic!("Round shouldn't finish"),
    }
}
