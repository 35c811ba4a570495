//! Rule-evaluation properties over every board reachable by legal play.

use oxo_core::{rules, Board, Outcome, Player, Position, Square, Win};

/// Returns the board with X and O swapped.
fn swap_marks(board: &Board) -> Board {
    let mut swapped = Board::new();
    for pos in Position::ALL {
        let square = match board.get(pos) {
            Square::Empty => Square::Empty,
            Square::Occupied(player) => Square::Occupied(player.opponent()),
        };
        swapped.set(pos, square);
    }
    swapped
}

/// Returns the outcome with the winner's mark swapped.
fn swap_outcome(outcome: Option<Outcome>) -> Option<Outcome> {
    outcome.map(|o| match o {
        Outcome::Winner(win) => Outcome::Winner(Win {
            player: win.player.opponent(),
            line: win.line,
        }),
        Outcome::Draw => Outcome::Draw,
    })
}

/// Walks every game reachable by legal play from an empty board,
/// calling `check` at each node, stopping each branch at its outcome.
fn walk_reachable(board: &mut Board, to_move: Player, check: &mut impl FnMut(&Board)) {
    check(board);

    if rules::evaluate(board).is_some() {
        return;
    }

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        walk_reachable(board, to_move.opponent(), check);
        board.clear(pos);
    }
}

#[test]
fn test_evaluate_symmetric_under_mark_swap() {
    let mut board = Board::new();
    walk_reachable(&mut board, Player::X, &mut |board| {
        let swapped = swap_marks(board);
        assert_eq!(
            rules::evaluate(&swapped),
            swap_outcome(rules::evaluate(board)),
            "evaluation changed under mark swap for\n{}",
            board.display()
        );
    });
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut board = Board::new();
    walk_reachable(&mut board, Player::X, &mut |board| {
        let first = rules::evaluate(board);
        let second = rules::evaluate(board);
        assert_eq!(first, second);
    });
}

#[test]
fn test_every_line_detected_for_both_marks() {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for player in [Player::X, Player::O] {
        for indices in LINES {
            let mut board = Board::new();
            let mut line = [Position::Center; 3];
            for (slot, index) in line.iter_mut().zip(indices) {
                let pos = Position::from_index(index).unwrap();
                board.set(pos, Square::Occupied(player));
                *slot = pos;
            }

            let outcome = rules::evaluate(&board).expect("line completed");
            let win = outcome.win().expect("winner expected");
            assert_eq!(win.player, player);
            assert_eq!(win.line, line);
        }
    }
}
