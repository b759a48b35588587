//! Rule invariants checked over every reachable board

mod common;

use common::{board, reachable_boards};
use tictactoe_minimax::{
    Error,
    tictactoe::{
        Board, CELL_COUNT, Cell, Outcome, Player, Position, actions, initial_state, player,
        result, terminal, utility, winner,
    },
};

mod state_model {
    use super::*;

    #[test]
    fn test_reachable_board_count() {
        // 5,478 distinct legal positions in Tic-Tac-Toe
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_initial_state_is_empty() {
        let b = initial_state();
        assert_eq!(b.occupied_count(), 0);
        assert_eq!(player(&b), Player::X);
        assert_eq!(actions(&b).len(), CELL_COUNT);
    }

    #[test]
    fn test_player_alternates_with_counts() {
        for b in reachable_boards() {
            let counts = b.piece_counts();
            let expected = if counts.x == counts.o {
                Player::X
            } else {
                Player::O
            };
            assert_eq!(player(&b), expected, "wrong player for\n{b}");
            assert!(b.validate().is_ok());
        }
    }
}

mod actions_and_transitions {
    use super::*;

    #[test]
    fn test_actions_plus_occupied_is_nine() {
        for b in reachable_boards() {
            assert_eq!(actions(&b).len() + b.occupied_count(), CELL_COUNT);
        }
    }

    #[test]
    fn test_result_changes_only_the_action_cell() {
        for b in reachable_boards() {
            let before = b;
            let mark = player(&b).to_cell();
            for action in actions(&b) {
                let next = result(&b, action).unwrap();
                for position in Position::all() {
                    if position == action {
                        assert_eq!(next.get(position), Some(mark));
                    } else {
                        assert_eq!(next.get(position), b.get(position));
                    }
                }
            }
            assert_eq!(b, before, "result mutated its input");
        }
    }

    #[test]
    fn test_result_out_of_bounds() {
        let b = initial_state();
        for (row, col) in [(3, 0), (0, 3), (3, 3), (usize::MAX, 1)] {
            let err = result(&b, Position::new(row, col)).unwrap_err();
            assert!(
                matches!(err, Error::OutOfBounds { row: r, col: c } if r == row && c == col),
                "unexpected error {err:?}"
            );
        }
    }

    #[test]
    fn test_result_illegal_move_on_every_occupied_cell() {
        let b = board("XOX .O. ..X");
        for position in Position::all() {
            if b.get(position) != Some(Cell::Empty) {
                assert!(matches!(
                    result(&b, position),
                    Err(Error::IllegalMove { .. })
                ));
            }
        }
    }
}

mod outcomes {
    use super::*;

    #[test]
    fn test_terminal_matches_winner_or_full() {
        for b in reachable_boards() {
            assert_eq!(
                terminal(&b),
                winner(&b).is_some() || actions(&b).is_empty(),
                "terminal mismatch for\n{b}"
            );
        }
    }

    #[test]
    fn test_utility_matches_winner() {
        for b in reachable_boards() {
            let expected = match winner(&b) {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            assert_eq!(utility(&b), expected);
        }
    }

    #[test]
    fn test_full_board_without_line() {
        // 4 X and 5 O: not reachable, but outcome queries are total
        let b = Board::from_cells([
            [Cell::X, Cell::O, Cell::X],
            [Cell::O, Cell::X, Cell::O],
            [Cell::O, Cell::X, Cell::O],
        ]);
        assert!(terminal(&b));
        assert_eq!(winner(&b), None);
        assert_eq!(utility(&b), 0);
        assert_eq!(b.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_top_row_win() {
        let b = board("XXX OO. ...");
        assert_eq!(winner(&b), Some(Player::X));
        assert_eq!(utility(&b), 1);
        assert!(terminal(&b));
    }

    #[test]
    fn test_utility_zero_on_open_board() {
        let b = board("X.. ... ...");
        assert!(!terminal(&b));
        assert_eq!(utility(&b), 0);
    }
}
