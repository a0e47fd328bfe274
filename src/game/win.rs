//! Terminal-state detection. Pure functions, safe on any board including
//! search copies.

use super::board::Board;
use super::player::Player;
use super::window::all_windows;

/// True if `player` has four in a row in any orientation
pub fn has_won(board: &Board, player: Player) -> bool {
    let piece = player.piece();
    all_windows(board).any(|window| window.iter().all(|&cell| cell == piece))
}

/// The player holding a four-in-a-row, if any. Player one is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|&player| has_won(board, player))
}

/// True if either player has won or no column is playable
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Player::One) || has_won(board, Player::Two) || board.valid_moves().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::standard();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        for col in 0..4 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Some(Player::One));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...O...",
            "...O...",
            "...O...",
            "..XOXX.",
        ])
        .unwrap();
        assert!(has_won(&board, Player::Two));
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_positive_diagonal_win() {
        let mut board = Board::standard();
        board.drop_piece(0, Player::One).unwrap();

        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();

        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        assert!(!has_won(&board, Player::One));
        board.drop_piece(3, Player::One).unwrap();

        assert!(has_won(&board, Player::One));
    }

    #[test]
    fn test_negative_diagonal_win() {
        let mut board = Board::standard();
        board.drop_piece(6, Player::Two).unwrap();

        board.drop_piece(5, Player::One).unwrap();
        board.drop_piece(5, Player::Two).unwrap();

        board.drop_piece(4, Player::One).unwrap();
        board.drop_piece(4, Player::One).unwrap();
        board.drop_piece(4, Player::Two).unwrap();

        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::Two).unwrap();

        assert!(has_won(&board, Player::Two));
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(4, Player::One).unwrap();
        assert!(!has_won(&board, Player::One));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_full_board_draw_is_terminal() {
        // Column pairs alternate so no line of four can form
        let board = Board::from_rows(&[
            "XXOOXXO",
            "OOXXOOX",
            "XXOOXXO",
            "OOXXOOX",
            "XXOOXXO",
            "OOXXOOX",
        ])
        .unwrap();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_small_board_never_wins() {
        let mut board = Board::new(3, 3).unwrap();
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(!has_won(&board, Player::One));
        assert!(is_terminal(&board));
    }
}
