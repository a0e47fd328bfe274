use crate::game::{all_windows, Board, Cell, Player, WINDOW_LEN};

/// Weight per own piece in the center column.
pub const CENTER_WEIGHT: i64 = 6;
/// Four own pieces in a window.
pub const FOUR_SCORE: i64 = 100;
/// Three own pieces and one empty cell.
pub const THREE_SCORE: i64 = 5;
/// Two own pieces and two empty cells.
pub const TWO_SCORE: i64 = 2;
/// Three opponent pieces and one empty cell.
pub const OPPONENT_THREE_PENALTY: i64 = -4;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Center-column bias plus a sliding-window threat count.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        score(board, player)
    }
}

/// Score a single window of four cells for `player`.
///
/// The own-piece tiers are exclusive; the opponent penalty stacks on top.
pub fn evaluate_window(window: &[Cell; WINDOW_LEN], player: Player) -> i64 {
    let own_cell = player.piece();
    let opp_cell = player.other().piece();

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = 0;
    if own == 4 {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }
    if opp == 3 && empty == 1 {
        score += OPPONENT_THREE_PENALTY;
    }
    score
}

/// Heuristic value of `board` for `player`.
pub fn score(board: &Board, player: Player) -> i64 {
    let center = board.count_in_column(board.center_col(), player) as i64;
    let windows: i64 = all_windows(board)
        .map(|window| evaluate_window(&window, player))
        .sum();
    center * CENTER_WEIGHT + windows
}
