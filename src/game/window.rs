//! Enumeration of every run of four cells a line can be made from.

use super::board::{Board, Cell};

/// Number of cells in a winning line.
pub const WINDOW_LEN: usize = 4;

/// A line direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right within a row
    Horizontal,
    /// Top to bottom within a column
    Vertical,
    /// Row decreases as column increases (`/`)
    PositiveDiagonal,
    /// Row and column decrease together (`\`)
    NegativeDiagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::PositiveDiagonal,
        Orientation::NegativeDiagonal,
    ];

    /// Cell coordinates of the window anchored at (row, col)
    fn cells(self, row: usize, col: usize) -> [(usize, usize); WINDOW_LEN] {
        std::array::from_fn(|i| match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
            Orientation::PositiveDiagonal => (row - i, col + i),
            Orientation::NegativeDiagonal => (row - i, col - i),
        })
    }

    /// Anchor ranges `(rows, cols)` keeping all four cells on a rows x cols
    /// board. Empty when the board is too small for this orientation.
    fn anchors(self, rows: usize, cols: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let span = WINDOW_LEN - 1;
        match self {
            Orientation::Horizontal => (0..rows, 0..cols.saturating_sub(span)),
            Orientation::Vertical => (0..rows.saturating_sub(span), 0..cols),
            Orientation::PositiveDiagonal => (span..rows, 0..cols.saturating_sub(span)),
            Orientation::NegativeDiagonal => (span..rows, span..cols),
        }
    }
}

/// Every window of `orientation` on `board`, each exactly once.
pub fn windows(board: &Board, orientation: Orientation) -> impl Iterator<Item = [Cell; WINDOW_LEN]> + '_ {
    let (rows, cols) = orientation.anchors(board.rows(), board.cols());
    rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
        .map(move |(row, col)| orientation.cells(row, col).map(|(r, c)| board.get(r, c)))
}

/// Every window of every orientation on `board`.
pub fn all_windows(board: &Board) -> impl Iterator<Item = [Cell; WINDOW_LEN]> + '_ {
    Orientation::ALL
        .into_iter()
        .flat_map(move |orientation| windows(board, orientation))
}
