use std::fmt;

use crate::error::{BoardError, MoveError};

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }

    fn from_symbol(c: char) -> Result<Cell, BoardError> {
        match c {
            '.' => Ok(Cell::Empty),
            'X' | 'x' => Ok(Cell::One),
            'O' | 'o' => Ok(Cell::Two),
            other => Err(BoardError::UnknownSymbol(other)),
        }
    }
}

/// A rows x cols grid. Row 0 is the top, row `rows - 1` the bottom; pieces
/// stack upward from the bottom with no gaps.
///
/// `Clone` is a deep copy, which is what the search uses to explore moves
/// without touching the caller's board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Create an empty 6x7 board
    pub fn standard() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }

    /// Parse a diagram, top row first: `.` empty, `X` player one, `O` player two.
    /// Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let parsed: Vec<Vec<Cell>> = rows
            .iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Cell::from_symbol)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<_, _>>()?;

        let cols = parsed.first().map_or(0, Vec::len);
        let mut board = Board::new(parsed.len(), cols)?;
        for (row, cells) in parsed.iter().enumerate() {
            if cells.len() != cols {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, &cell) in cells.iter().enumerate() {
                board.cells[row * cols + col] = cell;
            }
        }

        // Every piece needs support below it
        for col in 0..board.cols {
            for row in 0..board.rows - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the center column (`cols / 2`)
    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// True iff `col` is on the board and its top cell is empty
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Lowest empty row in `col`
    pub fn next_open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Place `player`'s piece at (row, col).
    ///
    /// The target must be empty and rest on the bottom edge or on another
    /// piece; anything else would break the gravity invariant.
    pub fn drop(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }
        if row >= self.rows {
            return Err(MoveError::RowOutOfRange(row));
        }
        if self.get(row, col) != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        if row + 1 < self.rows && self.get(row + 1, col) == Cell::Empty {
            return Err(MoveError::FloatingPiece { row, col });
        }
        self.cells[row * self.cols + col] = player.piece();
        Ok(())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.next_open_row(col)?;
        self.drop(row, col, player)?;
        Ok(row)
    }

    /// Playable columns, ascending
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_valid_move(col))
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Number of `player`'s pieces in column `col`
    pub fn count_in_column(&self, col: usize, player: Player) -> usize {
        (0..self.rows)
            .filter(|&row| self.get(row, col) == player.piece())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Board::new(0, 7),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 7 })
        );
        assert!(Board::new(6, 0).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::One);

        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_next_open_row_then_drop() {
        let mut board = Board::new(4, 5).unwrap();
        let row = board.next_open_row(2).unwrap();
        assert_eq!(row, 3);
        board.drop(row, 2, Player::Two).unwrap();
        assert_eq!(board.next_open_row(2).unwrap(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();
        for _ in 0..ROWS {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(!board.is_valid_move(0));
        assert_eq!(board.next_open_row(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.drop_piece(0, Player::Two), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.valid_moves(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert!(!board.is_valid_move(7));
        assert_eq!(board.drop_piece(7, Player::One), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_drop_rejects_floating_and_occupied() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop(2, 1, Player::One),
            Err(MoveError::FloatingPiece { row: 2, col: 1 })
        );
        board.drop(5, 1, Player::One).unwrap();
        assert_eq!(
            board.drop(5, 1, Player::Two),
            Err(MoveError::CellOccupied { row: 5, col: 1 })
        );
        assert_eq!(board.drop(6, 1, Player::Two), Err(MoveError::RowOutOfRange(6)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::standard();
        board.drop_piece(3, Player::One).unwrap();
        let mut copy = board.clone();
        copy.drop_piece(3, Player::Two).unwrap();
        assert_eq!(board.piece_count(), 1);
        assert_eq!(copy.piece_count(), 2);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_moves().is_empty());
    }

    #[test]
    fn test_from_rows_and_display() {
        let diagram = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
            "..XXO..",
        ];
        let board = Board::from_rows(&diagram).unwrap();
        assert_eq!(board.get(5, 2), Cell::One);
        assert_eq!(board.get(4, 3), Cell::Two);
        assert_eq!(board.count_in_column(3, Player::One), 1);
        assert_eq!(board.count_in_column(3, Player::Two), 1);
        assert_eq!(board.to_string(), diagram.join("\n") + "\n");
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(&["..", "..."]),
            Err(BoardError::RaggedRows { row: 1, expected: 2, found: 3 })
        );
        assert_eq!(Board::from_rows(&["..", ".Z"]), Err(BoardError::UnknownSymbol('Z')));
        assert_eq!(
            Board::from_rows(&["X.", ".."]),
            Err(BoardError::FloatingPiece { row: 0, col: 0 })
        );
        assert!(Board::from_rows::<&str>(&[]).is_err());
    }
}
