use std::path::PathBuf;

/// Errors raised when a move breaks the board's contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("row {0} is outside the board")]
    RowOutOfRange(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("piece at ({row}, {col}) would float above an empty cell")]
    FloatingPiece { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors raised when building or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol '{0}' (expected '.', 'X' or 'O')")]
    UnknownSymbol(char),

    #[error("piece at ({row}, {col}) has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },

    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur while playing a match between agents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("{0} returned no move on a live position")]
    NoMove(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
