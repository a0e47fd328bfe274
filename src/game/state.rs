use serde::{Deserialize, Serialize};

use crate::error::MoveError;

use super::board::Board;
use super::player::Player;
use super::win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A live game: the owned board, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Standard 6x7 game with player one to move
    pub fn initial() -> Self {
        GameState::from_board(Board::standard(), Player::One)
    }

    /// Resume from an arbitrary position with `to_move` on turn
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let outcome = if let Some(player) = win::winner(&board) {
            Some(GameOutcome::Winner(player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };
        GameState {
            board,
            current_player: to_move,
            outcome,
        }
    }

    /// Replay a move list from an empty board, player one first
    pub fn from_moves(rows: usize, cols: usize, moves: &[usize]) -> Result<Self, crate::error::BoardError> {
        let mut state = GameState::from_board(Board::new(rows, cols)?, Player::One);
        for &col in moves {
            state.apply_move_mut(col)?;
        }
        Ok(state)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Playable columns, empty once the game is over
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_moves()
    }

    /// Apply a move and return the new state
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_player)?;

        if win::has_won(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}
