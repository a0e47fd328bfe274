//! Core four-in-a-row game logic: board representation, line windows, win
//! detection, player types, and a game state that owns the live board.

mod board;
mod player;
mod state;
pub mod win;
mod window;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{has_won, is_terminal, winner};
pub use window::{all_windows, windows, Orientation, WINDOW_LEN};
