//! # Connect Four Minimax
//!
//! A four-in-a-row search engine. Given a position it picks a column for the
//! side to move using minimax with alpha-beta pruning over a fixed horizon,
//! scoring unfinished positions with a center-bias and line-window heuristic.
//!
//! ```
//! use connect_four_minimax::ai::choose_move;
//! use connect_four_minimax::game::{Board, Player};
//!
//! let board = Board::from_rows(&[
//!     ".......",
//!     ".......",
//!     ".......",
//!     "......O",
//!     "......O",
//!     "XXX...O",
//! ])
//! .unwrap();
//! assert_eq!(choose_move(&board, 5, Player::One), Some(3));
//! ```
//!
//! ## Modules
//!
//! - [`game`] : Board, windows, win detection, player, game state
//! - [`ai`] : Heuristic, minimax search, agents
//! - [`arena`] : Playing agents against each other
//! - [`config`] : TOML configuration loading and validation
//! - [`error`] : Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
