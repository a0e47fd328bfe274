//! Move selection: the position heuristic, minimax search with alpha-beta
//! pruning, and the agents built on top of it.

mod agent;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{evaluate_window, score, Heuristic, WindowHeuristic};
pub use minimax::{
    choose_move, MinimaxAgent, SearchEngine, SearchResult, DEFAULT_DEPTH, DRAW_SCORE, LOSS_SCORE,
    WIN_SCORE,
};
pub use random::RandomAgent;
