use serde::{Deserialize, Serialize};

use crate::game::{has_won, Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a position the engine has won.
pub const WIN_SCORE: i64 = 10_000_000;
/// Score of a position the engine has lost.
pub const LOSS_SCORE: i64 = -WIN_SCORE;
/// Score of a full board with no winner.
pub const DRAW_SCORE: i64 = 0;
/// Search horizon used when none is configured.
pub const DEFAULT_DEPTH: usize = 5;

/// Outcome of a search: the column to play and its minimax value.
///
/// `column` is `None` only when the node was scored as a leaf (depth
/// exhausted or terminal position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Minimax search with alpha-beta pruning, scoring every node from the point
/// of view of one fixed player (the engine's side).
///
/// Children are tried in ascending column order and a child replaces the
/// running best only on strict improvement, so ties go to the lowest column.
pub struct SearchEngine {
    ai: Player,
    heuristic: Box<dyn Heuristic>,
    nodes_searched: u64,
}

impl SearchEngine {
    pub fn new(ai: Player) -> Self {
        Self::with_heuristic(ai, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(ai: Player, heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            ai,
            heuristic,
            nodes_searched: 0,
        }
    }

    /// The side this engine maximizes for
    pub fn ai(&self) -> Player {
        self.ai
    }

    pub fn set_ai(&mut self, ai: Player) {
        self.ai = ai;
    }

    /// Nodes visited since the last top-level `best_move`
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Top-level search with an open window, the engine to move.
    pub fn best_move(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.nodes_searched = 0;
        let result = self.search(board, depth, i64::MIN, i64::MAX, true);
        tracing::debug!(
            ai = ?self.ai,
            depth,
            column = ?result.column,
            score = result.score,
            nodes = self.nodes_searched,
            "search complete"
        );
        result
    }

    /// Alpha-beta minimax. `maximizing` is true on plies where the engine moves.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        alpha: i64,
        beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.minimax(board, depth, alpha, beta, maximizing, true)
    }

    /// Plain minimax over the same tree, without cutoffs.
    pub fn search_unpruned(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        self.minimax(board, depth, i64::MIN, i64::MAX, maximizing, false)
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        prune: bool,
    ) -> SearchResult {
        self.nodes_searched += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return SearchResult::leaf(score);
        }

        let valid = board.valid_moves();
        // leaf_score already caught the full board
        let Some(&first) = valid.first() else {
            return SearchResult::leaf(DRAW_SCORE);
        };

        let mover = if maximizing { self.ai } else { self.ai.other() };
        let mut best = SearchResult {
            column: Some(first),
            score: if maximizing { i64::MIN } else { i64::MAX },
        };

        for &col in &valid {
            let mut child = board.clone();
            if child.drop_piece(col, mover).is_err() {
                continue;
            }
            let score = self
                .minimax(&child, depth - 1, alpha, beta, !maximizing, prune)
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        column: Some(col),
                        score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        column: Some(col),
                        score,
                    };
                }
                beta = beta.min(best.score);
            }

            if prune && alpha >= beta {
                break;
            }
        }

        best
    }

    /// Score for nodes that are not expanded: wins, losses and draws
    /// saturate, an exhausted horizon falls back to the heuristic. The
    /// heuristic always takes the engine's side, on both kinds of ply.
    fn leaf_score(&self, board: &Board, depth: usize) -> Option<i64> {
        if has_won(board, self.ai) {
            Some(WIN_SCORE)
        } else if has_won(board, self.ai.other()) {
            Some(LOSS_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else if depth == 0 {
            Some(self.heuristic.evaluate(board, self.ai))
        } else {
            None
        }
    }
}

/// Pick a column for `player` on `board`, searching `depth` plies.
///
/// Returns `None` on a terminal board or when `depth` is 0. Any column
/// returned is playable on `board`, which is left untouched.
pub fn choose_move(board: &Board, depth: usize, player: Player) -> Option<usize> {
    SearchEngine::new(player).best_move(board, depth).column
}

/// Agent wrapper that searches for whichever side is to move.
pub struct MinimaxAgent {
    depth: usize,
    engine: SearchEngine,
    last_result: Option<SearchResult>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            engine: SearchEngine::new(Player::One),
            last_result: None,
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            engine: SearchEngine::with_heuristic(Player::One, heuristic),
            last_result: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Result of the most recent search, if any
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }

    pub fn nodes_searched(&self) -> u64 {
        self.engine.nodes_searched()
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        self.engine.set_ai(state.current_player());
        let result = self.engine.best_move(state.board(), self.depth);
        self.last_result = Some(result);
        result.column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
