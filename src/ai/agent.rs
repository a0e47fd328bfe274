use crate::game::GameState;

/// Common interface for anything that picks moves: the search engine, the
/// random baseline, or a caller-supplied strategy.
pub trait Agent {
    /// Select a column for the side to move. `None` when the game is over.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
