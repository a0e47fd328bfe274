//! Playing agents against each other from a starting position to the end.

use serde::Serialize;

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Everything that happened in one finished game.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
    pub final_board: Board,
}

impl MatchRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play `start` to completion. `agents[0]` moves for player one, `agents[1]`
/// for player two.
pub fn play_match(
    start: GameState,
    agents: [&mut dyn Agent; 2],
) -> Result<MatchRecord, MatchError> {
    let [one, two] = agents;
    let mut state = start;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let action = agent
            .select_action(&state)
            .ok_or_else(|| MatchError::NoMove(agent.name().to_string()))?;
        if state.apply_move_mut(action).is_err() {
            return Err(MatchError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal: state.legal_actions(),
            });
        }
        moves.push(action);
    }

    let outcome = state
        .outcome()
        .expect("terminal state must have an outcome");

    tracing::debug!(?outcome, moves = moves.len(), "match finished");

    Ok(MatchRecord {
        moves,
        outcome,
        final_board: state.board().clone(),
    })
}

/// Win/loss/draw tally from one agent's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    pub total_moves: u64,
}

impl MatchSummary {
    /// Record a finished game in which the tracked agent played `side`
    pub fn record(&mut self, record: &MatchRecord, side: Player) {
        match record.winner() {
            Some(p) if p == side => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
        self.total_moves += record.moves.len() as u64;
    }

    pub fn games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games() as f64
    }

    pub fn average_length(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};

    /// Always plays the same column, legal or not.
    struct Stubborn(usize);

    impl Agent for Stubborn {
        fn select_action(&mut self, _state: &GameState) -> Option<usize> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn random_match_reaches_an_outcome() {
        let mut a = RandomAgent::with_seed(1);
        let mut b = RandomAgent::with_seed(2);
        let record = play_match(GameState::initial(), [&mut a, &mut b]).unwrap();
        assert!(!record.moves.is_empty());
        assert_eq!(record.final_board.piece_count(), record.moves.len());
    }

    #[test]
    fn vertical_stack_wins_for_first_player() {
        // One stacks column 0, two stacks column 1; one completes first
        let mut a = Stubborn(0);
        let mut b = Stubborn(1);
        let record = play_match(GameState::initial(), [&mut a, &mut b]).unwrap();
        assert_eq!(record.moves, vec![0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(record.winner(), Some(Player::One));
    }

    #[test]
    fn illegal_move_is_reported() {
        let mut a = Stubborn(9);
        let mut b = Stubborn(1);
        let err = play_match(GameState::initial(), [&mut a, &mut b]).unwrap_err();
        assert_eq!(
            err,
            MatchError::IllegalAction {
                agent: "Stubborn".to_string(),
                action: 9,
                legal: vec![0, 1, 2, 3, 4, 5, 6],
            }
        );
    }

    #[test]
    fn summary_tracks_results() {
        let mut a = Stubborn(0);
        let mut b = Stubborn(1);
        let record = play_match(GameState::initial(), [&mut a, &mut b]).unwrap();

        let mut summary = MatchSummary::default();
        summary.record(&record, Player::One);
        summary.record(&record, Player::Two);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.games(), 2);
        assert!((summary.win_rate() - 0.5).abs() < f64::EPSILON);
        assert!((summary.average_length() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn minimax_vs_random_completes() {
        let mut minimax = MinimaxAgent::new(2);
        let mut random = RandomAgent::with_seed(3);
        let record = play_match(GameState::initial(), [&mut minimax, &mut random]).unwrap();
        // Nobody can connect four in fewer than seven plies
        assert!(record.moves.len() >= 7);
    }
}
