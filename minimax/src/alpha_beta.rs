use engine::{GameEngine, Value};
use log::debug;

use crate::{SearchError, SearchStrategy};

/// Minimax with alpha-beta pruning.
///
/// `alpha` is the best score the maximizing player can already force
/// elsewhere in the tree, `beta` the same for the minimizer. A subtree
/// whose value falls outside the window cannot influence the root choice
/// and is abandoned. Chooses the same action exhaustive minimax would on
/// every input, visiting far fewer positions.
#[derive(Default)]
pub struct AlphaBeta {}

impl AlphaBeta {
    pub fn new() -> Self {
        Self {}
    }

    fn max_value<E: GameEngine>(
        &self,
        game_engine: &E,
        game_state: &E::State,
        mut alpha: f32,
        beta: f32,
        player: usize,
    ) -> Result<f32, SearchError> {
        if let Some(value) = game_engine.terminal_state(game_state) {
            return Ok(value.get_value_for_player(player));
        }

        let mut value = f32::NEG_INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            value = value.max(self.min_value(game_engine, &successor, alpha, beta, player)?);

            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }

        Ok(value)
    }

    fn min_value<E: GameEngine>(
        &self,
        game_engine: &E,
        game_state: &E::State,
        alpha: f32,
        mut beta: f32,
        player: usize,
    ) -> Result<f32, SearchError> {
        if let Some(value) = game_engine.terminal_state(game_state) {
            return Ok(value.get_value_for_player(player));
        }

        let mut value = f32::INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            value = value.min(self.max_value(game_engine, &successor, alpha, beta, player)?);

            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }

        Ok(value)
    }
}

impl<E: GameEngine> SearchStrategy<E> for AlphaBeta {
    fn choose_action(
        &self,
        game_engine: &E,
        game_state: &E::State,
    ) -> Result<E::Action, SearchError> {
        let player = game_engine.player_to_move(game_state);
        let beta = f32::INFINITY;
        let mut best_score = f32::NEG_INFINITY;
        let mut best_action = None;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            let value = self.min_value(game_engine, &successor, best_score, beta, player)?;

            // Strict improvement only, so the first action encountered
            // keeps winning ties.
            if value > best_score || best_action.is_none() {
                best_score = value;
                best_action = Some(action);
            }
        }

        let action = best_action.ok_or(SearchError::TerminalRoot)?;
        debug!("alpha-beta chose {:?} with score {}", action, best_score);

        Ok(action)
    }
}
