use engine::{GameEngine, Value};
use log::debug;

use crate::{SearchError, SearchStrategy};

/// Exhaustive minimax over the full game tree.
///
/// Visits every reachable position below the root, so it plays optimally
/// but is only practical on small boards. Ties between equally scored
/// actions break to the first one in `valid_actions` order.
#[derive(Default)]
pub struct Minimax {}

impl Minimax {
    pub fn new() -> Self {
        Self {}
    }

    fn max_value<E: GameEngine>(
        &self,
        game_engine: &E,
        game_state: &E::State,
        player: usize,
    ) -> Result<f32, SearchError> {
        if let Some(value) = game_engine.terminal_state(game_state) {
            return Ok(value.get_value_for_player(player));
        }

        let mut value = f32::NEG_INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            value = value.max(self.min_value(game_engine, &successor, player)?);
        }

        Ok(value)
    }

    fn min_value<E: GameEngine>(
        &self,
        game_engine: &E,
        game_state: &E::State,
        player: usize,
    ) -> Result<f32, SearchError> {
        if let Some(value) = game_engine.terminal_state(game_state) {
            return Ok(value.get_value_for_player(player));
        }

        let mut value = f32::INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            value = value.min(self.max_value(game_engine, &successor, player)?);
        }

        Ok(value)
    }
}

impl<E: GameEngine> SearchStrategy<E> for Minimax {
    fn choose_action(
        &self,
        game_engine: &E,
        game_state: &E::State,
    ) -> Result<E::Action, SearchError> {
        let player = game_engine.player_to_move(game_state);
        let mut best: Option<(E::Action, f32)> = None;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            let score = self.min_value(game_engine, &successor, player)?;

            match &best {
                Some((_, best_score)) if score <= *best_score => {}
                _ => best = Some((action, score)),
            }
        }

        let (action, score) = best.ok_or(SearchError::TerminalRoot)?;
        debug!("minimax chose {:?} with score {}", action, score);

        Ok(action)
    }
}
