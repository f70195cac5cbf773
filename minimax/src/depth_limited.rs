use engine::GameEngine;
use log::debug;

use crate::{Evaluate, SearchError, SearchStrategy, TerminalValue};

pub const DEFAULT_DEPTH_LIMIT: usize = 6;

/// A cutoff predicate over (state, depth). Depth 1 is the ply right after
/// the root move.
pub type CutoffTest<S> = Box<dyn Fn(&S, usize) -> bool>;

/// Minimax truncated at a depth horizon, scoring cutoff positions with a
/// static evaluator instead of searching below them.
///
/// This is the strategy for boards too large to search exhaustively; pair
/// it with a real heuristic evaluator there. No pruning is applied. The
/// default cutoff stops below `depth_limit` or at any terminal; a custom
/// cutoff replaces that policy entirely.
pub struct DepthLimited<E: GameEngine> {
    depth_limit: usize,
    evaluator: Box<dyn Evaluate<E>>,
    cutoff: Option<CutoffTest<E::State>>,
}

impl<E: GameEngine> DepthLimited<E> {
    pub fn new(depth_limit: usize) -> Self {
        Self {
            depth_limit,
            evaluator: Box::new(TerminalValue::new()),
            cutoff: None,
        }
    }

    pub fn with_evaluator(depth_limit: usize, evaluator: Box<dyn Evaluate<E>>) -> Self {
        Self {
            depth_limit,
            evaluator,
            cutoff: None,
        }
    }

    pub fn with_cutoff(mut self, cutoff: impl Fn(&E::State, usize) -> bool + 'static) -> Self {
        self.cutoff = Some(Box::new(cutoff));
        self
    }

    fn is_cutoff(&self, game_engine: &E, game_state: &E::State, depth: usize) -> bool {
        match &self.cutoff {
            Some(cutoff) => cutoff(game_state, depth),
            None => depth > self.depth_limit || game_engine.terminal_state(game_state).is_some(),
        }
    }

    fn max_value(
        &self,
        game_engine: &E,
        game_state: &E::State,
        depth: usize,
        player: usize,
    ) -> Result<f32, SearchError> {
        if self.is_cutoff(game_engine, game_state, depth) {
            return Ok(self.evaluator.evaluate(game_engine, game_state, player));
        }

        let mut value = f32::NEG_INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            value = value.max(self.min_value(game_engine, &successor, depth + 1, player)?);
        }

        Ok(value)
    }

    fn min_value(
        &self,
        game_engine: &E,
        game_state: &E::State,
        depth: usize,
        player: usize,
    ) -> Result<f32, SearchError> {
        if self.is_cutoff(game_engine, game_state, depth) {
            return Ok(self.evaluator.evaluate(game_engine, game_state, player));
        }

        let mut value = f32::INFINITY;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            value = value.min(self.max_value(game_engine, &successor, depth + 1, player)?);
        }

        Ok(value)
    }
}

impl<E: GameEngine> Default for DepthLimited<E> {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl<E: GameEngine> SearchStrategy<E> for DepthLimited<E> {
    fn choose_action(
        &self,
        game_engine: &E,
        game_state: &E::State,
    ) -> Result<E::Action, SearchError> {
        if self.depth_limit == 0 {
            return Err(SearchError::InvalidDepthLimit);
        }

        let player = game_engine.player_to_move(game_state);
        let mut best: Option<(E::Action, f32)> = None;

        for action in game_engine.valid_actions(game_state) {
            let successor = game_engine.take_action(game_state, &action)?;
            let score = self.min_value(game_engine, &successor, 1, player)?;

            match &best {
                Some((_, best_score)) if score <= *best_score => {}
                _ => best = Some((action, score)),
            }
        }

        let (action, score) = best.ok_or(SearchError::TerminalRoot)?;
        debug!(
            "depth-limited search (limit {}) chose {:?} with score {}",
            self.depth_limit, action, score
        );

        Ok(action)
    }
}
