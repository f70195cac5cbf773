use engine::GameEngine;

use crate::SearchError;

/// Picks the action judged best for the player to move.
///
/// Strategies treat the engine and state as read-only. Invoking one on a
/// position that is already terminal is a caller error and is reported as
/// `SearchError::TerminalRoot`.
pub trait SearchStrategy<E: GameEngine> {
    fn choose_action(
        &self,
        game_engine: &E,
        game_state: &E::State,
    ) -> Result<E::Action, SearchError>;
}
