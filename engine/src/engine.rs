use std::fmt::Debug;

use super::error::IllegalMove;
use super::value::Value;

/// The rules of a two-player, perfect-information game.
///
/// An engine owns the immutable game configuration and exposes pure
/// functions over state values. States are never mutated in place; every
/// successor returned by `take_action` is a freshly constructed value, so
/// callers are free to keep or discard any state independently.
pub trait GameEngine {
    type Action: Clone + Debug;
    type State;
    type Value: Value;

    /// The starting position, player 1 to move.
    fn initial_state(&self) -> Self::State;

    /// Every action legal in the given position. The enumeration order is
    /// stable for a given state and is the order search strategies use to
    /// break ties.
    fn valid_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action for the player to move, producing the successor
    /// position. Fails if the action is not legal in this position.
    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, IllegalMove<Self::Action>>;

    /// `Some` with the final score once the game is over, `None` otherwise.
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Value>;

    /// 1-based id of the player to move.
    fn player_to_move(&self, game_state: &Self::State) -> usize;

    /// 1-based number of the move about to be played.
    fn move_number(&self, game_state: &Self::State) -> usize;
}
