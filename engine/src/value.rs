/// Final score of a finished game, queryable per player.
///
/// Implementations hold one score per player, indexed by the same 1-based
/// ids `GameEngine::player_to_move` reports. Zero-sum games keep the two
/// scores negations of each other.
pub trait Value: Clone {
    fn get_value_for_player(&self, player: usize) -> f32;
}
