use engine::{GameEngine, Value};

/// Static position scoring for depth-limited search.
///
/// Scores are from the given player's perspective and must keep winning
/// terminals above every heuristic estimate, or the search will trade a
/// certain win for a promising-looking cutoff.
pub trait Evaluate<E: GameEngine> {
    fn evaluate(&self, game_engine: &E, game_state: &E::State, player: usize) -> f32;
}

/// Exact scoring only: terminal positions score their true value and
/// everything else scores zero.
///
/// With this evaluator a depth-limited search differs from exhaustive
/// minimax only by truncating: any non-terminal position at the horizon
/// counts as a draw.
#[derive(Default)]
pub struct TerminalValue {}

impl TerminalValue {
    pub fn new() -> Self {
        Self {}
    }
}

impl<E: GameEngine> Evaluate<E> for TerminalValue {
    fn evaluate(&self, game_engine: &E, game_state: &E::State, player: usize) -> f32 {
        game_engine
            .terminal_state(game_state)
            .map(|value| value.get_value_for_player(player))
            .unwrap_or(0.0)
    }
}
