use engine::{GameEngine, Value};
use kinarow::{Engine, GameState, Mark};
use minimax::Evaluate;

/// Terminal scores are scaled past anything the window scan can add up
/// to, so a found win is never traded for a promising-looking position.
const WIN_SCORE: f32 = 1_000_000.0;

/// Scores a position by the winning lines each side still has open: every
/// `win_length` window holding only one player's marks counts for that
/// player, weighted quadratically by how full it is.
#[derive(Default)]
pub struct OpenRunEvaluator {}

impl OpenRunEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    fn window_score(own: usize, opponent: usize) -> f32 {
        if opponent == 0 && own > 0 {
            (own * own) as f32
        } else if own == 0 && opponent > 0 {
            -((opponent * opponent) as f32)
        } else {
            0.0
        }
    }
}

impl Evaluate<Engine> for OpenRunEvaluator {
    fn evaluate(&self, game_engine: &Engine, game_state: &GameState, player: usize) -> f32 {
        if let Some(value) = game_engine.terminal_state(game_state) {
            return WIN_SCORE * value.get_value_for_player(player);
        }

        let own = if player == 1 { Mark::X } else { Mark::O };
        let height = game_engine.height() as i32;
        let width = game_engine.width() as i32;
        let win_length = game_engine.win_length() as i32;

        let mut score = 0.0;

        for (row_delta, col_delta) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
            for row in 0..height {
                for col in 0..width {
                    let end_row = row + (win_length - 1) * row_delta;
                    let end_col = col + (win_length - 1) * col_delta;

                    if end_row >= height || end_col < 0 || end_col >= width {
                        continue;
                    }

                    let mut own_count = 0;
                    let mut opponent_count = 0;

                    for step in 0..win_length {
                        let cell_row = (row + step * row_delta) as usize;
                        let cell_col = (col + step * col_delta) as usize;

                        match game_state.board.get(cell_row, cell_col) {
                            Some(mark) if mark == own => own_count += 1,
                            Some(_) => opponent_count += 1,
                            None => {}
                        }
                    }

                    score += Self::window_score(own_count, opponent_count);
                }
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinarow::{Action, Coord};
    use minimax::{DepthLimited, SearchStrategy};

    fn play(engine: &Engine, moves: &[(usize, usize)]) -> GameState {
        let mut state = engine.initial_state();
        for &(row, col) in moves {
            state = engine
                .take_action(&state, &Action::Place(Coord::new(row, col)))
                .unwrap();
        }
        state
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let engine = Engine::standard();
        let state = engine.initial_state();
        let evaluator = OpenRunEvaluator::new();

        assert_eq!(evaluator.evaluate(&engine, &state, 1), 0.0);
        assert_eq!(evaluator.evaluate(&engine, &state, 2), 0.0);
    }

    #[test]
    fn test_scores_are_antisymmetric() {
        let engine = Engine::standard();
        let state = play(&engine, &[(0, 0), (1, 1), (0, 1)]);
        let evaluator = OpenRunEvaluator::new();

        assert_eq!(
            evaluator.evaluate(&engine, &state, 1),
            -evaluator.evaluate(&engine, &state, 2)
        );
    }

    #[test]
    fn test_center_beats_corner() {
        let engine = Engine::standard();
        let center = play(&engine, &[(1, 1)]);
        let corner = play(&engine, &[(0, 0)]);
        let evaluator = OpenRunEvaluator::new();

        assert!(
            evaluator.evaluate(&engine, &center, 1) > evaluator.evaluate(&engine, &corner, 1)
        );
    }

    #[test]
    fn test_terminal_value_dominates() {
        let engine = Engine::standard();
        let won = play(&engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let evaluator = OpenRunEvaluator::new();

        assert_eq!(evaluator.evaluate(&engine, &won, 1), WIN_SCORE);
        assert_eq!(evaluator.evaluate(&engine, &won, 2), -WIN_SCORE);
    }

    #[test]
    fn test_depth_limited_with_evaluator_takes_the_win() {
        // X holds (1,0) and (1,1) on a 4x4 board with three to win; a
        // two-ply horizon with the heuristic still finds (1,2).
        let engine = Engine::new(4, 4, 3).unwrap();
        let state = play(&engine, &[(1, 0), (0, 0), (1, 1), (0, 1)]);

        let strategy = DepthLimited::with_evaluator(2, Box::new(OpenRunEvaluator::new()));
        let action = strategy.choose_action(&engine, &state).unwrap();

        assert_eq!(action, Action::Place(Coord::new(1, 2)));
    }
}
