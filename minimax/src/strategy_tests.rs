use std::collections::HashSet;

use engine::GameEngine;
use kinarow::{Action, Coord, Engine, GameState};

fn play(engine: &Engine, moves: &[(usize, usize)]) -> GameState {
    let mut state = engine.initial_state();
    for &(row, col) in moves {
        state = engine
            .take_action(&state, &Action::Place(Coord::new(row, col)))
            .unwrap();
    }
    state
}

/// Every distinct non-terminal position reachable from the empty board
/// with at least `min_marks` marks placed.
fn reachable_states(engine: &Engine, min_marks: usize) -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut frontier = vec![engine.initial_state()];
    let mut states = Vec::new();

    while let Some(state) = frontier.pop() {
        if engine.terminal_state(&state).is_some() || !seen.insert(state.clone()) {
            continue;
        }

        if state.board.marks_placed() >= min_marks {
            states.push(state.clone());
        }

        for action in engine.valid_actions(&state) {
            frontier.push(engine.take_action(&state, &action).unwrap());
        }
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::take_away::{TakeAwayAction, TakeAwayEngine};
    use crate::{AlphaBeta, DepthLimited, Minimax, SearchError, SearchStrategy};

    #[test]
    fn test_minimax_completes_a_winning_row() {
        let engine = Engine::standard();
        let state = play(&engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        let action = Minimax::new().choose_action(&engine, &state).unwrap();
        assert_eq!(action, Action::Place(Coord::new(0, 2)));

        let won = engine.take_action(&state, &action).unwrap();
        assert_eq!(won.utility, 1);
    }

    #[test]
    fn test_alpha_beta_completes_a_winning_row() {
        let engine = Engine::standard();
        let state = play(&engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        let action = AlphaBeta::new().choose_action(&engine, &state).unwrap();
        assert_eq!(action, Action::Place(Coord::new(0, 2)));
    }

    #[test]
    fn test_depth_limited_completes_a_winning_row() {
        let engine = Engine::standard();
        let state = play(&engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        let action = DepthLimited::default()
            .choose_action(&engine, &state)
            .unwrap();
        assert_eq!(action, Action::Place(Coord::new(0, 2)));
    }

    #[test]
    fn test_strategies_block_an_open_row() {
        // X holds (0,0) and (0,1); O must answer at (0,2) or lose.
        let engine = Engine::standard();
        let state = play(&engine, &[(0, 0), (1, 1), (0, 1)]);
        let block = Action::Place(Coord::new(0, 2));

        assert_eq!(
            Minimax::new().choose_action(&engine, &state).unwrap(),
            block
        );
        assert_eq!(
            AlphaBeta::new().choose_action(&engine, &state).unwrap(),
            block
        );
        assert_eq!(
            DepthLimited::default()
                .choose_action(&engine, &state)
                .unwrap(),
            block
        );
    }

    #[test]
    fn test_minimax_opening_move_is_corner_or_center() {
        let engine = Engine::standard();
        let state = engine.initial_state();

        let action = Minimax::new().choose_action(&engine, &state).unwrap();
        let coord = action.coord();

        let corner = (coord.row == 0 || coord.row == 2) && (coord.col == 0 || coord.col == 2);
        let center = coord.row == 1 && coord.col == 1;
        assert!(corner || center, "opened with {}", coord);
    }

    #[test]
    fn test_minimax_self_play_ends_in_a_draw() {
        let engine = Engine::standard();
        let minimax = Minimax::new();
        let mut state = engine.initial_state();

        while engine.terminal_state(&state).is_none() {
            let action = minimax.choose_action(&engine, &state).unwrap();
            state = engine.take_action(&state, &action).unwrap();
        }

        assert_eq!(state.winner(), None);
        assert!(state.remaining.is_empty());
    }

    #[test]
    fn test_alpha_beta_matches_minimax_on_reachable_states() {
        let engine = Engine::standard();
        let minimax = Minimax::new();
        let alpha_beta = AlphaBeta::new();

        for state in reachable_states(&engine, 2) {
            let expected = minimax.choose_action(&engine, &state).unwrap();
            let pruned = alpha_beta.choose_action(&engine, &state).unwrap();
            assert_eq!(pruned, expected, "diverged on\n{}", state);
        }
    }

    #[test]
    fn test_depth_limited_matches_minimax_when_horizon_covers_the_game() {
        let engine = Engine::standard();
        let minimax = Minimax::new();
        // Nine plies is the whole game, so the cutoff never fires before
        // a terminal and the choices must coincide.
        let unbounded = DepthLimited::new(9);

        for state in reachable_states(&engine, 2) {
            let expected = minimax.choose_action(&engine, &state).unwrap();
            let truncated = unbounded.choose_action(&engine, &state).unwrap();
            assert_eq!(truncated, expected, "diverged on\n{}", state);
        }
    }

    #[test]
    fn test_depth_limited_returns_legal_move_on_large_board() {
        let engine = Engine::new(5, 5, 4).unwrap();
        let state = engine.initial_state();

        let action = DepthLimited::new(2).choose_action(&engine, &state).unwrap();
        assert!(engine.valid_actions(&state).contains(&action));
    }

    #[test]
    fn test_strategies_error_on_won_position() {
        let engine = Engine::standard();
        let won = play(&engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(
            Minimax::new().choose_action(&engine, &won),
            Err(SearchError::TerminalRoot)
        );
        assert_eq!(
            AlphaBeta::new().choose_action(&engine, &won),
            Err(SearchError::TerminalRoot)
        );
        assert_eq!(
            DepthLimited::default().choose_action(&engine, &won),
            Err(SearchError::TerminalRoot)
        );
    }

    #[test]
    fn test_strategies_error_on_drawn_position() {
        let engine = Engine::standard();
        let drawn = play(
            &engine,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 0),
                (2, 0),
                (1, 1),
                (2, 2),
                (2, 1),
            ],
        );

        assert_eq!(
            Minimax::new().choose_action(&engine, &drawn),
            Err(SearchError::TerminalRoot)
        );
    }

    #[test]
    fn test_depth_limited_rejects_zero_depth_limit() {
        let engine = Engine::standard();
        let state = engine.initial_state();

        assert_eq!(
            DepthLimited::new(0).choose_action(&engine, &state),
            Err(SearchError::InvalidDepthLimit)
        );
    }

    #[test]
    fn test_depth_limited_custom_cutoff_stops_at_the_root_ply() {
        let engine = Engine::standard();
        let state = engine.initial_state();

        // Cutting off at depth 1 scores every successor with the default
        // evaluator, which sees only zeros, so the tie-break hands back
        // the first cell in enumeration order.
        let strategy = DepthLimited::new(9).with_cutoff(|_, depth| depth >= 1);
        let action = strategy.choose_action(&engine, &state).unwrap();
        assert_eq!(action, Action::Place(Coord::new(0, 0)));
    }

    #[test]
    fn test_minimax_wins_take_away() {
        // Five counters: taking two leaves a lost multiple of three.
        let engine = TakeAwayEngine::new(5);
        let state = engine.initial_state();

        let action = Minimax::new().choose_action(&engine, &state).unwrap();
        assert_eq!(action, TakeAwayAction::TakeTwo);

        // Four counters: taking one does the same.
        let engine = TakeAwayEngine::new(4);
        let state = engine.initial_state();

        let action = Minimax::new().choose_action(&engine, &state).unwrap();
        assert_eq!(action, TakeAwayAction::TakeOne);
    }

    #[test]
    fn test_lost_take_away_position_breaks_ties_to_first_action() {
        // Six counters is lost for the mover; every action scores -1, so
        // both strategies must fall back to the first action enumerated.
        let engine = TakeAwayEngine::new(6);
        let state = engine.initial_state();

        assert_eq!(
            Minimax::new().choose_action(&engine, &state).unwrap(),
            TakeAwayAction::TakeOne
        );
        assert_eq!(
            AlphaBeta::new().choose_action(&engine, &state).unwrap(),
            TakeAwayAction::TakeOne
        );
    }

    #[test]
    fn test_alpha_beta_matches_minimax_on_take_away() {
        let minimax = Minimax::new();
        let alpha_beta = AlphaBeta::new();

        for start in 1..=8 {
            let engine = TakeAwayEngine::new(start);
            let state = engine.initial_state();

            assert_eq!(
                alpha_beta.choose_action(&engine, &state).unwrap(),
                minimax.choose_action(&engine, &state).unwrap(),
                "diverged with {} counters",
                start
            );
        }
    }

    #[test]
    fn test_depth_limited_plays_take_away_optimally_within_horizon() {
        let engine = TakeAwayEngine::new(5);
        let state = engine.initial_state();

        let action = DepthLimited::new(8).choose_action(&engine, &state).unwrap();
        assert_eq!(action, TakeAwayAction::TakeTwo);
    }
}
