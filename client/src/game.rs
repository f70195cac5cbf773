use std::io::{self, Write};

use anyhow::{bail, Result};
use engine::GameEngine;
use kinarow::{Action, Engine, GameState, Mark};
use log::info;
use minimax::{AlphaBeta, DepthLimited, Minimax, SearchStrategy};

use crate::cli::{Cli, StrategyKind};
use crate::heuristic::OpenRunEvaluator;

pub fn build_strategy(cli: &Cli) -> Box<dyn SearchStrategy<Engine>> {
    match cli.strategy {
        StrategyKind::Minimax => Box::new(Minimax::new()),
        StrategyKind::AlphaBeta => Box::new(AlphaBeta::new()),
        StrategyKind::DepthLimited => Box::new(DepthLimited::with_evaluator(
            cli.depth,
            Box::new(OpenRunEvaluator::new()),
        )),
    }
}

/// Runs one game to completion: the human and the strategy alternate on a
/// single state slot, which is only ever rebound to freshly built
/// successors.
pub fn play(
    game_engine: &Engine,
    strategy: &dyn SearchStrategy<Engine>,
    human: Mark,
) -> Result<()> {
    let mut game_state = game_engine.initial_state();

    while game_engine.terminal_state(&game_state).is_none() {
        println!("{}", game_state);

        game_state = if game_state.to_move == human {
            human_turn(game_engine, &game_state)?
        } else {
            let action = strategy.choose_action(game_engine, &game_state)?;
            info!(
                "move {}: {} plays {}",
                game_engine.move_number(&game_state),
                game_state.to_move,
                action
            );
            game_engine.take_action(&game_state, &action)?
        };
    }

    println!("{}", game_state);

    match game_state.winner() {
        Some(mark) if mark == human => println!("You win!"),
        Some(_) => println!("The engine wins."),
        None => println!("It's a draw."),
    }

    Ok(())
}

fn human_turn(game_engine: &Engine, game_state: &GameState) -> Result<GameState> {
    loop {
        print!("Your move ({}), row,col: ", game_state.to_move);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            bail!("input closed before the game finished");
        }

        let action: Action = match input.trim().parse() {
            Ok(action) => action,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match game_engine.take_action(game_state, &action) {
            Ok(next) => return Ok(next),
            Err(err) => println!("{}", err),
        }
    }
}

/// The play-again prompt: `y` starts a fresh game, anything else exits.
pub fn wants_rematch() -> Result<bool> {
    print!("Play again? [y/n] ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
