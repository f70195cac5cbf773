mod cli;
mod game;
mod heuristic;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use env_logger::Env;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let game_engine = kinarow::Engine::new(cli.height, cli.width, cli.win_length)?;
    let strategy = game::build_strategy(&cli);
    let human = cli.play_as.mark();

    info!(
        "{}x{} board, {} in a row to win, opponent: {:?}",
        cli.height, cli.width, cli.win_length, cli.strategy
    );

    loop {
        game::play(&game_engine, strategy.as_ref(), human)?;

        if !game::wants_rematch()? {
            break;
        }
    }

    Ok(())
}
