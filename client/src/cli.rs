use clap::{Parser, ValueEnum};

use kinarow::Mark;

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "kinarow")]
#[clap(about = "Play k-in-a-row board games against a searching opponent", long_about = None)]
pub struct Cli {
    /// Board height
    #[clap(long, default_value_t = 3)]
    pub height: usize,

    /// Board width
    #[clap(long, default_value_t = 3)]
    pub width: usize,

    /// Marks in a row needed to win
    #[clap(short = 'k', long, default_value_t = 3)]
    pub win_length: usize,

    /// Search strategy the opponent plays with
    #[clap(long, value_enum, default_value_t = StrategyKind::AlphaBeta)]
    pub strategy: StrategyKind,

    /// Ply horizon for the depth-limited strategy
    #[clap(long, default_value_t = minimax::DEFAULT_DEPTH_LIMIT)]
    pub depth: usize,

    /// Mark you play; X always moves first
    #[clap(long, value_enum, default_value_t = HumanMark::X)]
    pub play_as: HumanMark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Exhaustive minimax, only practical on small boards
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Depth-limited minimax with a heuristic evaluator
    DepthLimited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HumanMark {
    X,
    O,
}

impl HumanMark {
    pub fn mark(self) -> Mark {
        match self {
            HumanMark::X => Mark::X,
            HumanMark::O => Mark::O,
        }
    }
}
