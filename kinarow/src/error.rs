use thiserror::Error;

/// Rejected game configurations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("board dimensions must be at least 1x1, got {height}x{width}")]
    EmptyBoard { height: usize, width: usize },

    #[error("win length must be at least 1")]
    ZeroWinLength,

    #[error("win length {win_length} cannot fit on a {height}x{width} board")]
    UnwinnableBoard {
        win_length: usize,
        height: usize,
        width: usize,
    },
}
