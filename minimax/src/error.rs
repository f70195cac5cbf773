use std::fmt::Debug;

use engine::IllegalMove;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A strategy was invoked on a finished game. The caller is expected
    /// to check for a terminal position before asking for a move.
    #[error("cannot search a terminal position: no actions available")]
    TerminalRoot,

    /// A depth-limited search was configured with no room to look ahead.
    #[error("depth limit must be at least 1")]
    InvalidDepthLimit,

    /// The engine refused an action it generated itself. This is a
    /// contract violation in the engine, not a recoverable condition.
    #[error("engine rejected an action it generated: {0}")]
    RejectedAction(String),
}

impl<A: Debug> From<IllegalMove<A>> for SearchError {
    fn from(err: IllegalMove<A>) -> Self {
        SearchError::RejectedAction(err.to_string())
    }
}
