use std::fmt::Debug;

use thiserror::Error;

/// An action that is not legal in the position it was applied to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("illegal action {action:?}: not available in this position")]
pub struct IllegalMove<A: Debug> {
    pub action: A,
}

impl<A: Debug> IllegalMove<A> {
    pub fn new(action: A) -> Self {
        Self { action }
    }
}
