use std::fmt::{self, Display, Formatter};

use crate::{Board, Coord, Mark};

/// An immutable snapshot of one position.
///
/// `utility` is the signed result of the move that produced this state,
/// from X's perspective: +1 if X just completed a winning line, -1 if O
/// did, 0 otherwise. It is computed once when the state is built and never
/// recomputed. `remaining` doubles as the legal-move list and the draw
/// detector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub to_move: Mark,
    pub board: Board,
    pub utility: i8,
    pub remaining: Vec<Coord>,
}

impl GameState {
    /// The mark that completed a winning line, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.utility {
            utility if utility > 0 => Some(Mark::X),
            utility if utility < 0 => Some(Mark::O),
            _ => None,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
