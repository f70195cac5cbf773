use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use crate::Coord;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    Place(Coord),
}

impl Action {
    pub fn coord(&self) -> Coord {
        let Action::Place(coord) = self;
        *coord
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    /// Parses `"row,col"` into a placement. Bounds are not checked here;
    /// an out-of-range cell is rejected when the action is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected a move of the form row,col"))?;

        let row = row.trim().parse()?;
        let col = col.trim().parse()?;

        Ok(Action::Place(Coord::new(row, col)))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Action::Place(coord) = self;
        write!(f, "{}", coord)
    }
}
