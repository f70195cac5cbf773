use engine::{GameEngine, IllegalMove};

use crate::{Action, Board, Coord, GameState, InvalidConfiguration, Mark, Value};

/// The four line orientations a win can lie along. Each is walked in both
/// directions from the cell just played.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, -1), (1, 1)];

/// Rules for a `height` x `width` board where `win_length` marks in a row,
/// column, or diagonal win. Owns no mutable state; every operation is a
/// pure function of the configuration and a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    height: usize,
    width: usize,
    win_length: usize,
}

impl Engine {
    pub fn new(
        height: usize,
        width: usize,
        win_length: usize,
    ) -> Result<Self, InvalidConfiguration> {
        if height == 0 || width == 0 {
            return Err(InvalidConfiguration::EmptyBoard { height, width });
        }

        if win_length == 0 {
            return Err(InvalidConfiguration::ZeroWinLength);
        }

        // A win line can run along either axis, so the length only has to
        // fit one of the two dimensions.
        if win_length > height && win_length > width {
            return Err(InvalidConfiguration::UnwinnableBoard {
                win_length,
                height,
                width,
            });
        }

        Ok(Self {
            height,
            width,
            win_length,
        })
    }

    /// Standard 3x3 tic-tac-toe.
    pub fn standard() -> Self {
        Self {
            height: 3,
            width: 3,
            win_length: 3,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Length of the run of `mark` cells through `coord` along one
    /// orientation: walk forward, walk backward, and un-count the origin
    /// cell the two walks share.
    fn run_length(&self, board: &Board, coord: Coord, mark: Mark, direction: (i32, i32)) -> usize {
        let (row_delta, col_delta) = direction;
        let mut count = 0;

        for delta_sign in [1, -1] {
            let mut row = coord.row as i32;
            let mut col = coord.col as i32;

            while row >= 0
                && row < self.height as i32
                && col >= 0
                && col < self.width as i32
                && board.get(row as usize, col as usize) == Some(mark)
            {
                count += 1;
                row += row_delta * delta_sign;
                col += col_delta * delta_sign;
            }
        }

        count - 1
    }

    /// Whether placing `mark` at `coord` completed a winning line. Seeded
    /// at the cell just played, so no full-board scan is ever needed: a
    /// win that does not pass through the latest move would already have
    /// ended the game on an earlier move.
    fn is_winning_move(&self, board: &Board, coord: Coord, mark: Mark) -> bool {
        DIRECTIONS
            .iter()
            .any(|&direction| self.run_length(board, coord, mark, direction) >= self.win_length)
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Value = Value;

    fn initial_state(&self) -> GameState {
        let remaining = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Coord::new(row, col)))
            .collect();

        GameState {
            to_move: Mark::X,
            board: Board::empty(self.height, self.width),
            utility: 0,
            remaining,
        }
    }

    fn valid_actions(&self, game_state: &GameState) -> Vec<Action> {
        game_state
            .remaining
            .iter()
            .map(|&coord| Action::Place(coord))
            .collect()
    }

    fn take_action(
        &self,
        game_state: &GameState,
        action: &Action,
    ) -> Result<GameState, IllegalMove<Action>> {
        let coord = action.coord();

        if !game_state.remaining.contains(&coord) {
            return Err(IllegalMove::new(*action));
        }

        let mover = game_state.to_move;
        let board = game_state.board.with_mark(coord, mover);

        let utility = if self.is_winning_move(&board, coord, mover) {
            mover.sign()
        } else {
            0
        };

        let remaining = game_state
            .remaining
            .iter()
            .copied()
            .filter(|&cell| cell != coord)
            .collect();

        Ok(GameState {
            to_move: mover.opponent(),
            board,
            utility,
            remaining,
        })
    }

    fn terminal_state(&self, game_state: &GameState) -> Option<Value> {
        match game_state.winner() {
            Some(mark) => Some(Value::win_for(mark)),
            None if game_state.remaining.is_empty() => Some(Value::draw()),
            None => None,
        }
    }

    fn player_to_move(&self, game_state: &GameState) -> usize {
        game_state.to_move.player_id()
    }

    fn move_number(&self, game_state: &GameState) -> usize {
        game_state.board.marks_placed() + 1
    }
}
