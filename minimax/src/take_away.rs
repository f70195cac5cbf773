//! A tiny take-away game used to exercise the strategies against a second
//! engine: a heap of counters, each move removes one or two, and whoever
//! takes the last counter wins. Positions with a multiple of three
//! counters are lost for the player to move, so optimal play is easy to
//! assert against.

use engine::{GameEngine, IllegalMove};

#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct TakeAwayState {
    pub p1_turn: bool,
    pub counters: usize,
    pub moves_played: usize,
}

#[derive(Clone)]
pub struct Value(pub [f32; 2]);

impl engine::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player - 1]
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TakeAwayAction {
    TakeOne,
    TakeTwo,
}

impl TakeAwayAction {
    fn count(self) -> usize {
        match self {
            TakeAwayAction::TakeOne => 1,
            TakeAwayAction::TakeTwo => 2,
        }
    }
}

pub struct TakeAwayEngine {
    start: usize,
}

impl TakeAwayEngine {
    pub fn new(start: usize) -> Self {
        Self { start }
    }
}

impl GameEngine for TakeAwayEngine {
    type Action = TakeAwayAction;
    type State = TakeAwayState;
    type Value = Value;

    fn initial_state(&self) -> TakeAwayState {
        TakeAwayState {
            p1_turn: true,
            counters: self.start,
            moves_played: 0,
        }
    }

    fn valid_actions(&self, game_state: &TakeAwayState) -> Vec<TakeAwayAction> {
        match game_state.counters {
            0 => vec![],
            1 => vec![TakeAwayAction::TakeOne],
            _ => vec![TakeAwayAction::TakeOne, TakeAwayAction::TakeTwo],
        }
    }

    fn take_action(
        &self,
        game_state: &TakeAwayState,
        action: &TakeAwayAction,
    ) -> Result<TakeAwayState, IllegalMove<TakeAwayAction>> {
        if action.count() > game_state.counters {
            return Err(IllegalMove::new(*action));
        }

        Ok(TakeAwayState {
            p1_turn: !game_state.p1_turn,
            counters: game_state.counters - action.count(),
            moves_played: game_state.moves_played + 1,
        })
    }

    fn terminal_state(&self, game_state: &TakeAwayState) -> Option<Value> {
        if game_state.counters > 0 {
            return None;
        }

        // The player who took the last counter is the one not to move.
        Some(if game_state.p1_turn {
            Value([-1.0, 1.0])
        } else {
            Value([1.0, -1.0])
        })
    }

    fn player_to_move(&self, game_state: &TakeAwayState) -> usize {
        if game_state.p1_turn {
            1
        } else {
            2
        }
    }

    fn move_number(&self, game_state: &TakeAwayState) -> usize {
        game_state.moves_played + 1
    }
}
