use crate::Mark;

/// Zero-sum final score, one entry per player in id order.
#[derive(Clone, Debug, PartialEq)]
pub struct Value(pub [f32; 2]);

impl Value {
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Value([1.0, -1.0]),
            Mark::O => Value([-1.0, 1.0]),
        }
    }

    pub fn draw() -> Self {
        Value([0.0, 0.0])
    }
}

impl engine::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player - 1]
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Value({}, {})", self.0[0], self.0[1])
    }
}
