//! Roll budget and mutable die state

use serde::{Deserialize, Serialize};

/// How many user-triggered rolls a die still accepts.
///
/// Serialized as an optional count: `null` / `None` means unlimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum RollBudget {
    Limited(u32),
    Unlimited,
}

impl RollBudget {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, RollBudget::Limited(0))
    }

    /// Budget after one accepted roll. Saturates at zero.
    pub fn consume(self) -> Self {
        match self {
            RollBudget::Limited(n) => RollBudget::Limited(n.saturating_sub(1)),
            RollBudget::Unlimited => RollBudget::Unlimited,
        }
    }

    pub fn remaining(&self) -> Option<u32> {
        match self {
            RollBudget::Limited(n) => Some(*n),
            RollBudget::Unlimited => None,
        }
    }
}

impl Default for RollBudget {
    fn default() -> Self {
        RollBudget::Limited(10_000)
    }
}

impl From<Option<u32>> for RollBudget {
    fn from(value: Option<u32>) -> Self {
        value.map_or(RollBudget::Unlimited, RollBudget::Limited)
    }
}

impl From<RollBudget> for Option<u32> {
    fn from(value: RollBudget) -> Self {
        value.remaining()
    }
}

impl std::fmt::Display for RollBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollBudget::Limited(n) => write!(f, "{n}"),
            RollBudget::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// State owned by the die controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DieState {
    /// Face currently displayed, always within the configured range once connected
    pub current_face: u32,
    pub rolls_remaining: RollBudget,
    /// Accepted user rolls so far; only ever incremented
    pub rolls_performed: u64,
}

impl DieState {
    pub fn new(initial_face: u32, budget: RollBudget) -> Self {
        Self {
            current_face: initial_face,
            rolls_remaining: budget,
            rolls_performed: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.rolls_remaining.is_exhausted()
    }

    /// Extra whole turns applied to the die so consecutive rolls always animate,
    /// even when the same face comes up twice.
    pub fn rotation_offset_turns(&self, roll_time_seconds: f64) -> i64 {
        (self.rolls_performed as i64 - 1).saturating_mul(roll_time_seconds.floor() as i64)
    }
}
