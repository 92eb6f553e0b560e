use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Three-way sign classification used for P&L and day change display.
///
/// Exactly zero is its own case; it is never folded into gain or loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Gain,
    Loss,
    Neutral,
}

impl Direction {
    pub fn of(amount: Decimal) -> Self {
        if amount.is_zero() {
            Direction::Neutral
        } else if amount.is_sign_positive() {
            Direction::Gain
        } else {
            Direction::Loss
        }
    }
}
