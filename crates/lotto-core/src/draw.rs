//! Draw — winning numbers plus bonus ball

use serde::{Deserialize, Serialize};

use crate::constants::{NUMBER_MAX, NUMBER_MIN, in_range};
use crate::error::BonusError;
use crate::ticket::Ticket;

/// Winning numbers and a bonus number that is not among them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDraw")]
pub struct Draw {
    winning: Ticket,
    bonus: u8,
}

/// Unchecked wire form; goes through [`Draw::new`] on the way in
#[derive(Deserialize)]
struct RawDraw {
    winning: Ticket,
    bonus: i64,
}

impl TryFrom<RawDraw> for Draw {
    type Error = BonusError;

    fn try_from(raw: RawDraw) -> Result<Self, Self::Error> {
        Draw::new(raw.winning, raw.bonus)
    }
}

impl Draw {
    /// Pair validated winning numbers with a bonus number
    pub fn new(winning: Ticket, bonus: i64) -> Result<Self, BonusError> {
        let bonus = validate_bonus(bonus, &winning)?;
        Ok(Self { winning, bonus })
    }

    /// The six winning numbers
    pub fn winning_numbers(&self) -> &[u8] {
        self.winning.numbers()
    }

    /// Winning numbers as a ticket
    pub fn winning(&self) -> &Ticket {
        &self.winning
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }
}

/// Check a bonus candidate against the range and the winning numbers
pub fn validate_bonus(bonus: i64, winning: &Ticket) -> Result<u8, BonusError> {
    if !in_range(bonus) {
        return Err(BonusError::OutOfRange {
            value: bonus,
            min: NUMBER_MIN,
            max: NUMBER_MAX,
        });
    }
    let bonus = bonus as u8;
    if winning.contains(bonus) {
        return Err(BonusError::DuplicatedWithWinning(bonus));
    }
    Ok(bonus)
}
