//! Lotto ticket — six distinct numbers in the lotto range

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NUMBERS_PER_TICKET, in_range};
use crate::draw::Draw;
use crate::error::NumbersError;
use crate::reward::MatchProfile;

/// A validated lotto ticket.
///
/// Numbers are kept sorted, so two tickets built from the same set in a
/// different order compare equal and print identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl Ticket {
    /// Build a ticket, checking count, range and uniqueness (in that order).
    pub fn new<T>(numbers: &[T]) -> Result<Self, NumbersError>
    where
        T: Copy + Into<i64>,
    {
        if numbers.len() != NUMBERS_PER_TICKET {
            return Err(NumbersError::UnmatchedQuantity {
                expected: NUMBERS_PER_TICKET,
                got: numbers.len(),
            });
        }

        let mut sorted = [0u8; NUMBERS_PER_TICKET];
        for (slot, &value) in sorted.iter_mut().zip(numbers) {
            let value: i64 = value.into();
            if !in_range(value) {
                return Err(NumbersError::out_of_range(value));
            }
            *slot = value as u8;
        }
        sorted.sort_unstable();

        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(NumbersError::Duplicated(pair[0]));
        }

        Ok(Self { numbers: sorted })
    }

    /// Numbers in ascending order
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Whether the ticket holds `number`
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Size of the intersection between this ticket and `numbers`.
    ///
    /// Order of `numbers` is irrelevant and repeated values count once.
    pub fn matches(&self, numbers: &[u8]) -> usize {
        self.numbers.iter().filter(|n| numbers.contains(n)).count()
    }

    /// Compare against a draw
    pub fn check(&self, draw: &Draw) -> MatchProfile {
        MatchProfile {
            matched_count: self.matches(draw.winning_numbers()) as u8,
            bonus_matched: self.contains(draw.bonus()),
        }
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = NumbersError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(&numbers)
    }
}

impl From<Ticket> for Vec<u8> {
    fn from(ticket: Ticket) -> Self {
        ticket.numbers.to_vec()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str("]")
    }
}
