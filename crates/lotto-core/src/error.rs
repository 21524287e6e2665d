//! Error types for ticket validation and game input

use thiserror::Error;

use crate::constants::{NUMBER_MAX, NUMBER_MIN};

/// Why a set of lotto numbers was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumbersError {
    /// Wrong amount of numbers
    #[error("expected {expected} numbers, got {got}")]
    UnmatchedQuantity { expected: usize, got: usize },

    /// Same number appears twice
    #[error("number {0} appears more than once")]
    Duplicated(u8),

    /// Number outside the lotto range
    #[error("number {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },

    /// Token could not be read as a number
    #[error("'{0}' is not a number")]
    NotNumeric(String),
}

impl NumbersError {
    pub(crate) fn out_of_range(value: i64) -> Self {
        Self::OutOfRange {
            value,
            min: NUMBER_MIN,
            max: NUMBER_MAX,
        }
    }
}

/// Why a purchase amount was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("'{0}' is not a whole number")]
    NotNumeric(String),

    #[error("amount must be positive, got {0}")]
    NotPositive(i64),

    #[error("amount {amount} is not a multiple of the ticket price {price}")]
    NotMultipleOfPrice { amount: u64, price: u64 },

    #[error("amount buys {quantity} tickets, at most {max} per purchase")]
    TooMany { quantity: u64, max: usize },
}

/// Why a bonus number was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BonusError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),

    #[error("bonus {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },

    #[error("bonus {0} is already one of the winning numbers")]
    DuplicatedWithWinning(u8),
}

/// Lotto error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    /// Ticket numbers violate the ticket invariant
    #[error("Invalid ticket: {0}")]
    InvalidTicket(NumbersError),

    /// Purchase amount rejected
    #[error("Invalid purchase amount: {0}")]
    InvalidPurchaseAmount(PurchaseError),

    /// Winning numbers rejected
    #[error("Invalid winning numbers: {0}")]
    InvalidWinningNumbers(NumbersError),

    /// Bonus number rejected
    #[error("Invalid bonus number: {0}")]
    InvalidBonus(BonusError),

    /// Replay answer was not one of the accepted tokens
    #[error("Invalid replay choice '{got}': answer '{confirm}' or '{reject}'")]
    InvalidRetryChoice {
        got: String,
        confirm: String,
        reject: String,
    },

    /// Number generator produced numbers that do not form a ticket
    #[error("Number generator defect: {0}")]
    GeneratorDefect(NumbersError),
}

impl LottoError {
    /// User input errors are recoverable by asking again; defects are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::GeneratorDefect(_))
    }
}

impl From<PurchaseError> for LottoError {
    fn from(err: PurchaseError) -> Self {
        Self::InvalidPurchaseAmount(err)
    }
}

impl From<BonusError> for LottoError {
    fn from(err: BonusError) -> Self {
        Self::InvalidBonus(err)
    }
}

/// Result type for lotto operations
pub type LottoResult<T> = Result<T, LottoError>;
