//! Fixed game rules

/// Price of a single ticket
pub const TICKET_PRICE: u64 = 1_000;

/// Most tickets a single purchase may buy
pub const MAX_TICKETS_PER_PURCHASE: usize = 100_000;

/// Numbers printed on every ticket (and drawn as winning numbers)
pub const NUMBERS_PER_TICKET: usize = 6;

/// Smallest valid lotto number
pub const NUMBER_MIN: u8 = 1;

/// Largest valid lotto number
pub const NUMBER_MAX: u8 = 45;

/// Separator between numbers in raw winning-number input
pub const DEFAULT_SEPARATOR: char = ',';

/// Replay answer that starts a new round
pub const CONFIRM_TOKEN: &str = "y";

/// Replay answer that ends the game
pub const REJECT_TOKEN: &str = "n";

/// Whether `value` lies in the lotto number range
#[inline]
pub fn in_range(value: i64) -> bool {
    (NUMBER_MIN as i64..=NUMBER_MAX as i64).contains(&value)
}
