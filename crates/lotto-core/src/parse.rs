//! Raw text input → validated game values

use crate::draw::Draw;
use crate::error::{BonusError, LottoError, LottoResult, NumbersError, PurchaseError};
use crate::ticket::Ticket;

/// Answer to "play again?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    Replay,
    Quit,
}

/// Split on `separator`, trimming each token
pub fn split_numbers(raw: &str, separator: char) -> Vec<&str> {
    raw.split(separator).map(str::trim).collect()
}

/// Parse a purchase amount.
///
/// Only checks that it is a positive whole number; price divisibility is
/// the ticket machine's rule.
pub fn parse_purchase(raw: &str) -> Result<u64, PurchaseError> {
    let trimmed = raw.trim();
    let amount: i64 = trimmed
        .parse()
        .map_err(|_| PurchaseError::NotNumeric(trimmed.to_string()))?;
    if amount <= 0 {
        return Err(PurchaseError::NotPositive(amount));
    }
    Ok(amount as u64)
}

/// Parse `separator`-delimited winning numbers into a ticket
pub fn parse_winning_numbers(raw: &str, separator: char) -> Result<Ticket, NumbersError> {
    let values = split_numbers(raw, separator)
        .into_iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| NumbersError::NotNumeric(token.to_string()))
        })
        .collect::<Result<Vec<i64>, _>>()?;
    Ticket::new(&values)
}

/// Parse a bonus number and pair it with the winning numbers
pub fn parse_draw(raw: &str, winning: Ticket) -> Result<Draw, BonusError> {
    let trimmed = raw.trim();
    let bonus: i64 = trimmed
        .parse()
        .map_err(|_| BonusError::NotNumeric(trimmed.to_string()))?;
    Draw::new(winning, bonus)
}

/// Match the answer against the two accepted tokens (case-sensitive)
pub fn parse_replay_choice(raw: &str, confirm: &str, reject: &str) -> LottoResult<ReplayChoice> {
    match raw.trim() {
        token if token == confirm => Ok(ReplayChoice::Replay),
        token if token == reject => Ok(ReplayChoice::Quit),
        token => Err(LottoError::InvalidRetryChoice {
            got: token.to_string(),
            confirm: confirm.to_string(),
            reject: reject.to_string(),
        }),
    }
}
