//! Per-round state owned by the game controller

use serde::Serialize;

use lotto_core::{Draw, RewardBoard, Ticket};

/// Everything one round accumulates.
///
/// Only the controller mutates it; everyone else gets the read-only
/// accessors. `Default` is the empty state a round starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoundState {
    spend: u64,
    tickets: Vec<Ticket>,
    winning_numbers: Option<Ticket>,
    draw: Option<Draw>,
    board: Option<RewardBoard>,
    total_prize: u64,
    rate_of_return: Option<f64>,
}

impl RoundState {
    /// Money spent this round (0 before purchase)
    pub fn spend(&self) -> u64 {
        self.spend
    }

    /// Purchased tickets in issue order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn winning_numbers(&self) -> Option<&Ticket> {
        self.winning_numbers.as_ref()
    }

    pub fn bonus(&self) -> Option<u8> {
        self.draw.map(|d| d.bonus())
    }

    /// Winning numbers plus bonus, once both are entered
    pub fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }

    /// Per-tier counts, once the round is finalized
    pub fn board(&self) -> Option<&RewardBoard> {
        self.board.as_ref()
    }

    pub fn total_prize(&self) -> u64 {
        self.total_prize
    }

    pub fn rate_of_return(&self) -> Option<f64> {
        self.rate_of_return
    }

    /// Whether nothing has been committed yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn commit_purchase(&mut self, spend: u64, tickets: Vec<Ticket>) {
        self.spend = spend;
        self.tickets = tickets;
    }

    pub(crate) fn commit_winning_numbers(&mut self, winning: Ticket) {
        self.winning_numbers = Some(winning);
    }

    pub(crate) fn commit_draw(&mut self, draw: Draw) {
        self.draw = Some(draw);
    }

    pub(crate) fn commit_result(&mut self, board: RewardBoard, total_prize: u64, rate: f64) {
        self.board = Some(board);
        self.total_prize = total_prize;
        self.rate_of_return = Some(rate);
    }

    /// Drop everything back to the empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
