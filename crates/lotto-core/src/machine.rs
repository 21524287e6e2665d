//! Ticket machine — turns money into tickets

use log::debug;

use crate::constants::{
    MAX_TICKETS_PER_PURCHASE, NUMBER_MAX, NUMBER_MIN, NUMBERS_PER_TICKET, TICKET_PRICE,
};
use crate::error::{LottoError, LottoResult, PurchaseError};
use crate::generator::NumberGenerator;
use crate::ticket::Ticket;

/// Number of tickets `spend` buys.
///
/// Fails unless `spend` is a positive multiple of [`TICKET_PRICE`] buying
/// at most [`MAX_TICKETS_PER_PURCHASE`] tickets.
pub fn purchase_quantity(spend: u64) -> Result<usize, PurchaseError> {
    if spend == 0 {
        return Err(PurchaseError::NotPositive(0));
    }
    if spend % TICKET_PRICE != 0 {
        return Err(PurchaseError::NotMultipleOfPrice {
            amount: spend,
            price: TICKET_PRICE,
        });
    }
    let quantity = spend / TICKET_PRICE;
    if quantity > MAX_TICKETS_PER_PURCHASE as u64 {
        return Err(PurchaseError::TooMany {
            quantity,
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }
    Ok(quantity as usize)
}

/// Issues tickets from an injectable number source
pub struct TicketMachine<G> {
    generator: G,
    issued: u64,
}

impl<G: NumberGenerator> TicketMachine<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            issued: 0,
        }
    }

    /// Buy as many tickets as `spend` pays for
    pub fn buy(&mut self, spend: u64) -> LottoResult<Vec<Ticket>> {
        let quantity = purchase_quantity(spend)?;
        debug!("Buying {} tickets for {}", quantity, spend);
        self.issue(quantity)
    }

    /// Generate `quantity` tickets.
    ///
    /// Numbers that fail ticket validation are a generator defect, not a
    /// user error.
    pub fn issue(&mut self, quantity: usize) -> LottoResult<Vec<Ticket>> {
        let mut tickets = Vec::with_capacity(quantity.min(MAX_TICKETS_PER_PURCHASE));
        for _ in 0..quantity {
            let numbers = self
                .generator
                .pick_unique(NUMBER_MIN, NUMBER_MAX, NUMBERS_PER_TICKET);
            let ticket = Ticket::new(&numbers).map_err(LottoError::GeneratorDefect)?;
            tickets.push(ticket);
        }
        self.issued += quantity as u64;
        Ok(tickets)
    }

    /// Tickets issued over the machine's lifetime
    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }
}
