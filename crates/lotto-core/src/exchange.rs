//! Return-rate calculation

/// Converts spend and prize totals into a return percentage
#[derive(Debug, Clone, Copy, Default)]
pub struct Exchange;

impl Exchange {
    /// `total_prize / spend × 100`, unrounded.
    ///
    /// `spend` must be positive; callers validate the purchase first.
    pub fn rate_of_return(spend: u64, total_prize: u64) -> f64 {
        debug_assert!(spend > 0, "spend must be validated before computing a return rate");
        total_prize as f64 / spend as f64 * 100.0
    }
}
