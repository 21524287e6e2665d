//! Input/output surfaces the game controller talks to
//!
//! The controller never touches stdin/stdout directly; the console view,
//! tests and any other front end plug in here.

use std::io;

use lotto_core::RewardTier;

/// Where raw answers come from.
///
/// Each call blocks until one answer is available. End of input is
/// reported as [`io::ErrorKind::UnexpectedEof`].
pub trait InputSurface {
    fn request_purchase_amount(&mut self) -> io::Result<String>;
    fn request_winning_numbers(&mut self) -> io::Result<String>;
    fn request_bonus_number(&mut self) -> io::Result<String>;
    fn request_replay_choice(&mut self) -> io::Result<String>;
}

/// Where game results are reported.
///
/// Tier lines arrive FIFTH → FIRST, every tier included even at zero.
pub trait OutputSurface {
    fn report_purchase_count(&mut self, count: usize) -> io::Result<()>;

    fn report_ticket_numbers(&mut self, numbers: &[u8]) -> io::Result<()>;

    /// Printed once before the tier lines
    fn report_statistics_header(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn report_tier_line(
        &mut self,
        tier: RewardTier,
        prize: u64,
        has_bonus: bool,
        count: usize,
    ) -> io::Result<()>;

    fn report_return_rate(&mut self, percent: f64) -> io::Result<()>;

    fn report_error(&mut self, message: &str) -> io::Result<()>;
}

impl<T: InputSurface + ?Sized> InputSurface for &mut T {
    fn request_purchase_amount(&mut self) -> io::Result<String> {
        (**self).request_purchase_amount()
    }

    fn request_winning_numbers(&mut self) -> io::Result<String> {
        (**self).request_winning_numbers()
    }

    fn request_bonus_number(&mut self) -> io::Result<String> {
        (**self).request_bonus_number()
    }

    fn request_replay_choice(&mut self) -> io::Result<String> {
        (**self).request_replay_choice()
    }
}

impl<T: OutputSurface + ?Sized> OutputSurface for &mut T {
    fn report_purchase_count(&mut self, count: usize) -> io::Result<()> {
        (**self).report_purchase_count(count)
    }

    fn report_ticket_numbers(&mut self, numbers: &[u8]) -> io::Result<()> {
        (**self).report_ticket_numbers(numbers)
    }

    fn report_statistics_header(&mut self) -> io::Result<()> {
        (**self).report_statistics_header()
    }

    fn report_tier_line(
        &mut self,
        tier: RewardTier,
        prize: u64,
        has_bonus: bool,
        count: usize,
    ) -> io::Result<()> {
        (**self).report_tier_line(tier, prize, has_bonus, count)
    }

    fn report_return_rate(&mut self, percent: f64) -> io::Result<()> {
        (**self).report_return_rate(percent)
    }

    fn report_error(&mut self, message: &str) -> io::Result<()> {
        (**self).report_error(message)
    }
}
