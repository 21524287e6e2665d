//! Line-based console front end

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use lotto_core::{CONFIRM_TOKEN, DEFAULT_SEPARATOR, REJECT_TOKEN, RewardTier};

use super::format::{format_numbers, format_rate, group_thousands};
use crate::surface::{InputSurface, OutputSurface};

const STATISTICS_TITLE: &str = "Winning statistics";
const STATISTICS_RULE: &str = "--------------------";

/// Prompts on `W`, reads answers line by line from `R`
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
    separator: char,
    confirm_token: String,
    reject_token: String,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read stdin
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            separator: DEFAULT_SEPARATOR,
            confirm_token: CONFIRM_TOKEN.to_string(),
            reject_token: REJECT_TOKEN.to_string(),
        }
    }

    /// Separator named in the winning-numbers prompt
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Tokens named in the replay prompt
    pub fn with_replay_tokens(mut self, confirm: &str, reject: &str) -> Self {
        self.confirm_token = confirm.to_string();
        self.reject_token = reject.to_string();
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.prompt, "{}", prompt)?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> InputSurface for ConsoleInput<R, W> {
    fn request_purchase_amount(&mut self) -> io::Result<String> {
        self.ask("Enter the purchase amount.")
    }

    fn request_winning_numbers(&mut self) -> io::Result<String> {
        let prompt = format!("\nEnter the winning numbers, separated by '{}'.", self.separator);
        self.ask(&prompt)
    }

    fn request_bonus_number(&mut self) -> io::Result<String> {
        self.ask("\nEnter the bonus number.")
    }

    fn request_replay_choice(&mut self) -> io::Result<String> {
        let prompt = format!(
            "\nPlay again? ({}/{})",
            self.confirm_token, self.reject_token
        );
        self.ask(&prompt)
    }
}

/// Prints game reports to `W`
pub struct ConsoleOutput<W> {
    out: W,
    currency: String,
}

impl ConsoleOutput<Stdout> {
    pub fn stdout(currency: &str) -> Self {
        Self::new(io::stdout(), currency)
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(out: W, currency: &str) -> Self {
        Self {
            out,
            currency: currency.to_string(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSurface for ConsoleOutput<W> {
    fn report_purchase_count(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "\n{} tickets purchased.", count)
    }

    fn report_ticket_numbers(&mut self, numbers: &[u8]) -> io::Result<()> {
        writeln!(self.out, "{}", format_numbers(numbers))
    }

    fn report_statistics_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", STATISTICS_TITLE)?;
        writeln!(self.out, "{}", STATISTICS_RULE)
    }

    fn report_tier_line(
        &mut self,
        tier: RewardTier,
        prize: u64,
        has_bonus: bool,
        count: usize,
    ) -> io::Result<()> {
        let bonus = if has_bonus { ", bonus ball matched" } else { "" };
        writeln!(
            self.out,
            "{} matches{} ({} {}) - {} tickets",
            tier.matched_count(),
            bonus,
            group_thousands(prize),
            self.currency,
            count
        )
    }

    fn report_return_rate(&mut self, percent: f64) -> io::Result<()> {
        writeln!(self.out, "Total return rate is {}%.", format_rate(percent))?;
        self.out.flush()
    }

    fn report_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "[ERROR] {}", message)?;
        self.out.flush()
    }
}
