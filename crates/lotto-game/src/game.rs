//! Lotto game controller — purchase → draw → results → replay
//!
//! Each interactive step runs in its own retry loop: invalid input is
//! reported and the same step is asked again, without touching what
//! earlier steps committed.

use std::fmt;
use std::io;

use log::{Level, debug, error, info, log_enabled, warn};
use thiserror::Error;

use lotto_core::{
    Exchange, LottoError, NumberGenerator, ReplayChoice, RewardBoard, TicketMachine, parse_draw,
    parse_purchase, parse_replay_choice, parse_winning_numbers,
};

use crate::config::GameConfig;
use crate::state::RoundState;
use crate::surface::{InputSurface, OutputSurface};

/// Where the controller is in the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    AwaitingPurchase,
    AwaitingWinningNumbers,
    AwaitingBonus,
    Computed,
    AwaitingReplayChoice,
    Terminated,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingPurchase => "purchase",
            Self::AwaitingWinningNumbers => "winning numbers",
            Self::AwaitingBonus => "bonus number",
            Self::Computed => "results",
            Self::AwaitingReplayChoice => "replay choice",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameExit {
    /// Player declined to replay
    Finished { rounds: u32 },
}

/// Failures the retry protocol cannot recover from
#[derive(Error, Debug)]
pub enum GameFault {
    /// Input or output surface failed (including end of input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Internal invariant violated
    #[error("Internal defect: {0}")]
    Defect(LottoError),

    /// Step called before the steps it depends on
    #[error("Step '{0}' reached before its prerequisites")]
    OutOfOrder(GamePhase),
}

/// Outcome of one attempt at a step
enum StepError {
    Rejected(LottoError),
    Fault(GameFault),
}

impl From<LottoError> for StepError {
    fn from(err: LottoError) -> Self {
        if err.is_recoverable() {
            Self::Rejected(err)
        } else {
            Self::Fault(GameFault::Defect(err))
        }
    }
}

impl From<io::Error> for StepError {
    fn from(err: io::Error) -> Self {
        Self::Fault(GameFault::Io(err))
    }
}

/// Interactive lotto game
pub struct LottoGame<I, O, G> {
    input: I,
    output: O,
    machine: TicketMachine<G>,
    config: GameConfig,
    state: RoundState,
    phase: GamePhase,
    rounds_played: u32,
}

impl<I, O, G> LottoGame<I, O, G>
where
    I: InputSurface,
    O: OutputSurface,
    G: NumberGenerator,
{
    pub fn new(input: I, output: O, machine: TicketMachine<G>, config: GameConfig) -> Self {
        Self {
            input,
            output,
            machine,
            config,
            state: RoundState::default(),
            phase: GamePhase::Idle,
            rounds_played: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn machine(&self) -> &TicketMachine<G> {
        &self.machine
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Rounds that reached the results screen
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // FLOW
    // ═══════════════════════════════════════════════════════════════════════════

    /// Play rounds until the player declines to replay
    pub fn run(&mut self) -> Result<GameExit, GameFault> {
        info!("Lotto game started");
        loop {
            self.play_round()?;
            match self.ask_replay()? {
                ReplayChoice::Replay => continue,
                ReplayChoice::Quit => {
                    info!("Lotto game finished after {} rounds", self.rounds_played);
                    return Ok(GameExit::Finished {
                        rounds: self.rounds_played,
                    });
                }
            }
        }
    }

    /// Purchase, winning numbers, bonus, results
    pub fn play_round(&mut self) -> Result<(), GameFault> {
        self.buy_tickets()?;
        self.set_winning_numbers()?;
        self.set_bonus()
    }

    /// Ask for money until a valid amount buys tickets
    pub fn buy_tickets(&mut self) -> Result<(), GameFault> {
        self.with_retry(GamePhase::AwaitingPurchase, |game| {
            let raw = game.input.request_purchase_amount()?;
            let spend = parse_purchase(&raw).map_err(LottoError::from)?;
            let tickets = game.machine.buy(spend)?;
            info!("Purchased {} tickets for {}", tickets.len(), spend);

            game.state.commit_purchase(spend, tickets);
            game.output.report_purchase_count(game.state.tickets().len())?;
            if game.config.show_tickets {
                for ticket in game.state.tickets() {
                    game.output.report_ticket_numbers(ticket.numbers())?;
                }
            }
            Ok(())
        })?;
        self.phase = GamePhase::AwaitingWinningNumbers;
        Ok(())
    }

    /// Ask for the six winning numbers
    pub fn set_winning_numbers(&mut self) -> Result<(), GameFault> {
        if self.state.tickets().is_empty() {
            return Err(GameFault::OutOfOrder(GamePhase::AwaitingWinningNumbers));
        }
        self.with_retry(GamePhase::AwaitingWinningNumbers, |game| {
            let raw = game.input.request_winning_numbers()?;
            let winning = parse_winning_numbers(&raw, game.config.separator)
                .map_err(LottoError::InvalidWinningNumbers)?;
            debug!("Winning numbers: {}", winning);
            game.state.commit_winning_numbers(winning);
            Ok(())
        })?;
        self.phase = GamePhase::AwaitingBonus;
        Ok(())
    }

    /// Ask for the bonus number, then finalize the round
    pub fn set_bonus(&mut self) -> Result<(), GameFault> {
        let winning = *self
            .state
            .winning_numbers()
            .ok_or(GameFault::OutOfOrder(GamePhase::AwaitingBonus))?;

        self.with_retry(GamePhase::AwaitingBonus, |game| {
            let raw = game.input.request_bonus_number()?;
            let draw = parse_draw(&raw, winning).map_err(LottoError::from)?;
            debug!("Bonus number: {}", draw.bonus());
            game.state.commit_draw(draw);
            Ok(())
        })?;
        self.finalize_round()
    }

    /// Check tickets, tally tiers, total prize and return rate in one go.
    ///
    /// None of these can fail validation, so there is no retry here.
    fn finalize_round(&mut self) -> Result<(), GameFault> {
        let draw = *self
            .state
            .draw()
            .ok_or(GameFault::OutOfOrder(GamePhase::Computed))?;
        let spend = self.state.spend();
        if spend == 0 {
            return Err(GameFault::OutOfOrder(GamePhase::Computed));
        }

        let board = RewardBoard::tally(self.state.tickets(), &draw);
        let total_prize = board.total_prize();
        let rate = Exchange::rate_of_return(spend, total_prize);
        self.state.commit_result(board, total_prize, rate);
        self.phase = GamePhase::Computed;
        self.rounds_played += 1;
        info!(
            "Round {} settled: {} winning tickets, prize {}, return {:.1}%",
            self.rounds_played,
            self.state.board().map(RewardBoard::winners).unwrap_or(0),
            total_prize,
            rate
        );
        if log_enabled!(Level::Debug) {
            match serde_json::to_string(&self.state) {
                Ok(json) => debug!("Round state: {}", json),
                Err(err) => warn!("Round state not serializable: {}", err),
            }
        }

        self.output.report_statistics_header()?;
        if let Some(board) = self.state.board() {
            for (tier, count) in board.iter() {
                self.output
                    .report_tier_line(tier, tier.prize(), tier.requires_bonus(), count)?;
            }
        }
        self.output.report_return_rate(rate)?;
        Ok(())
    }

    /// Ask whether to play again. Either answer clears the round state.
    pub fn ask_replay(&mut self) -> Result<ReplayChoice, GameFault> {
        let choice = self.with_retry(GamePhase::AwaitingReplayChoice, |game| {
            let raw = game.input.request_replay_choice()?;
            let choice =
                parse_replay_choice(&raw, &game.config.confirm_token, &game.config.reject_token)?;
            Ok(choice)
        })?;

        self.state.reset();
        self.phase = match choice {
            ReplayChoice::Replay => GamePhase::Idle,
            ReplayChoice::Quit => GamePhase::Terminated,
        };
        debug!("Replay choice: {:?}", choice);
        Ok(choice)
    }

    /// Repeat `attempt` until it succeeds or hits a fault
    fn with_retry<T, F>(&mut self, step: GamePhase, mut attempt: F) -> Result<T, GameFault>
    where
        F: FnMut(&mut Self) -> Result<T, StepError>,
    {
        self.phase = step;
        debug!("Awaiting {}", step);
        loop {
            match attempt(self) {
                Ok(value) => return Ok(value),
                Err(StepError::Rejected(err)) => {
                    warn!("Rejected {} input: {}", step, err);
                    self.output.report_error(&err.to_string())?;
                }
                Err(StepError::Fault(fault)) => {
                    error!("Aborting at {}: {}", step, fault);
                    return Err(fault);
                }
            }
        }
    }
}
