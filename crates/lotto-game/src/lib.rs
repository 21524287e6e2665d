//! # lotto-game — interactive lotto purchase-and-check game
//!
//! Drives a round end to end: buy tickets, enter winning numbers and the
//! bonus ball, report per-tier wins and return rate, then offer a replay.
//!
//! ## Architecture
//!
//! ```text
//! InputSurface ──> LottoGame ──> OutputSurface
//!                    │  owns RoundState + GamePhase
//!                    v
//!              lotto-core (TicketMachine, RewardBoard, Exchange)
//! ```
//!
//! The console view implements both surfaces for the `lotto` binary; tests
//! plug in scripted doubles.

pub mod config;
pub mod game;
pub mod state;
pub mod surface;
pub mod view;

pub use config::{ConfigError, GameConfig};
pub use game::{GameExit, GameFault, GamePhase, LottoGame};
pub use state::RoundState;
pub use surface::{InputSurface, OutputSurface};
pub use view::{ConsoleInput, ConsoleOutput};
