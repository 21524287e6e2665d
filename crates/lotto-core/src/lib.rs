//! # lotto-core — ticket model and prize engine
//!
//! Pure domain logic for the lotto game: no I/O, no prompts.
//!
//! ## Architecture
//!
//! ```text
//! TicketMachine ── NumberGenerator (random / fixed)
//!     │
//!     v
//! Vec<Ticket> ──┐
//!               ├─> RewardBoard::tally ─> total_prize ─> Exchange::rate_of_return
//! Draw ─────────┘        │
//!                        └── RewardTier::classify(MatchProfile)
//! ```

pub mod board;
pub mod constants;
pub mod draw;
pub mod error;
pub mod exchange;
pub mod generator;
pub mod machine;
pub mod parse;
pub mod reward;
pub mod ticket;

pub use board::RewardBoard;
pub use constants::*;
pub use draw::Draw;
pub use error::{BonusError, LottoError, LottoResult, NumbersError, PurchaseError};
pub use exchange::Exchange;
pub use generator::{FixedNumberGenerator, NumberGenerator, RandomNumberGenerator};
pub use machine::{TicketMachine, purchase_quantity};
pub use parse::*;
pub use reward::{MatchProfile, RewardTier};
pub use ticket::Ticket;
