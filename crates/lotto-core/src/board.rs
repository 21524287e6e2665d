//! Reward board — per-tier win counts for a batch of tickets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::draw::Draw;
use crate::reward::RewardTier;
use crate::ticket::Ticket;

/// Count of winning tickets per tier.
///
/// Every tier is always present, zero when nothing matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBoard")]
pub struct RewardBoard {
    counts: BTreeMap<RewardTier, usize>,
}

/// Wire form; tiers missing from it are read as zero
#[derive(Deserialize)]
struct RawBoard {
    #[serde(default)]
    counts: BTreeMap<RewardTier, usize>,
}

impl From<RawBoard> for RewardBoard {
    fn from(raw: RawBoard) -> Self {
        let mut board = Self::new();
        board.counts.extend(raw.counts);
        board
    }
}

impl Default for RewardBoard {
    fn default() -> Self {
        Self {
            counts: RewardTier::ALL.iter().map(|&tier| (tier, 0)).collect(),
        }
    }
}

impl RewardBoard {
    /// Empty board with all tiers at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every ticket against the draw and count the tiers won
    pub fn tally(tickets: &[Ticket], draw: &Draw) -> Self {
        let mut board = Self::new();
        for ticket in tickets {
            if let Some(tier) = ticket.check(draw).tier() {
                board.record(tier);
            }
        }
        board
    }

    /// Add one winning ticket to a tier
    pub fn record(&mut self, tier: RewardTier) {
        *self.counts.entry(tier).or_insert(0) += 1;
    }

    /// Winning tickets in `tier`
    pub fn count(&self, tier: RewardTier) -> usize {
        self.counts.get(&tier).copied().unwrap_or(0)
    }

    /// Tiers with their counts, FIFTH → FIRST
    pub fn iter(&self) -> impl Iterator<Item = (RewardTier, usize)> + '_ {
        self.counts.iter().map(|(&tier, &count)| (tier, count))
    }

    /// Tickets that won anything
    pub fn winners(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sum of count × prize over all tiers
    pub fn total_prize(&self) -> u64 {
        self.iter()
            .map(|(tier, count)| tier.prize() * count as u64)
            .sum()
    }

    /// Fold another board into this one
    pub fn merge(&mut self, other: &RewardBoard) {
        for (tier, count) in other.iter() {
            *self.counts.entry(tier).or_insert(0) += count;
        }
    }
}
