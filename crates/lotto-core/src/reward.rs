//! Reward tiers — match-count classification and prize table

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of checking one ticket against a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchProfile {
    /// Ticket numbers that are winning numbers (0-6)
    pub matched_count: u8,
    /// Ticket holds the bonus number
    pub bonus_matched: bool,
}

impl MatchProfile {
    /// Tier this profile wins, if any
    pub fn tier(&self) -> Option<RewardTier> {
        RewardTier::classify(self.matched_count, self.bonus_matched)
    }
}

/// Prize tier.
///
/// Declared lowest first; `Ord` follows the order results are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RewardTier {
    #[serde(rename = "MATCH_3")]
    Fifth,
    #[serde(rename = "MATCH_4")]
    Fourth,
    #[serde(rename = "MATCH_5")]
    Third,
    #[serde(rename = "MATCH_5_WITH_BONUS")]
    Second,
    #[serde(rename = "MATCH_6")]
    First,
}

impl RewardTier {
    /// All tiers in report order (FIFTH → FIRST)
    pub const ALL: [RewardTier; 5] = [
        RewardTier::Fifth,
        RewardTier::Fourth,
        RewardTier::Third,
        RewardTier::Second,
        RewardTier::First,
    ];

    /// Classify a match result.
    ///
    /// Five matches with the bonus is always `Second`, never `Third`.
    pub fn classify(matched_count: u8, bonus_matched: bool) -> Option<Self> {
        match (matched_count, bonus_matched) {
            (6, _) => Some(Self::First),
            (5, true) => Some(Self::Second),
            (5, false) => Some(Self::Third),
            (4, _) => Some(Self::Fourth),
            (3, _) => Some(Self::Fifth),
            _ => None,
        }
    }

    /// Stable code used in logs and JSON
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fifth => "MATCH_3",
            Self::Fourth => "MATCH_4",
            Self::Third => "MATCH_5",
            Self::Second => "MATCH_5_WITH_BONUS",
            Self::First => "MATCH_6",
        }
    }

    /// Winning numbers a ticket must hold
    pub fn matched_count(&self) -> u8 {
        match self {
            Self::Fifth => 3,
            Self::Fourth => 4,
            Self::Third | Self::Second => 5,
            Self::First => 6,
        }
    }

    /// Whether the bonus number must also match
    pub fn requires_bonus(&self) -> bool {
        matches!(self, Self::Second)
    }

    /// Prize paid per winning ticket
    pub fn prize(&self) -> u64 {
        match self {
            Self::Fifth => 5_000,
            Self::Fourth => 50_000,
            Self::Third => 1_500_000,
            Self::Second => 30_000_000,
            Self::First => 2_000_000_000,
        }
    }
}

impl fmt::Display for RewardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_three_is_not_a_win() {
        for count in 0..3 {
            assert_eq!(RewardTier::classify(count, false), None);
            assert_eq!(RewardTier::classify(count, true), None);
        }
    }

    #[test]
    fn test_classification_is_total_above_three() {
        for count in 3..=6 {
            for bonus in [false, true] {
                let tier = RewardTier::classify(count, bonus).unwrap();
                assert_eq!(tier.matched_count(), count);
            }
        }
    }

    #[test]
    fn test_five_with_bonus_is_second() {
        assert_eq!(RewardTier::classify(5, true), Some(RewardTier::Second));
        assert_eq!(RewardTier::classify(5, false), Some(RewardTier::Third));
        assert!(RewardTier::Second.requires_bonus());
        assert!(!RewardTier::Third.requires_bonus());
    }

    #[test]
    fn test_bonus_irrelevant_outside_five() {
        assert_eq!(RewardTier::classify(6, false), Some(RewardTier::First));
        assert_eq!(RewardTier::classify(4, true), Some(RewardTier::Fourth));
        assert_eq!(RewardTier::classify(3, true), Some(RewardTier::Fifth));
    }

    #[test]
    fn test_prize_table() {
        let prizes: Vec<u64> = RewardTier::ALL.iter().map(|t| t.prize()).collect();
        assert_eq!(
            prizes,
            vec![5_000, 50_000, 1_500_000, 30_000_000, 2_000_000_000]
        );
    }

    #[test]
    fn test_report_order_matches_ord() {
        let mut sorted = RewardTier::ALL;
        sorted.sort();
        assert_eq!(sorted, RewardTier::ALL);
    }

    #[test]
    fn test_codes_round_trip_through_serde() {
        for tier in RewardTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.code()));
            let back: RewardTier = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tier);
        }
    }
}
