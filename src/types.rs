//! Shared types for the BETS tracker.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that service, repository,
//! and engine modules can depend on them without circular references.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Bet
// ---------------------------------------------------------------------------

/// A tracked odds record.
///
/// `name` doubles as the category key for rule dispatch; `sell_in` is the
/// number of days until the underlying event (may go negative, no floor);
/// `quality` is the market-confidence score, held inside the 0–50 band by
/// the update rules rather than by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Bet {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// The update category this bet dispatches to.
    pub fn category(&self) -> BetCategory {
        BetCategory::of(&self.name)
    }

    /// Helper to build a test/sample bet with sensible defaults.
    #[cfg(test)]
    pub fn sample() -> Self {
        Bet::new("First goal scorer", 10, 20)
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (sell_in: {} | quality: {})",
            self.name, self.sell_in, self.quality
        )
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Update category for routing a bet to its rule.
///
/// A closed set of known categories plus the open `Standard` bucket for
/// every unrecognised name. Matching is exact string equality — no
/// normalisation, no case folding — so "Total Score" (capital S) lands in
/// `Standard`, exactly like any other unregistered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetCategory {
    PlayerPerformance,
    TotalScore,
    WinningTeam,
    Standard,
}

impl BetCategory {
    /// All known categories (useful for iteration).
    pub const ALL: &'static [BetCategory] = &[
        BetCategory::PlayerPerformance,
        BetCategory::TotalScore,
        BetCategory::WinningTeam,
        BetCategory::Standard,
    ];

    /// Resolve a bet name to its category. Total: unknown names fall back
    /// to `Standard`, so dispatch never fails.
    pub fn of(name: &str) -> Self {
        match name {
            "Player performance" => BetCategory::PlayerPerformance,
            "Total score" => BetCategory::TotalScore,
            "Winning team" => BetCategory::WinningTeam,
            _ => BetCategory::Standard,
        }
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetCategory::PlayerPerformance => write!(f, "Player performance"),
            BetCategory::TotalScore => write!(f, "Total score"),
            BetCategory::WinningTeam => write!(f, "Winning team"),
            BetCategory::Standard => write!(f, "Standard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_registered_names() {
        assert_eq!(
            BetCategory::of("Player performance"),
            BetCategory::PlayerPerformance
        );
        assert_eq!(BetCategory::of("Total score"), BetCategory::TotalScore);
        assert_eq!(BetCategory::of("Winning team"), BetCategory::WinningTeam);
    }

    #[test]
    fn test_category_of_unregistered_name_is_standard() {
        assert_eq!(BetCategory::of("Set score"), BetCategory::Standard);
        assert_eq!(BetCategory::of("First goal scorer"), BetCategory::Standard);
        assert_eq!(BetCategory::of(""), BetCategory::Standard);
    }

    #[test]
    fn test_category_matching_is_case_sensitive() {
        assert_eq!(BetCategory::of("total score"), BetCategory::Standard);
        assert_eq!(BetCategory::of("WINNING TEAM"), BetCategory::Standard);
        assert_eq!(BetCategory::of("Player Performance"), BetCategory::Standard);
    }

    #[test]
    fn test_category_matching_has_no_normalisation() {
        assert_eq!(BetCategory::of(" Total score"), BetCategory::Standard);
        assert_eq!(BetCategory::of("Total score "), BetCategory::Standard);
    }

    #[test]
    fn test_bet_category_accessor() {
        let bet = Bet::new("Winning team", 5, 10);
        assert_eq!(bet.category(), BetCategory::WinningTeam);
    }

    #[test]
    fn test_bet_display() {
        let bet = Bet::new("Total score", 3, 42);
        assert_eq!(format!("{bet}"), "Total score (sell_in: 3 | quality: 42)");
    }

    #[test]
    fn test_bet_serde_round_trip() {
        let bet = Bet::new("Player performance", -1, 26);
        let json = serde_json::to_string(&bet).unwrap();
        let back: Bet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bet);
    }
}
