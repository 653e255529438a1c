//! Per-category update rules.
//!
//! One rule per bet category, selected via an exhaustive match on
//! `BetCategory`. Each rule is three total, pure functions over integers —
//! no error cases, no side effects — applied by the engine in a fixed
//! order: quality, then sell_in, then a post-deadline quality adjustment
//! that observes the *pre-decrement* sell_in.

use crate::types::{Bet, BetCategory};

// ---------------------------------------------------------------------------
// Band and thresholds
// ---------------------------------------------------------------------------

/// Upper bound the incrementing steps refuse to cross.
const QUALITY_CAP: i32 = 50;

/// Lower bound the decrementing steps refuse to cross.
const QUALITY_FLOOR: i32 = 0;

/// Total-score bets gain a second point below this many days out.
const TOTAL_SCORE_SECOND_BOOST_DAYS: i32 = 11;

/// ...and a third point below this many days out.
const TOTAL_SCORE_THIRD_BOOST_DAYS: i32 = 6;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// The update rule applied to a bet each cycle.
///
/// A closed tagged variant rather than a name-keyed lookup table: the
/// category → rule mapping lives in [`UpdateRule::for_category`] and the
/// compiler keeps every match exhaustive. `Standard` is the fallback for
/// any category not listed here, so selection is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRule {
    /// Quality decays by 1 per cycle, by 2 once the event has passed;
    /// never decremented below 0.
    Standard,
    /// Quality rises by 1 per cycle, by 2 once the event has passed;
    /// never incremented above 50.
    PlayerPerformance,
    /// Quality rises faster as the event approaches (extra point under 11
    /// days, another under 6), then resets to 0 once the event has passed.
    TotalScore,
    /// Quality and sell_in never change.
    WinningTeam,
}

impl UpdateRule {
    /// Select the rule for a category. Total by construction: the
    /// `Standard` bucket absorbs everything unregistered.
    pub fn for_category(category: BetCategory) -> Self {
        match category {
            BetCategory::PlayerPerformance => UpdateRule::PlayerPerformance,
            BetCategory::TotalScore => UpdateRule::TotalScore,
            BetCategory::WinningTeam => UpdateRule::WinningTeam,
            BetCategory::Standard => UpdateRule::Standard,
        }
    }

    /// Step 1: new quality, computed from the quality and sell_in as they
    /// stand *before* the sell_in decrement.
    pub fn update_quality(&self, bet: &Bet) -> i32 {
        match self {
            UpdateRule::Standard => decrement_above_floor(bet.quality),
            UpdateRule::PlayerPerformance => increment_below_cap(bet.quality),
            UpdateRule::TotalScore => {
                let mut quality = increment_below_cap(bet.quality);
                if bet.sell_in < TOTAL_SCORE_SECOND_BOOST_DAYS {
                    quality = increment_below_cap(quality);
                }
                if bet.sell_in < TOTAL_SCORE_THIRD_BOOST_DAYS {
                    quality = increment_below_cap(quality);
                }
                quality
            }
            UpdateRule::WinningTeam => bet.quality,
        }
    }

    /// Step 2: new sell_in. Unconditional decrement for every rule except
    /// `WinningTeam`, whose time window never moves.
    pub fn update_sell_in(&self, bet: &Bet) -> i32 {
        match self {
            UpdateRule::WinningTeam => bet.sell_in,
            _ => bet.sell_in - 1,
        }
    }

    /// Step 3: post-deadline adjustment. `bet` carries the step-1 quality
    /// and the *original* sell_in — the deadline check must not see the
    /// step-2 decrement.
    pub fn update_quality_by_sell_in(&self, bet: &Bet) -> i32 {
        if bet.sell_in >= 0 {
            return bet.quality;
        }

        match self {
            UpdateRule::Standard => decrement_above_floor(bet.quality),
            UpdateRule::PlayerPerformance => increment_below_cap(bet.quality),
            UpdateRule::TotalScore => 0,
            UpdateRule::WinningTeam => bet.quality,
        }
    }

    /// Apply all three steps in the contract order and return the updated
    /// bet. Step 3 is fed the step-1 quality together with the original
    /// sell_in; the decremented sell_in is only written at the end.
    pub fn apply(&self, bet: &Bet) -> Bet {
        let quality = self.update_quality(bet);
        let sell_in = self.update_sell_in(bet);

        let staged = Bet {
            quality,
            ..bet.clone()
        };
        let quality = self.update_quality_by_sell_in(&staged);

        Bet {
            name: bet.name.clone(),
            sell_in,
            quality,
        }
    }
}

// ---------------------------------------------------------------------------
// Band-guarded steps
// ---------------------------------------------------------------------------

/// +1 only while strictly below the cap. A value already at or above 50
/// is left alone — the guard prevents crossing further out of band, it
/// never pulls a value back in.
fn increment_below_cap(quality: i32) -> i32 {
    if quality < QUALITY_CAP {
        quality + 1
    } else {
        quality
    }
}

/// −1 only while strictly above the floor. Symmetric to the cap guard:
/// a value at or below 0 stays where it is.
fn decrement_above_floor(quality: i32) -> i32 {
    if quality > QUALITY_FLOOR {
        quality - 1
    } else {
        quality
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
