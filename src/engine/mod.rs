//! Core engine — the per-cycle bet update transform.
//!
//! Dispatches each bet to its category rule and applies the three rule
//! steps in order. The engine is a plain immutable value: construct it
//! once at startup and hand it to whoever runs update cycles — there is
//! no shared rule table behind it.

pub mod rules;

use tracing::debug;

use crate::types::Bet;
use rules::UpdateRule;

/// Applies one update cycle to a bet collection.
///
/// Pure and synchronous: no I/O, no shared state, no failure modes. The
/// transform is independent per item; output order and length always match
/// the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateEngine;

impl UpdateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Update a single bet according to its category rule.
    pub fn update(&self, bet: &Bet) -> Bet {
        UpdateRule::for_category(bet.category()).apply(bet)
    }

    /// Update a full snapshot. Order-preserving: the bet at position `i`
    /// of the output is the updated bet from position `i` of the input.
    pub fn apply(&self, bets: Vec<Bet>) -> Vec<Bet> {
        let updated: Vec<Bet> = bets.iter().map(|bet| self.update(bet)).collect();
        debug!(count = updated.len(), "Update cycle applied");
        updated
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
