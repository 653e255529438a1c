//! Presentation helpers — sorting and a text board render.
//!
//! Strictly post-engine plumbing: the sorter reorders the engine's output
//! for viewing and carries no business logic. The board render is the
//! text stand-in for a graphical front end.

use tracing::info;

use crate::types::Bet;

/// Reorders a catalog for display.
pub trait SortStrategy: Send + Sync {
    fn sort(&self, bets: Vec<Bet>) -> Vec<Bet>;
}

/// Descending by days remaining — soonest-expiring bets at the bottom.
/// Stable, so ties keep their input order.
pub struct SellInDescending;

impl SortStrategy for SellInDescending {
    fn sort(&self, mut bets: Vec<Bet>) -> Vec<Bet> {
        bets.sort_by_key(|bet| std::cmp::Reverse(bet.sell_in));
        bets
    }
}

/// Log the catalog one line per bet.
pub fn render_board(bets: &[Bet]) {
    info!(count = bets.len(), "Odds board");
    for bet in bets {
        info!(
            name = %bet.name,
            sell_in = bet.sell_in,
            quality = bet.quality,
            "odds"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
