//! Bet repository — runs the update cycle against a service.
//!
//! One cycle is load → engine apply → save, strictly in that order and
//! all-or-nothing from the caller's point of view: a load failure means
//! the engine never runs and nothing is saved; a save failure means the
//! computed update is discarded and the previously persisted snapshot
//! stands.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::engine::UpdateEngine;
use crate::service::BetService;
use crate::types::Bet;

/// Catalog operations exposed to callers (the display loop, tests).
#[async_trait]
pub trait BetRepository: Send + Sync {
    /// Fetch the current catalog without updating it.
    async fn load_bets(&self) -> Result<Vec<Bet>>;

    /// Run one full update cycle and return the saved catalog.
    async fn update_bets(&self) -> Result<Vec<Bet>>;

    /// Persist a catalog as-is.
    async fn save_bets(&self, bets: Vec<Bet>) -> Result<()>;
}

/// `BetRepository` over any `BetService`, holding the engine it applies.
///
/// The engine is supplied at construction — the repository owns no global
/// rule state.
pub struct ServiceBetRepository {
    service: Box<dyn BetService>,
    engine: UpdateEngine,
}

impl ServiceBetRepository {
    pub fn new(service: Box<dyn BetService>, engine: UpdateEngine) -> Self {
        Self { service, engine }
    }
}

#[async_trait]
impl BetRepository for ServiceBetRepository {
    async fn load_bets(&self) -> Result<Vec<Bet>> {
        self.service
            .load_bets()
            .await
            .with_context(|| format!("Loading bets from {} service failed", self.service.name()))
    }

    async fn update_bets(&self) -> Result<Vec<Bet>> {
        let bets = self.load_bets().await?;
        debug!(count = bets.len(), "Catalog loaded, applying update cycle");

        let updated = self.engine.apply(bets);

        self.save_bets(updated.clone()).await?;

        info!(count = updated.len(), "Update cycle complete");
        Ok(updated)
    }

    async fn save_bets(&self, bets: Vec<Bet>) -> Result<()> {
        self.service
            .save_bets(&bets)
            .await
            .with_context(|| format!("Saving bets to {} service failed", self.service.name()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
