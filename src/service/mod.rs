//! Bet source/sink services.
//!
//! Defines the `BetService` trait and provides implementations for:
//! - REST — the upstream odds feed (HTTP, JSON collection)
//! - File — local JSON state file for offline and test runs

pub mod file;
pub mod rest;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::Bet;

/// Abstraction over the place bets are loaded from and saved to.
///
/// Either operation may fail; failures are opaque to the engine and are
/// propagated by the repository without partial recovery.
#[async_trait]
pub trait BetService: Send + Sync {
    /// Fetch the current bet catalog.
    async fn load_bets(&self) -> Result<Vec<Bet>>;

    /// Persist the full bet catalog, replacing the previous snapshot.
    async fn save_bets(&self, bets: &[Bet]) -> Result<()>;

    /// Service name for logging and identification.
    fn name(&self) -> &str;
}

/// Domain-specific error types for the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Odds feed error ({status}): {message}")]
    Feed { status: u16, message: String },

    #[error("State file error: {0}")]
    StateFile(String),
}
