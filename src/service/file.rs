//! Local JSON state file service.
//!
//! Saves and loads the bet catalog to/from a JSON file. Useful for offline
//! runs and tests; a missing file loads as an empty catalog (fresh start).

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::{BetService, ServiceError};
use crate::types::Bet;

const SERVICE_NAME: &str = "file";

/// Default state file path.
const DEFAULT_STATE_FILE: &str = "bets_state.json";

/// On-disk envelope around the catalog.
#[derive(Debug, Serialize, Deserialize)]
struct StateEnvelope {
    saved_at: DateTime<Utc>,
    bets: Vec<Bet>,
}

/// `BetService` backed by a JSON file on disk.
pub struct FileBetService {
    path: String,
}

impl FileBetService {
    pub fn new(path: Option<&str>) -> Self {
        Self {
            path: path.unwrap_or(DEFAULT_STATE_FILE).to_string(),
        }
    }
}

#[async_trait]
impl BetService for FileBetService {
    async fn load_bets(&self) -> Result<Vec<Bet>> {
        if !Path::new(&self.path).exists() {
            info!(path = %self.path, "No state file found, starting with an empty catalog");
            return Ok(Vec::new());
        }

        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state from {}", self.path))?;

        let state: StateEnvelope = serde_json::from_str(&json)
            .map_err(|e| ServiceError::StateFile(format!("{}: {e}", self.path)))?;

        info!(
            path = %self.path,
            count = state.bets.len(),
            saved_at = %state.saved_at,
            "Bet catalog loaded from disk"
        );

        Ok(state.bets)
    }

    async fn save_bets(&self, bets: &[Bet]) -> Result<()> {
        let state = StateEnvelope {
            saved_at: Utc::now(),
            bets: bets.to_vec(),
        };

        let json =
            serde_json::to_string_pretty(&state).context("Failed to serialise bet catalog")?;

        std::fs::write(&self.path, &json)
            .with_context(|| format!("Failed to write state to {}", self.path))?;

        debug!(path = %self.path, count = bets.len(), "Bet catalog saved");
        Ok(())
    }

    fn name(&self) -> &str {
        SERVICE_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
