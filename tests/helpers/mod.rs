//! Spy service for integration testing.
//!
//! A deterministic in-memory `BetService`: the catalog, the recorded
//! event order, and forced-error switches are all controllable from test
//! code, with no external dependencies.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use bets::service::BetService;
use bets::types::Bet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Load,
    Save,
}

/// Cloning yields a second handle onto the same spy state, so a test can
/// keep one handle for assertions after moving the other into the
/// repository.
#[derive(Clone)]
pub struct BetServiceSpy {
    bets: Arc<Mutex<Vec<Bet>>>,
    events: Arc<Mutex<Vec<Event>>>,
    /// If set, `load_bets` returns this error.
    fail_load: Arc<Mutex<Option<String>>>,
    /// If set, `save_bets` returns this error.
    fail_save: Arc<Mutex<Option<String>>>,
}

impl BetServiceSpy {
    pub fn with_bets(bets: Vec<Bet>) -> Self {
        Self {
            bets: Arc::new(Mutex::new(bets)),
            events: Arc::new(Mutex::new(Vec::new())),
            fail_load: Arc::new(Mutex::new(None)),
            fail_save: Arc::new(Mutex::new(None)),
        }
    }

    /// Force all subsequent loads to fail.
    pub fn fail_load_with(&self, msg: &str) {
        *self.fail_load.lock().unwrap() = Some(msg.to_string());
    }

    /// Force all subsequent saves to fail.
    pub fn fail_save_with(&self, msg: &str) {
        *self.fail_save.lock().unwrap() = Some(msg.to_string());
    }

    /// The catalog as the service currently holds it.
    pub fn stored_bets(&self) -> Vec<Bet> {
        self.bets.lock().unwrap().clone()
    }

    /// Every load/save call recorded so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl BetService for BetServiceSpy {
    async fn load_bets(&self) -> Result<Vec<Bet>> {
        self.events.lock().unwrap().push(Event::Load);

        if let Some(msg) = self.fail_load.lock().unwrap().clone() {
            return Err(anyhow!(msg));
        }

        Ok(self.bets.lock().unwrap().clone())
    }

    async fn save_bets(&self, bets: &[Bet]) -> Result<()> {
        self.events.lock().unwrap().push(Event::Save);

        if let Some(msg) = self.fail_save.lock().unwrap().clone() {
            return Err(anyhow!(msg));
        }

        *self.bets.lock().unwrap() = bets.to_vec();
        Ok(())
    }

    fn name(&self) -> &str {
        "spy"
    }
}
