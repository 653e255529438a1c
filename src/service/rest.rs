//! REST odds-feed integration.
//!
//! Loads and saves the bet catalog against an HTTP endpoint serving a JSON
//! collection. Reads need no auth; writes may require an API key, which is
//! resolved from the environment at startup and sent as an
//! `Authorization: Key {key}` header.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{BetService, ServiceError};
use crate::types::Bet;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

const SERVICE_NAME: &str = "rest";

/// Per-request timeout. The repository treats a slow feed as a failed
/// cycle rather than blocking the loop.
const REQUEST_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// Wire types (feed JSON → Rust)
// ---------------------------------------------------------------------------

/// The shape of a bet on the wire. The feed uses camelCase keys; only the
/// three catalog fields exist on this resource.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBet {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<WireBet> for Bet {
    fn from(wire: WireBet) -> Self {
        Bet {
            name: wire.name,
            sell_in: wire.sell_in,
            quality: wire.quality,
        }
    }
}

impl From<&Bet> for WireBet {
    fn from(bet: &Bet) -> Self {
        WireBet {
            name: bet.name.clone(),
            sell_in: bet.sell_in,
            quality: bet.quality,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// `BetService` backed by the remote odds feed.
pub struct RestBetService {
    client: Client,
    odds_url: String,
    api_key: Option<SecretString>,
}

impl RestBetService {
    /// Create a client against `base_url` (e.g. `https://feed.example.com/v1`).
    ///
    /// `api_key` is optional — without it, saves to a write-protected feed
    /// will come back as an HTTP error.
    pub fn new(base_url: &str, api_key: Option<SecretString>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client for odds feed")?;

        Ok(Self {
            client,
            odds_url: format!("{}/odds", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.header(
                reqwest::header::AUTHORIZATION,
                format!("Key {}", key.expose_secret()),
            ),
            None => req,
        }
    }
}

#[async_trait]
impl BetService for RestBetService {
    async fn load_bets(&self) -> Result<Vec<Bet>> {
        debug!(url = %self.odds_url, "Fetching bet catalog");

        let response = self
            .authorize(self.client.get(&self.odds_url))
            .send()
            .await
            .context("Odds feed request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Feed {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let wire: Vec<WireBet> = response
            .json()
            .await
            .context("Failed to decode bet catalog from odds feed")?;

        let bets: Vec<Bet> = wire.into_iter().map(Bet::from).collect();
        info!(count = bets.len(), "Bet catalog loaded from feed");
        Ok(bets)
    }

    async fn save_bets(&self, bets: &[Bet]) -> Result<()> {
        let wire: Vec<WireBet> = bets.iter().map(WireBet::from).collect();

        let response = self
            .authorize(self.client.put(&self.odds_url))
            .json(&wire)
            .send()
            .await
            .context("Odds feed save request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Feed {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        info!(count = bets.len(), "Bet catalog saved to feed");
        Ok(())
    }

    fn name(&self) -> &str {
        SERVICE_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bet_uses_camel_case() {
        let wire = WireBet::from(&Bet::new("Total score", 7, 49));
        let json = serde_json::to_string(&wire).unwrap();
        assert!(json.contains("\"sellIn\":7"), "got {json}");
        assert!(json.contains("\"quality\":49"), "got {json}");
    }

    #[test]
    fn test_wire_bet_round_trip() {
        let json = r#"{"name":"Player performance","sellIn":-1,"quality":26}"#;
        let wire: WireBet = serde_json::from_str(json).unwrap();
        let bet = Bet::from(wire);
        assert_eq!(bet, Bet::new("Player performance", -1, 26));
    }

    #[test]
    fn test_odds_url_normalises_trailing_slash() {
        let svc = RestBetService::new("https://feed.example.com/v1/", None).unwrap();
        assert_eq!(svc.odds_url, "https://feed.example.com/v1/odds");
    }

    #[test]
    fn test_service_name() {
        let svc = RestBetService::new("https://feed.example.com/v1", None).unwrap();
        assert_eq!(svc.name(), "rest");
    }
}
