//! BETS — Betting-market odds catalog and daily update engine
//!
//! Entry point. Loads configuration, initialises structured logging,
//! builds the configured service backend, and runs the
//! load→update→save→display cycle on an interval with graceful shutdown.

use anyhow::Result;
use secrecy::SecretString;
use std::time::Duration;
use tracing::{error, info, warn};

use bets::config;
use bets::display::{self, SellInDescending, SortStrategy};
use bets::engine::UpdateEngine;
use bets::repository::{BetRepository, ServiceBetRepository};
use bets::service::file::FileBetService;
use bets::service::rest::RestBetService;
use bets::service::BetService;

const BANNER: &str = r#"
 ____  _____ _____ ____
| __ )| ____|_   _/ ___|
|  _ \|  _|   | | \___ \
| |_) | |___  | |  ___) |
|____/|_____| |_| |____/

  Betting-market odds tracker — daily update engine
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = config::AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        tracker_name = %cfg.tracker.name,
        update_interval_secs = cfg.tracker.update_interval_secs,
        backend = %cfg.service.backend,
        "BETS starting up"
    );

    // -- Service backend --------------------------------------------------

    let service: Box<dyn BetService> = match cfg.service.backend.as_str() {
        "rest" => {
            let api_key = cfg
                .service
                .rest
                .api_key_env
                .as_deref()
                .and_then(|env| std::env::var(env).ok())
                .map(SecretString::new);
            if api_key.is_none() {
                warn!("No feed API key configured — saves may be rejected by the feed");
            }
            Box::new(RestBetService::new(&cfg.service.rest.base_url, api_key)?)
        }
        "file" => Box::new(FileBetService::new(cfg.service.file.state_file.as_deref())),
        other => {
            warn!(backend = other, "Unknown service backend, defaulting to file");
            Box::new(FileBetService::new(cfg.service.file.state_file.as_deref()))
        }
    };

    info!(service = service.name(), "Service backend ready");

    let repository = ServiceBetRepository::new(service, UpdateEngine::new());
    let sorter = SellInDescending;

    // -- Main loop ---------------------------------------------------------

    let update_interval = Duration::from_secs(cfg.tracker.update_interval_secs);
    let mut interval = tokio::time::interval(update_interval);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(
        interval_secs = cfg.tracker.update_interval_secs,
        "Entering update loop. Press Ctrl+C to stop."
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match repository.update_bets().await {
                    Ok(bets) => {
                        let board = sorter.sort(bets);
                        display::render_board(&board);
                    }
                    Err(e) => {
                        // Previously persisted state is untouched; try
                        // again next tick.
                        error!(error = %e, "Update cycle failed — continuing to next");
                    }
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    info!("BETS shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bets=info"));

    let json_logging = std::env::var("BETS_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
