/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! fixprobe command line harness.
//!
//! Connects to the configured endpoint, runs one built-in scenario and
//! prints every frame. Configuration comes from `FIX_*` environment
//! variables; logging honours `RUST_LOG`.
//!
//! Run with: `FIX_SCENARIO=market-data cargo run --bin fixprobe`

use anyhow::{Context, bail};
use fixprobe::prelude::*;
use fixprobe::scenarios::BUILTIN_NAMES;
use tracing::{info, warn};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = HarnessConfig::from_env();
    let Some(scenario) = builtin(&config.scenario, &config.logon()) else {
        bail!(
            "unknown scenario {:?}; expected one of: {}",
            config.scenario,
            BUILTIN_NAMES.join(", ")
        );
    };
    let catalog = config
        .catalog_config()
        .context("invalid FIX_SENDER or FIX_TARGET")?;

    info!(
        endpoint = %config.endpoint,
        scenario = scenario.name(),
        sender = %catalog.sender_comp_id,
        target = %catalog.target_comp_id,
        "Starting fixprobe"
    );

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupted, shutting down");
                ctrl_c.cancel();
            }
            Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C"),
        }
    });

    HarnessBuilder::new()
        .with_handler(ConsoleHandler::stdout())
        .with_session(config.session_config())
        .with_catalog(catalog)
        .with_scenario(scenario)
        .run(&cancel)
        .await
        .with_context(|| format!("session with {} failed", config.endpoint))?;

    Ok(())
}
