//! # iotsim: device monitoring demo
//!
//! Composition root that wires the virtual devices into the monitor.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize `tracing` with the configured filter
//! - Build the demo device set and power every device on
//! - Run the monitor with real-time pauses and a seeded generator
//! - Stop between cycles on SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use iotsim_adapter_virtual::{demo_devices, power_on_all};
use iotsim_app::monitor::Monitor;
use iotsim_app::pause::TokioPause;
use iotsim_app::sink::TracingSink;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config.monitor_settings()?;
    let sink = TracingSink;

    // Devices
    let mut devices = demo_devices()?;
    power_on_all(&mut devices, &sink);

    // Shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        // The run may already be over.
        let _ = shutdown_tx.send(true);
    });

    let mut monitor = Monitor::new(
        settings,
        sink,
        TokioPause,
        StdRng::seed_from_u64(config.monitoring.seed),
    );
    let summary = monitor.run_until(&mut devices, shutdown_rx).await?;

    tracing::info!(
        run_id = %summary.run_id,
        cycles_completed = summary.cycles_completed,
        cancelled = summary.cancelled,
        "monitoring finished"
    );
    Ok(())
}

/// Resolve on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// A handler that cannot be installed never resolves, so the run simply
/// completes its cycles.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, stopping after the current cycle");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, stopping after the current cycle");
        }
    }
}
