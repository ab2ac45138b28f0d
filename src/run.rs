//! Application execution logic.
//!
//! This module contains the scheduler stand-in: a one-second tick loop
//! that polls the status monitor and emits the snapshot as a JSON line
//! whenever it changes.

use std::io::{self, Write};
use std::time::Duration;

use thiserror::Error;
use tokio::signal;
use tokio::time::MissedTickBehavior;

use netwatch::config::{ValidatedConfig, defaults};
use netwatch::query::{HostQuery, SystemQuery};
use netwatch::status::{NetworkStatusMonitor, StatusSnapshot};
use netwatch::time::{Clock, SystemClock};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to serialize a snapshot for output.
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write a snapshot to standard output.
    #[error("Failed to write snapshot: {0}")]
    Output(#[from] io::Error),
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the host-backed system query and the status monitor
/// 2. Runs the tick loop until shutdown signal (Ctrl+C / SIGTERM)
///
/// # Errors
///
/// Returns an error if a snapshot cannot be written to standard output.
///
/// # Coverage Note
///
/// Excluded from coverage because it requires real system tools and
/// signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let monitor =
        NetworkStatusMonitor::new(HostQuery::new(), Duration::from_secs(config.interval));

    tracing::info!(
        "Refreshing network status every {}s",
        monitor.interval().as_secs()
    );

    run_tick_loop(monitor, SystemClock::new(), config.pretty).await
}

/// Drives the monitor from a periodic tick, emitting changed snapshots.
///
/// Each system query inside `get_status` is blocking but individually
/// bounded by its timeout; the tick loop accepts that worst-case latency.
#[cfg(not(tarpaulin_include))]
async fn run_tick_loop<Q, C>(
    mut monitor: NetworkStatusMonitor<Q>,
    clock: C,
    pretty: bool,
) -> Result<(), RunError>
where
    Q: SystemQuery,
    C: Clock,
{
    let mut ticker = tokio::time::interval(defaults::tick_period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let mut last_emitted: Option<StatusSnapshot> = None;

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(());
            }

            _ = ticker.tick() => {
                let snapshot = monitor.get_status(clock.monotonic());

                if last_emitted.as_ref() != Some(&snapshot) {
                    emit(&mut io::stdout().lock(), &snapshot, pretty)?;
                    last_emitted = Some(snapshot);
                }
            }
        }
    }
}

/// Writes one snapshot as JSON followed by a newline.
fn emit<W: Write>(writer: &mut W, snapshot: &StatusSnapshot, pretty: bool) -> Result<(), RunError> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };

    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(())
}

/// Resolves when a shutdown signal (Ctrl+C or SIGTERM) is received.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
