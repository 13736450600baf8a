//! Command-line host for the Tic-Tac-Toe engine
//!
//! The CLI is a thin adapter: it turns typed input into `(row, column)`
//! moves, renders board snapshots and never touches game rules itself.

pub mod commands;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or everything
/// from this crate at debug level when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
