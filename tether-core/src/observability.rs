/*!
Observability bootstrap for applications embedding the mapping layer.

Both crates emit structured `tracing` events (remote calls, retry attempts,
nested-reference failures); this module wires up a subscriber for binaries
that have not configured their own.
*/

use crate::error::{Result, TetherError};
use tracing::subscriber::set_global_default;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Install a global subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    set_global_default(subscriber)
        .map_err(|e| TetherError::observability(format!("failed to set tracing subscriber: {e}")))
}
