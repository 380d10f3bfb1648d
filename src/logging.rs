// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the driver binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. The level defaults to `info` and follows `RUST_LOG`.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global fmt subscriber writing to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<()> {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| Error::Config(format!("failed to install logger: {err}")))?;

    tracing::info!("folio_fx v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
