//! Subscriber setup for the binaries.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! binary installs a subscriber through [`setup`].

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_directives` when set.
pub fn setup(default_directives: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}
