// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Logs go to stderr through `tracing-subscriber`'s fmt layer. `RUST_LOG`
//! overrides [`DEFAULT_FILTER`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "manim_studio=info";

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Subsequent calls are no-ops; an already-installed subscriber is kept.
pub fn init() {
    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
