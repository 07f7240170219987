//! Tracing subscriber setup for binaries.
//!
//! The library only emits events; installing a subscriber is the caller's
//! job. `RUST_LOG` overrides the default filter when set.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "dhivehi_translator=info";
const VERBOSE_FILTER: &str = "dhivehi_translator=debug";

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install a stderr `fmt` subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
