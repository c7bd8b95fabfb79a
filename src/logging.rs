//! Diagnostic logging
//!
//! Planner and replay decisions are emitted as `tracing` events. The binary
//! routes them to stderr so stdout stays reserved for reports and traces.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor a configured level is usable
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LEVEL`]
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .ok()
        .unwrap_or_else(|| configured_filter(level))
}

/// Filter for a configured level
///
/// `level` is either a bare level (`debug`), scoped to this crate, or a full
/// directive list (`info,smoother=debug`) used as given.
pub fn configured_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    let directives = if level.contains(|c: char| c == '=' || c == ',') {
        level.to_string()
    } else {
        format!("smoother={level}")
    };

    EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(format!("smoother={DEFAULT_LEVEL}")))
}

/// Install the global subscriber writing to stderr
///
/// Returns `false` if a subscriber was already installed.
pub fn init(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .is_ok()
}
