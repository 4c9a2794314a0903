//! Tracing setup for the chart binary and embedding hosts.
//!
//! Nothing is installed implicitly. Hosts either call one of these helpers
//! or register their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is unset: chart stages at `info`, loader
/// warnings always visible.
pub const DEFAULT_FILTER: &str = "btc_charts=info,warn";

/// Installs a compact subscriber filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact subscriber, falling back to `directives` when
/// `RUST_LOG` is unset or unparsable.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_tracing(directives: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_tracing(_directives: &str) -> bool {
    false
}
