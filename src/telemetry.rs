//! Telemetry helpers for applications embedding `bankroll-chart`.
//!
//! Chart redraws emit `debug!` summaries and per-point `trace!` events. Hosts
//! either call `init_default_tracing` or install their own subscriber.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info,bankroll_chart=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or the host application already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
