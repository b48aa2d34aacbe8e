//! Opt-in log output for hosts that do not configure `tracing` themselves.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a compact `fmt` subscriber for the composer's debug and trace events.
///
/// `RUST_LOG` picks the filter; without it only warnings (such as a sanitized
/// pixel size) are shown. Gives `false` if a subscriber is already installed
/// or the crate was built without `telemetry`.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        return tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
            )
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
