//! Diagnostics for `depix` runs.
//!
//! The converted table goes to the output file, so every `tracing` event
//! (calibration frames, element ids, row counts) is written to stderr. Library
//! users who embed the converter can skip this and install their own
//! subscriber instead.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
