//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::logging::LogFormat;

/// Initialize tracing/logging for the process.
///
/// Filtering comes from `RUST_LOG` (default `info`), the output format from
/// `STOREFRONT_LOG_FORMAT`. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (format, rejected) = LogFormat::from_env();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed && let Some(raw) = rejected {
        ::tracing::warn!(value = %raw, "unknown log format; using json");
    }
}
