//! Logging for the tessera client.
//!
//! Chain steps and finishers emit `tracing` events: `debug` for filter
//! building and page fetches, `warn` for the batch-get truncation. Nothing
//! is printed unless a subscriber is installed; with the
//! `tracing-subscriber` cargo feature this module can install one, driven
//! by environment variables:
//!
//! - `TESSERA_DEBUG=true|1|yes` - enable debug logging
//! - `TESSERA_LOG_LEVEL=trace|debug|info|warn|error` - explicit level
//! - `TESSERA_LOG_FORMAT=json|pretty|compact` - output format (default: json)

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Whether `TESSERA_DEBUG` asks for debug logging.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("TESSERA_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// The configured log level: `TESSERA_LOG_LEVEL` when valid, otherwise
/// `debug` when `TESSERA_DEBUG` is set, otherwise `warn`.
pub fn log_level() -> &'static str {
    parse_level(
        env::var("TESSERA_LOG_LEVEL").ok().as_deref(),
        is_debug_enabled(),
    )
}

fn parse_level(level: Option<&str>, debug: bool) -> &'static str {
    match level.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ if debug => "debug",
        _ => "warn",
    }
}

/// The configured output format, defaulting to structured JSON.
pub fn log_format() -> &'static str {
    parse_format(env::var("TESSERA_LOG_FORMAT").ok().as_deref())
}

fn parse_format(format: Option<&str>) -> &'static str {
    match format.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

/// Install a subscriber honoring the environment variables above.
///
/// A no-op unless debug logging or an explicit level was requested, a
/// no-op after the first call, and a no-op without the
/// `tracing-subscriber` feature (callers then install their own).
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("TESSERA_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = log_level();
            let filter =
                EnvFilter::try_new(format!("tessera_query={level},tessera_api={level}"))
                    .unwrap_or_else(|_| EnvFilter::new("warn"));

            match log_format() {
                "pretty" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .init(),
            }
        }
    });
}
