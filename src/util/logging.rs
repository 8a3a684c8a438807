//! Tracing subscriber setup for the desktop binary.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `allocation=debug`.
pub const LOG_FILTER_ENV: &str = "PLANET_TRADE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Resolves the filter directive: a non-blank override wins over the default.
pub fn resolve_filter(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

pub fn build_env_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|source| LoggingError::Filter {
        filter: filter.to_string(),
        source,
    })
}

pub fn init_tracing() -> Result<(), LoggingError> {
    let override_filter = std::env::var(LOG_FILTER_ENV).ok();
    let filter = resolve_filter(override_filter.as_deref());
    let env_filter = build_env_filter(&filter)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(env_filter)
        .try_init()?;

    tracing::info!(target: "logging", filter = %filter, "logging initialized");
    Ok(())
}
