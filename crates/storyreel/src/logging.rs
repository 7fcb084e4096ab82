//! Tracing subscriber setup.

use storyreel_error::{ConfigError, ConfigErrorKind, StoryreelResult};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "debug,hyper=info,reqwest=info"
    } else {
        "info"
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose`. With `json` set, every event is written
/// as one JSON object per line.
///
/// # Errors
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_logging(verbose: bool, json: bool) -> StoryreelResult<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(default_directives(verbose)),
    }
    .map_err(|e| ConfigError::new(ConfigErrorKind::Logging(format!("invalid filter: {}", e))))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };
    installed.map_err(|e| ConfigError::new(ConfigErrorKind::Logging(e.to_string())))?;
    Ok(())
}
