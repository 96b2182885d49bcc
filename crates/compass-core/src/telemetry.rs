//! Tracing subscriber setup for the binary

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Subscriber installation errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Fallback filter directive did not parse
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already set
    #[error("failed to install subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Install a global `fmt` subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `default_filter`. With `json` set,
/// events are emitted as one JSON object per line.
///
/// # Errors
/// `TelemetryError::Filter` for a malformed `default_filter`,
/// `TelemetryError::Install` if a subscriber is already installed
pub fn init_tracing(default_filter: &str, json: bool) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    let text_layer = (!json).then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));
    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()?;
    Ok(())
}
