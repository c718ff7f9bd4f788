//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::AppError;

/// Install the global subscriber with the given filter directives.
///
/// `json` output emits one structured object per event, including the fields
/// of the enclosing request span.
pub fn init(filter: &str, logging: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::Logging(format!("invalid log filter \"{}\": {}", filter, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}
