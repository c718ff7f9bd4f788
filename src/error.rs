//! Startup error types.
//!
//! Request handling is infallible; every error here is fatal and ends the
//! process with a non-zero exit status.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Name resolution or socket bind failure
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:5000".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "Failed to bind 0.0.0.0:5000: address in use");
    }

    #[test]
    fn test_app_error_is_transparent() {
        let err: AppError = ConfigError::Validation("http.port must be between 1 and 65535".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: http.port must be between 1 and 65535"
        );
    }
}
