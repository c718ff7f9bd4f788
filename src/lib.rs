//! Microservice A: a greeting at `/` and a JSON health check at `/health`.
//!
//! The binary resolves an [`AppConfig`], builds the router with
//! [`create_router`] and hands it to [`start_server`].

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, ServerError};
pub use crate::http::start_server;
pub use routes::create_router;
pub use state::AppState;
