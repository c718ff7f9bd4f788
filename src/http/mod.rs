//! HTTP server module.
//!
//! Binds the configured address, serves the router on a plain TCP listener and
//! drains in-flight requests on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server};
