//! Microservice A entry point.
//!
//! Parses the command line, resolves configuration (built-in defaults, then an
//! optional TOML file, then CLI overrides), initializes tracing, builds the
//! router and serves it until SIGTERM/SIGINT. Any startup failure is fatal and
//! exits with status 1.

use std::process::ExitCode;

use clap::Parser;

use microservice_a::{create_router, logging, start_server, AppConfig, AppError, AppState};

/// Microservice A: greeting and health check endpoints
#[derive(Parser, Debug)]
#[command(name = "microservice-a", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Host to bind (overrides config, default 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config, default 5000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    debug: bool,

    /// Log level filter (e.g., "microservice_a=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Args {
    /// Build the effective configuration: file (or defaults) with CLI overrides.
    fn resolve_config(&self) -> Result<AppConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if self.debug {
            config.http.debug = true;
        }

        config.validate()?;
        Ok(config)
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = args.resolve_config()?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.default_log_filter().to_string());
    logging::init(&log_filter, &config.logging)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        service = %config.service.name,
        "Loaded configuration"
    );

    let app = create_router(AppState::new(config.clone()));

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("microservice-a: {e}");
            ExitCode::FAILURE
        }
    }
}
