// src/main.rs

use doner_preview::cli;
use doner_preview::config::Config;
use doner_preview::routes;
use doner_preview::state::AppState;
use doner_preview::upstream::HttpTranspiler;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (if present)
    dotenv().ok();

    // `doner-preview <input.html>` checks a single file instead of serving
    if let Some(input) = std::env::args().nth(1).filter(|arg| !arg.starts_with('-')) {
        return cli::run(Path::new(&input));
    }

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let upstream = match HttpTranspiler::new(
        &config.upstream_url,
        Duration::from_secs(config.upstream_timeout_secs),
    ) {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!("Cannot set up transpilation client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Forwarding transpile requests to {}", upstream.base_url());

    if config.static_dir.is_dir() {
        tracing::info!("Serving frontend from {}", config.static_dir.display());
    } else {
        tracing::info!("No static files found, API only mode");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Create AppState
    let state = AppState {
        config,
        upstream: Arc::new(upstream),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("D.Ö.N.E.R preview server listening on {}", addr);

    // Start the server
    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
