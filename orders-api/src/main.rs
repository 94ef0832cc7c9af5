//! orders-api - Unified order reconciliation service
//!
//! Loads the System A (JSON) and System B (CSV) order exports once at
//! startup, normalizes them into one collection and serves it read-only over
//! HTTP together with a small browser table UI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orders_common::config::{self, Overrides, ServiceConfig};
use orders_common::{load_orders, OrderStore};
use orders_api::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for orders-api
#[derive(Parser, Debug)]
#[command(name = "orders-api")]
#[command(about = "Read-only API over orders reconciled from legacy exports")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory holding system_a_orders.json and system_b_orders.csv
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Serve the browser UI from this directory instead of the embedded copy
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "ORDERS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            bind: self.bind.clone(),
            data_dir: self.data_dir.clone(),
            static_dir: self.static_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The config file may set the log level, so read it before tracing starts
    let file = config::load_toml_config(args.config.as_deref());
    let log_level = args
        .log_level
        .clone()
        .or_else(|| {
            file.as_ref()
                .ok()
                .and_then(|f| f.as_ref())
                .map(|f| f.logging.level.clone())
        })
        .unwrap_or_else(|| config::DEFAULT_LOG_LEVEL.to_string());
    init_tracing(&log_level);

    info!(
        "Starting Unified Orders API (orders-api) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let file = file.context("Failed to load configuration")?;
    let config = ServiceConfig::resolve(args.overrides(), file);
    info!("Data directory: {}", config.data_dir.display());

    // Load once, before accepting traffic; a missing source is not fatal
    let report = load_orders(&config.sources);
    for failed in report.failed_sources() {
        warn!(
            "{} unavailable, serving without it",
            failed.kind.source_system()
        );
    }
    let store = OrderStore::new(report.orders);

    if let Some(dir) = &config.static_dir {
        info!("Serving UI from {}", dir.display());
    }
    let state = AppState::new(store).with_static_dir(config.static_dir.clone());
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("orders-api listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "orders_api={level},orders_common={level},tower_http={level}",
                    level = level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn resolve(argv: &[&str]) -> ServiceConfig {
        let args = Args::try_parse_from(argv).unwrap();
        ServiceConfig::resolve(args.overrides(), None)
    }

    #[test]
    #[serial]
    fn test_port_env_sets_listen_port() {
        env::set_var("PORT", "4321");
        let config = resolve(&["orders-api"]);
        env::remove_var("PORT");

        assert_eq!(config.port, 4321);
        assert_eq!(config.listen_addr(), "0.0.0.0:4321");
    }

    #[test]
    #[serial]
    fn test_port_flag_beats_env() {
        env::set_var("PORT", "4321");
        let config = resolve(&["orders-api", "--port", "5000"]);
        env::remove_var("PORT");

        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn test_default_port_without_env() {
        env::remove_var("PORT");
        let config = resolve(&["orders-api"]);
        assert_eq!(config.port, config::DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn test_invalid_port_env_is_rejected() {
        env::set_var("PORT", "not-a-port");
        let result = Args::try_parse_from(["orders-api"]);
        env::remove_var("PORT");

        assert!(result.is_err());
    }

    #[test]
    fn test_data_dir_flag() {
        let config = resolve(&["orders-api", "--data-dir", "/srv/orders"]);
        assert_eq!(config.sources.system_b, PathBuf::from("/srv/orders/system_b_orders.csv"));
    }
}
