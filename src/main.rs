// mkshop - terminal storefront client for the MK Clothing shop backend
//
// Architecture:
// - api (reqwest): GET /products, POST /seed, POST /orders, GET /test
// - store: all shop state, mutated only through explicit actions
// - net: background tasks reporting results over an mpsc channel
// - TUI (ratatui): product grid, cart, search box, logs, help
//
// The TUI event loop is the single place state changes and the single
// consumer of network results; nothing else holds mutable state.

mod api;
mod cart;
mod catalog;
mod cli;
mod config;
mod logging;
mod net;
mod order;
mod store;
mod tui;

use anyhow::Result;
use api::ApiClient;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use net::NetEvent;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --path, --reset)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let config = Config::from_env();

    // Log buffer backing the in-TUI logs view
    let log_buffer = LogBuffer::new();

    // Initialize tracing with conditional output:
    // - TUI mode: capture logs to the buffer (prevents garbling the display)
    // - Headless mode: output logs to stdout
    // - File logging: optionally also write rotating JSON log files
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("mkshop={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's lifetime so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                init_tracing_without_file(&config, filter, &log_buffer);
                None
            }
            Ok(()) => {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                if config.enable_tui {
                    let file_layer = tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(file_layer)
                        .init();
                } else {
                    let file_layer = tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer())
                        .with(file_layer)
                        .init();
                }
                Some(guard)
            }
        }
    } else {
        init_tracing_without_file(&config, filter, &log_buffer);
        None
    };

    let api = ApiClient::new(config.backend_url.clone());
    tracing::info!("Backend: {}", api.base_url());

    // Network tasks report back over this channel; the UI loop (or the
    // headless loop) is the sole consumer
    let (event_tx, event_rx) = mpsc::channel::<NetEvent>(64);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        tui::run_tui(config, api, log_buffer, event_rx, event_tx).await?;
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        run_headless(api, event_rx, event_tx).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing_without_file(config: &Config, filter: EnvFilter, log_buffer: &LogBuffer) {
    if config.enable_tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Headless mode: fetch the catalog once, log it, and wait for Ctrl+C
///
/// Useful as a connectivity check against the backend without a terminal
/// UI (e.g. inside a container).
async fn run_headless(
    api: ApiClient,
    mut event_rx: mpsc::Receiver<NetEvent>,
    event_tx: mpsc::Sender<NetEvent>,
) -> Result<()> {
    net::spawn_load(api, event_tx);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(event) = event_rx.recv() => match event {
                NetEvent::ProductsLoaded(Ok(products)) => {
                    tracing::info!("Catalog: {} products", products.len());
                    for product in &products {
                        tracing::info!("  #{} {} (${:.2})", product.id, product.title, product.price);
                    }
                }
                NetEvent::ProductsLoaded(Err(e)) => {
                    tracing::error!("Catalog load failed: {}", e);
                }
                _ => {}
            },
        }
    }

    tracing::info!("Shutting down...");
    Ok(())
}
