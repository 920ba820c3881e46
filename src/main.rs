//! Pokedex - A command-line explorer for PokeAPI
//!
//! Starts the interactive REPL on stdin/stdout.

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so logs never mix with the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its reaper
/// 4. Build the API client around the cache
/// 5. Run the REPL until `exit`, end of input, or Ctrl+C
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "error", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}ms, request_timeout={}s",
        config.base_url, config.cache_interval_ms, config.request_timeout_secs
    );

    let (cache, reaper) =
        Cache::new(config.cache_interval()).context("failed to create response cache")?;
    let client =
        PokeApiClient::from_config(&config, cache).context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let interrupted = tokio::select! {
        result = repl::run(&mut session, input, &mut stdout) => {
            result.context("REPL terminated")?;
            false
        }
        _ = shutdown_signal() => true,
    };

    reaper.shutdown().await;
    info!("Pokedex shutdown complete");

    if interrupted {
        // The blocking stdin reader cannot be cancelled; leave without
        // waiting for it.
        std::process::exit(0);
    }
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
