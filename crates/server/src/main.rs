use clap::Parser;
use clgbooks_core::config;
use clgbooks_core::storage::{load_seed_file, sample_seed, Catalog, CatalogSeed};
use clgbooks_server::api::create_router;
use clgbooks_server::api::handlers::AppState;
use clgbooks_server::api::metrics;
use std::future::IntoFuture;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clgbooks", about = "College library catalog lookup service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// JSON seed file with catalog items and external resources
    #[arg(long, env = "CLGBOOKS_CATALOG_FILE")]
    catalog_file: Option<PathBuf>,

    /// Start with an empty catalog instead of the built-in sample books
    #[arg(long, default_value_t = false)]
    no_sample_data: bool,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    shutdown_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("clgbooks_server=info".parse()?)
                .add_directive("clgbooks_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    let seed = match args.catalog_file {
        Some(ref path) => load_seed_file(path).unwrap_or_else(|e| {
            eprintln!(
                "Error: failed to load catalog file '{}': {}",
                path.display(),
                e
            );
            std::process::exit(1);
        }),
        None if args.no_sample_data => {
            tracing::info!("Starting with an empty catalog");
            CatalogSeed::default()
        }
        None => {
            tracing::info!("No catalog file given, loading sample books");
            sample_seed()
        }
    };

    let catalog = Catalog::from_seed(seed).unwrap_or_else(|e| {
        eprintln!("Error: invalid catalog: {}", e);
        std::process::exit(1);
    });

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let state = AppState::new(catalog.clone(), prometheus_handle);
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        catalog_items = catalog.item_count(),
        external_resources = catalog.resource_count(),
        "clgbooks ready"
    );

    // Spawn catalog metrics background task
    let metrics_catalog = catalog.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(Duration::from_secs(config::METRICS_REFRESH_INTERVAL_SECS));
        loop {
            interval.tick().await;
            metrics::update_catalog_metrics(&metrics_catalog);
        }
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .into_future();

    // In-flight requests get `shutdown_timeout` seconds after the signal.
    let shutdown_timeout = Duration::from_secs(args.shutdown_timeout);
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        wait_for_signal().await;
        let _ = drain_tx.send(());
    });

    tokio::select! {
        result = server => result?,
        _ = async {
            let _ = drain_rx.await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            tracing::warn!(
                "Shutdown timeout ({}s) exceeded, dropping remaining connections",
                args.shutdown_timeout
            );
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
