//! Linkpage Server
//!
//! Serves the link-in-bio profile API. State lives in memory only.

use anyhow::{Context, Result};
use linkpage_core::{PaymentProvider, Storage};
use linkpage_server::config::ServerConfig;
use linkpage_server::services::StripeClient;
use linkpage_server::storage::MemStorage;
use linkpage_server::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linkpage_server=info,tower_http=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Linkpage Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, seed_demo_data={}",
        config.bind_address, config.seed_demo_data
    );

    let storage: Arc<dyn Storage> = if config.seed_demo_data {
        Arc::new(MemStorage::new())
    } else {
        Arc::new(MemStorage::empty())
    };
    info!("In-memory storage initialized");

    let provider: Option<Arc<dyn PaymentProvider>> = match config.stripe_secret_key.clone() {
        Some(key) => {
            info!("Stripe payments enabled ({})", config.stripe_api_base);
            let client = StripeClient::new(key).with_api_base(config.stripe_api_base.clone());
            Some(Arc::new(client) as Arc<dyn PaymentProvider>)
        }
        None => {
            warn!("STRIPE_SECRET_KEY not set, payment endpoints will return 503");
            None
        }
    };

    let state = AppState::new(storage, provider);

    if let Some(ref dir) = config.static_dir {
        info!("Static files directory: {}", dir.display());
    }
    let app = build_router(state, config.static_dir.as_deref());

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
