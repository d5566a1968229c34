mod config;
mod contact;
mod errors;
mod home;
mod projects;
mod routes;
mod shell;
mod state;
mod storage;
mod tools;
mod visitor;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileStorage;
use crate::tools::facts::FactClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));
    info!("Serving site from {}", config.site_root.display());

    let storage = FileStorage::open(config.storage_path.clone()).await;
    info!("Visitor storage at {}", config.storage_path.display());

    let facts = FactClient::new(config.fact_api_url.clone())?;
    info!("Earth fact client initialized ({})", config.fact_api_url);

    let state = AppState {
        config: config.clone(),
        storage: Arc::new(storage),
        facts,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
