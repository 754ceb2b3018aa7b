mod config;
mod errors;
mod layout;
mod moodboard;
mod routes;
mod scene;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::moodboard::fonts::{FontCatalog, StaticFontCatalog};
use crate::moodboard::images::{HttpImageFetcher, ImageFetcher, PlaceholderImageFetcher};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Moodboard API v{}", env!("CARGO_PKG_VERSION"));

    // Image loading: network by default, placeholders for offline work
    let fetcher: Arc<dyn ImageFetcher> = if config.offline_images {
        info!("Image fetcher: offline placeholders");
        Arc::new(PlaceholderImageFetcher)
    } else {
        info!("Image fetcher: HTTP");
        Arc::new(HttpImageFetcher::new()?)
    };

    let fonts: Arc<dyn FontCatalog> = match &config.available_fonts {
        Some(families) => {
            info!("Font catalog: {} configured families", families.len());
            Arc::new(StaticFontCatalog::new(families))
        }
        None => Arc::new(StaticFontCatalog::default()),
    };

    info!(
        "Canvas: {}x{}, layout seed: {:?}",
        config.canvas_width, config.canvas_height, config.layout_seed
    );

    let state = AppState::new(config.clone(), fetcher, fonts);
    let shutdown = state.shutdown.clone();

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = shutdown.notified() => info!("Shutdown requested by cancel command"),
                _ = tokio::signal::ctrl_c() => info!("Received Ctrl-C"),
            }
        })
        .await?;

    Ok(())
}
