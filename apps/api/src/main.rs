mod config;
mod conversion;
mod errors;
mod extraction;
mod models;
mod parsing;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::DefaultExtractor;
use crate::render::StyleSheet;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BRF formatter v{}", env!("CARGO_PKG_VERSION"));

    let style = Arc::new(StyleSheet::brf());
    info!(
        "BRF style: {} {}pt, bullet {:?}",
        style.font_family, style.font_size_pt, style.bullet_glyph
    );
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState {
        config: config.clone(),
        style,
        extractor: Arc::new(DefaultExtractor),
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
