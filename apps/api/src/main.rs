mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod spellcheck;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::DocumentTextExtractor;
use crate::routes::build_router;
use crate::spellcheck::WordListDictionary;
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

    info!("Starting ATS scoring API v{}", env!("CARGO_PKG_VERSION"));

    // Load the spelling word list once; it is shared read-only by every request
    let dictionary = match &config.dictionary_path {
        Some(path) => {
            let dictionary = WordListDictionary::from_file(path)?;
            info!(
                "Dictionary loaded from {} ({} words)",
                path.display(),
                dictionary.len()
            );
            dictionary
        }
        None => {
            let dictionary = WordListDictionary::bundled();
            info!("Bundled dictionary loaded ({} words)", dictionary.len());
            dictionary
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(DocumentTextExtractor),
        dictionary: Arc::new(dictionary),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
