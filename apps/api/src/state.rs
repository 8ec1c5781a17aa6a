use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::spellcheck::Dictionary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document text extractor. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Process-wide read-only word list for the spelling check,
    /// loaded once at startup and shared across requests.
    pub dictionary: Arc<dyn Dictionary>,
}
