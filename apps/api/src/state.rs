use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::render::style::StyleSheet;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// BRF style sheet, built once at startup.
    pub style: Arc<StyleSheet>,
    /// Pluggable text extractor. Default: `DefaultExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
}
