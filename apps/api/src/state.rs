use std::sync::Arc;

use crate::analysis::extraction::TextExtractor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable for the life of the process; holds the job profile.
    pub config: Arc<Config>,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
