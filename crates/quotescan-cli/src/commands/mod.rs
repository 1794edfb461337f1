pub mod batch;
pub mod config;
pub mod extract;

use quotescan_core::config::{load_config, ExtractorConfig};
use quotescan_core::error::QuoteError;
use quotescan_core::extraction::pdftotext::PdftotextExtractor;
use quotescan_core::ProcessOptions;
use std::path::PathBuf;

pub fn options(include_context: bool, include_sentiment: bool, topics: Vec<String>) -> ProcessOptions {
    ProcessOptions {
        include_context,
        include_sentiment,
        topic_keywords: if topics.is_empty() { None } else { Some(topics) },
    }
}

/// Load the config file if given, otherwise the built-in defaults.
fn resolve_config(path: Option<PathBuf>) -> Result<ExtractorConfig, QuoteError> {
    match path {
        Some(path) => load_config(&path),
        None => Ok(ExtractorConfig::default()),
    }
}

fn extractor(layout: bool) -> PdftotextExtractor {
    if layout {
        PdftotextExtractor::with_layout()
    } else {
        PdftotextExtractor::new()
    }
}
