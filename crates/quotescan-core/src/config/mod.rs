pub mod builtin;
pub mod schema;

use crate::error::QuoteError;
use std::path::Path;

pub use schema::{ExtractorConfig, SentimentLexicon};

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<ExtractorConfig, QuoteError> {
    let content = std::fs::read_to_string(path).map_err(|e| QuoteError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse a config from a JSON string read from `source`.
pub fn parse_config(json: &str, source: &Path) -> Result<ExtractorConfig, QuoteError> {
    let config: ExtractorConfig =
        serde_json::from_str(json).map_err(|e| QuoteError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<ExtractorConfig, QuoteError> {
    let config: ExtractorConfig = serde_json::from_str(json).map_err(QuoteError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config is usable.
pub fn validate_config(config: &ExtractorConfig) -> Result<(), QuoteError> {
    if config.context_length == 0 {
        return Err(QuoteError::ConfigInvalid(
            "context_length must be greater than zero".into(),
        ));
    }

    let lexicon = &config.sentiment;
    for (name, words) in [("positive", &lexicon.positive), ("negative", &lexicon.negative)] {
        if words.is_empty() {
            return Err(QuoteError::ConfigInvalid(format!(
                "sentiment.{name} must not be empty"
            )));
        }
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(QuoteError::ConfigInvalid(format!(
                "sentiment.{name} contains a blank word"
            )));
        }
    }

    if let Some(word) = lexicon.positive.iter().find(|p| {
        lexicon
            .negative
            .iter()
            .any(|n| n.to_lowercase() == p.to_lowercase())
    }) {
        return Err(QuoteError::ConfigInvalid(format!(
            "word '{}' is listed as both positive and negative",
            word
        )));
    }

    Ok(())
}
