//! Caller-facing processing: extraction plus optional enrichment, wrapped in
//! a result envelope that always carries an explicit success flag.

use crate::config::ExtractorConfig;
use crate::enrich;
use crate::error::QuoteError;
use crate::model::QuoteRecord;
use serde::{Deserialize, Serialize};

/// Enrichments requested by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Attach surrounding text to every quote.
    pub include_context: bool,
    /// Tag every returned quote as positive, negative or neutral.
    pub include_sentiment: bool,
    /// Keep only quotes mentioning one of these keywords.
    pub topic_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingFlags {
    pub sentiment_analysis: bool,
    pub topic_filtering: bool,
    pub context: bool,
}

impl From<&ProcessOptions> for ProcessingFlags {
    fn from(options: &ProcessOptions) -> Self {
        ProcessingFlags {
            sentiment_analysis: options.include_sentiment,
            topic_filtering: options.topic_keywords.is_some(),
            context: options.include_context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub success: bool,
    pub quotes: Vec<QuoteRecord>,
    pub total_quotes: usize,
    /// Input length in characters.
    pub text_length: usize,
    pub processing_options: ProcessingFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    pub fn failure(error: &QuoteError, text_length: usize, options: &ProcessOptions) -> Self {
        ProcessingResult {
            success: false,
            quotes: Vec::new(),
            total_quotes: 0,
            text_length,
            processing_options: options.into(),
            error: Some(error.to_string()),
        }
    }
}

/// Reject input the engine should not be asked to process.
pub fn validate_text(text: &str) -> Result<(), QuoteError> {
    if text.trim().is_empty() {
        return Err(QuoteError::EmptyText);
    }
    Ok(())
}

/// Reject enrichment options that cannot be applied.
pub fn validate_options(options: &ProcessOptions) -> Result<(), QuoteError> {
    if let Some(keywords) = &options.topic_keywords {
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(QuoteError::InvalidOptions(
                "topic keywords must not be blank".into(),
            ));
        }
    }
    Ok(())
}

/// Extract quotes and apply the requested enrichments.
///
/// Context is attached first, topic filtering narrows the set, and sentiment
/// is tagged on whatever remains.
pub fn run(
    text: &str,
    options: &ProcessOptions,
    config: &ExtractorConfig,
) -> Result<Vec<QuoteRecord>, QuoteError> {
    validate_text(text)?;
    validate_options(options)?;

    let mut quotes = crate::extract_quotes(text);
    if options.include_context {
        enrich::enhance_with_context(text, &mut quotes, config.context_length);
    }

    let mut records: Vec<QuoteRecord> = quotes.into_iter().map(QuoteRecord::from).collect();
    // An empty keyword list leaves the set unfiltered.
    if let Some(keywords) = options.topic_keywords.as_ref().filter(|k| !k.is_empty()) {
        records = enrich::filter_by_topics(records, keywords);
    }
    if options.include_sentiment {
        enrich::tag_sentiment(&mut records, &config.sentiment);
    }

    Ok(records)
}

/// Process text into a result envelope. Never fails: errors are reported
/// through `success` and `error`, with an empty quote list.
pub fn process_text(
    text: &str,
    options: &ProcessOptions,
    config: &ExtractorConfig,
) -> ProcessingResult {
    let text_length = text.chars().count();
    match run(text, options, config) {
        Ok(quotes) => ProcessingResult {
            success: true,
            total_quotes: quotes.len(),
            quotes,
            text_length,
            processing_options: options.into(),
            error: None,
        },
        Err(e) => {
            tracing::error!("Error processing text: {}", e);
            ProcessingResult::failure(&e, text_length, options)
        }
    }
}
