use serde::{Deserialize, Serialize};
use std::fmt;

/// A quotation found in the input text.
///
/// Positions are character offsets into the original input, with
/// `start_position < end_position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: Option<String>,
    /// Provenance label. Never set by the extraction engine.
    pub source: Option<String>,
    /// Surrounding text, set only by context enrichment.
    pub context: Option<String>,
    pub confidence: f64,
    pub start_position: usize,
    pub end_position: usize,
}

impl Quote {
    pub fn new(text: impl Into<String>, start: usize, end: usize, confidence: f64) -> Self {
        Quote {
            text: text.into(),
            author: None,
            source: None,
            context: None,
            confidence,
            start_position: start,
            end_position: end,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Key used to collapse detections of the same span from different strategies.
    pub fn dedup_key(&self) -> (String, usize) {
        (self.text.to_lowercase().trim().to_string(), self.start_position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// A quote as returned to callers, with optional enrichment fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(flatten)]
    pub quote: Quote,
    /// Topic keywords found in the quote text (topic filtering only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl From<Quote> for QuoteRecord {
    fn from(quote: Quote) -> Self {
        QuoteRecord {
            quote,
            topics: None,
            sentiment: None,
        }
    }
}
