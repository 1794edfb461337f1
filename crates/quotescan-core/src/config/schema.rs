use crate::config::builtin;
use serde::{Deserialize, Serialize};

/// Tunables for the optional enrichment steps.
///
/// Every field has a built-in default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Characters of surrounding text kept on each side by context enrichment.
    #[serde(default = "builtin::default_context_length")]
    pub context_length: usize,
    #[serde(default)]
    pub sentiment: SentimentLexicon,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            context_length: builtin::default_context_length(),
            sentiment: SentimentLexicon::default(),
        }
    }
}

/// Keyword lists for sentiment tagging. Matching is by lowercase substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        SentimentLexicon {
            positive: builtin::POSITIVE_WORDS.iter().map(|s| s.to_string()).collect(),
            negative: builtin::NEGATIVE_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
