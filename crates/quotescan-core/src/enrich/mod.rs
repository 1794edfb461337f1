//! Optional, caller-requested enrichment of extracted quotes.
//!
//! None of these run as part of [`crate::extract_quotes`].

pub mod context;
pub mod sentiment;
pub mod topics;

pub use context::{enhance_with_context, extract_context};
pub use sentiment::{classify_sentiment, tag_sentiment};
pub use topics::{filter_by_topics, matching_topics};
