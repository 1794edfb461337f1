/// Default number of context characters on each side of a quote.
pub const DEFAULT_CONTEXT_LENGTH: usize = 100;

pub const POSITIVE_WORDS: &[&str] = &[
    "love",
    "great",
    "amazing",
    "wonderful",
    "excellent",
    "fantastic",
    "beautiful",
];

pub const NEGATIVE_WORDS: &[&str] = &["hate", "terrible", "awful", "horrible", "disgusting", "bad"];

pub fn default_context_length() -> usize {
    DEFAULT_CONTEXT_LENGTH
}
