use super::{char_len, CharIndex, Strategy};
use crate::model::Quote;
use regex::Regex;
use std::sync::LazyLock;

/// Speech verbs recognised next to a quote, matched case-insensitively.
pub const SPEECH_VERBS: &[&str] = &[
    "said",
    "replied",
    "answered",
    "asked",
    "shouted",
    "whispered",
    "mumbled",
];

/// `"quote" verb Name` and `"quote" Name verb`.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let verbs = SPEECH_VERBS.join("|");
    [
        format!(r#"(?i)"([^"]*)"\s+(?:{verbs})\s+([A-Z][a-zA-Z\s]+)"#),
        format!(r#"(?i)"([^"]*)"\s+([A-Z][a-zA-Z\s]+)\s+(?:{verbs})"#),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("dialogue pattern is valid"))
    .collect()
});

/// Find quoted speech attributed to a speaker through a speech verb.
pub fn detect(text: &str) -> Vec<Quote> {
    let index = CharIndex::new(text);
    let mut quotes = Vec::new();

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(inner), Some(speaker)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let quote_text = inner.as_str().trim();
            if char_len(quote_text) <= Strategy::Dialogue.min_text_len() {
                continue;
            }
            quotes.push(
                Quote::new(
                    quote_text,
                    index.char_offset(whole.start()),
                    index.char_offset(whole.end()),
                    Strategy::Dialogue.confidence(),
                )
                .with_author(speaker.as_str().trim()),
            );
        }
    }

    quotes
}
