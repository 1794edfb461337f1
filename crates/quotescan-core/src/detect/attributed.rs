use super::{char_len, CharIndex, Strategy};
use crate::model::Quote;
use regex::Regex;
use std::sync::LazyLock;

/// Quote followed by an attribution cue, tried in order:
/// dash (hyphen, em-dash, en-dash), "by", then comma; each for double and single quotes.
///
/// The name is a capital letter followed by letters and whitespace.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""([^"]*)"\s*[-—–]\s*([A-Z][a-zA-Z\s]+)"#,
        r"'([^']*)'\s*[-—–]\s*([A-Z][a-zA-Z\s]+)",
        r#""([^"]*)"\s*by\s+([A-Z][a-zA-Z\s]+)"#,
        r"'([^']*)'\s*by\s+([A-Z][a-zA-Z\s]+)",
        r#""([^"]*)"\s*,\s*([A-Z][a-zA-Z\s]+)"#,
        r"'([^']*)'\s*,\s*([A-Z][a-zA-Z\s]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("attribution pattern is valid"))
    .collect()
});

/// Find quotes paired with an attributed author.
pub fn detect(text: &str) -> Vec<Quote> {
    let index = CharIndex::new(text);
    let mut quotes = Vec::new();

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(inner), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let quote_text = inner.as_str().trim();
            if char_len(quote_text) <= Strategy::Attributed.min_text_len() {
                continue;
            }
            quotes.push(
                Quote::new(
                    quote_text,
                    index.char_offset(whole.start()),
                    index.char_offset(whole.end()),
                    Strategy::Attributed.confidence(),
                )
                .with_author(name.as_str().trim()),
            );
        }
    }

    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_attribution() {
        let text = r#""Be the change you wish to see in the world." - Mahatma Gandhi"#;
        let quotes = detect(text);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "Be the change you wish to see in the world.");
        assert_eq!(quotes[0].author.as_deref(), Some("Mahatma Gandhi"));
        assert_eq!(quotes[0].confidence, 0.95);
        assert_eq!(quotes[0].start_position, 0);
        assert_eq!(quotes[0].end_position, text.len());
    }

    #[test]
    fn test_em_dash_and_en_dash() {
        let em = detect("\"Quality is never an accident\" — John Ruskin");
        assert_eq!(em[0].author.as_deref(), Some("John Ruskin"));
        let en = detect("\"Quality is never an accident\"–John Ruskin");
        assert_eq!(en[0].author.as_deref(), Some("John Ruskin"));
    }

    #[test]
    fn test_by_attribution() {
        let quotes = detect(r#""The machine pays for itself" by Sales Team"#);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].author.as_deref(), Some("Sales Team"));
    }

    #[test]
    fn test_comma_attribution_single_quotes() {
        let quotes = detect("'Delivery within twelve weeks', Project Manager");
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "Delivery within twelve weeks");
        assert_eq!(quotes[0].author.as_deref(), Some("Project Manager"));
    }

    #[test]
    fn test_lowercase_name_not_attributed() {
        assert!(detect(r#""A perfectly long quote here" - anonymous"#).is_empty());
    }

    #[test]
    fn test_short_quote_rejected() {
        assert!(detect(r#""Too short" - Somebody"#).is_empty());
    }
}
