use super::{char_len, CharIndex, Strategy};
use crate::model::Quote;
use regex::Regex;
use std::sync::LazyLock;

/// Paired delimiters: ASCII double, ASCII single, typographic double, typographic single.
///
/// No escaping: a delimiter inside the span ends the match.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""([^"]*)""#,
        r"'([^']*)'",
        "\u{201C}([^\u{201D}]*)\u{201D}",
        "\u{2018}([^\u{2019}]*)\u{2019}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("quoted-span pattern is valid"))
    .collect()
});

/// Find every span enclosed by a pair of quotation marks.
pub fn detect(text: &str) -> Vec<Quote> {
    let index = CharIndex::new(text);
    let mut quotes = Vec::new();

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let quote_text = inner.as_str().trim();
            if char_len(quote_text) <= Strategy::Quoted.min_text_len() {
                continue;
            }
            quotes.push(Quote::new(
                quote_text,
                index.char_offset(whole.start()),
                index.char_offset(whole.end()),
                Strategy::Quoted.confidence(),
            ));
        }
    }

    quotes
}
