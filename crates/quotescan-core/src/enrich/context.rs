use crate::model::Quote;

/// Text surrounding a quote: up to `context_length` characters on each side
/// of the quote's span, trimmed.
pub fn extract_context(text: &str, quote: &Quote, context_length: usize) -> String {
    let total = text.chars().count();
    let start = quote.start_position.saturating_sub(context_length);
    let end = quote
        .end_position
        .saturating_add(context_length)
        .min(total);
    if start >= end {
        return String::new();
    }

    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    text[from..to].trim().to_string()
}

/// Set `context` on every quote.
pub fn enhance_with_context(text: &str, quotes: &mut [Quote], context_length: usize) {
    for quote in quotes.iter_mut() {
        quote.context = Some(extract_context(text, quote, context_length));
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}
