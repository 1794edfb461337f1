//! Block quotation detection.
//!
//! Scans the text line by line and groups consecutive lines that look like
//! quoted material into a single block. A line qualifies when, after
//! trimming, it is longer than [`MIN_LINE_LEN`] and at least one of these
//! holds:
//!
//! - it starts with a `>` marker
//! - it is longer than 50 characters and does not end with a period
//! - it is longer than 30 characters and entirely uppercase
//! - none of its first 10 characters is a digit (any script, including
//!   superscripts)
//!
//! A block is emitted once the run ends, if its joined text is longer than
//! [`Strategy::Block`]'s minimum.

use super::{char_len, CharIndex, Strategy};
use crate::model::Quote;

/// Trimmed lines of this many characters or fewer never join a block.
pub const MIN_LINE_LEN: usize = 20;

const LONG_LINE_LEN: usize = 50;
const SHOUTED_LINE_LEN: usize = 30;
const DIGIT_PREFIX_LEN: usize = 10;

/// A trimmed line and the byte offset where it starts in the full text.
struct Line<'a> {
    text: &'a str,
    start: usize,
}

pub fn detect(text: &str) -> Vec<Quote> {
    let index = CharIndex::new(text);
    let mut quotes = Vec::new();
    let mut block: Vec<Line> = Vec::new();
    let mut offset = 0;

    for raw in text.split('\n') {
        let trimmed = raw.trim();
        let leading = raw.len() - raw.trim_start().len();
        let line = Line {
            text: trimmed,
            start: offset + leading,
        };
        offset += raw.len() + 1;

        if is_quote_line(trimmed) && char_len(trimmed) > MIN_LINE_LEN {
            block.push(line);
        } else if !block.is_empty() {
            flush(&mut block, &index, &mut quotes);
        }
    }

    // A block still open at end of input.
    flush(&mut block, &index, &mut quotes);

    quotes
}

fn flush(block: &mut Vec<Line>, index: &CharIndex, quotes: &mut Vec<Quote>) {
    let lines = std::mem::take(block);
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return;
    };

    let joined = lines.iter().map(|l| l.text).collect::<Vec<_>>().join(" ");
    if char_len(&joined) <= Strategy::Block.min_text_len() {
        return;
    }

    quotes.push(Quote::new(
        joined,
        index.char_offset(first.start),
        index.char_offset(last.start + last.text.len()),
        Strategy::Block.confidence(),
    ));
}

fn is_quote_line(line: &str) -> bool {
    let len = char_len(line);
    line.starts_with('>')
        || (len > LONG_LINE_LEN && !line.ends_with('.'))
        || (len > SHOUTED_LINE_LEN && is_uppercase(line))
        || (!line.is_empty()
            && !line
                .chars()
                .take(DIGIT_PREFIX_LEN)
                .any(char::is_numeric))
}

/// True when the line has cased letters and none of them is lowercase.
fn is_uppercase(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}
