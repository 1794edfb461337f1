//! Quote detection strategies.
//!
//! Each strategy is a pure function of the input text. The pipeline runs all
//! of them over the same input, in the order of [`Strategy::ALL`], and hands
//! the pooled detections to [`merge::merge`].

pub mod attributed;
pub mod block;
pub mod dialogue;
pub mod merge;
pub mod quoted;

use crate::model::Quote;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Quoted,
    Attributed,
    Block,
    Dialogue,
}

impl Strategy {
    /// All strategies in pipeline order. Earlier strategies win on duplicates.
    pub const ALL: [Strategy; 4] = [
        Strategy::Quoted,
        Strategy::Attributed,
        Strategy::Block,
        Strategy::Dialogue,
    ];

    pub fn confidence(self) -> f64 {
        match self {
            Strategy::Quoted => 0.9,
            Strategy::Attributed => 0.95,
            Strategy::Block => 0.7,
            Strategy::Dialogue => 0.85,
        }
    }

    /// Quote text must be strictly longer than this many characters.
    pub fn min_text_len(self) -> usize {
        match self {
            Strategy::Quoted | Strategy::Attributed => 10,
            Strategy::Block => 30,
            Strategy::Dialogue => 5,
        }
    }

    pub fn detect(self, text: &str) -> Vec<Quote> {
        match self {
            Strategy::Quoted => quoted::detect(text),
            Strategy::Attributed => attributed::detect(text),
            Strategy::Block => block::detect(text),
            Strategy::Dialogue => dialogue::detect(text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Quoted => "quoted",
            Strategy::Attributed => "attributed",
            Strategy::Block => "block",
            Strategy::Dialogue => "dialogue",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run every strategy and concatenate the detections in strategy order.
pub fn run_all(text: &str) -> Vec<Quote> {
    let mut all = Vec::new();
    for strategy in Strategy::ALL {
        let found = strategy.detect(text);
        tracing::debug!(strategy = %strategy, count = found.len(), "detector finished");
        all.extend(found);
    }
    all
}

/// Length in characters, as used by every admission threshold.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Maps byte offsets produced by `regex` and `str` searches to character offsets.
pub(crate) struct CharIndex {
    /// Byte offset of every char start; empty when the text is pure ASCII.
    starts: Vec<usize>,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let starts = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices().map(|(i, _)| i).collect()
        };
        CharIndex { starts }
    }

    /// Character offset of a byte offset lying on a char boundary.
    pub(crate) fn char_offset(&self, byte: usize) -> usize {
        if self.starts.is_empty() {
            byte
        } else {
            self.starts.partition_point(|&b| b < byte)
        }
    }
}
