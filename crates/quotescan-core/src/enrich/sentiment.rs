use crate::config::SentimentLexicon;
use crate::model::{QuoteRecord, Sentiment};

/// Classify text by how many positive and negative lexicon words it contains.
///
/// Each word counts once if it occurs anywhere in the lowercased text. Ties
/// are neutral.
pub fn classify_sentiment(text: &str, lexicon: &SentimentLexicon) -> Sentiment {
    let lower = text.to_lowercase();
    let count = |words: &[String]| {
        words
            .iter()
            .filter(|w| lower.contains(&w.to_lowercase()))
            .count()
    };

    let positive = count(&lexicon.positive);
    let negative = count(&lexicon.negative);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn tag_sentiment(records: &mut [QuoteRecord], lexicon: &SentimentLexicon) {
    for record in records.iter_mut() {
        record.sentiment = Some(classify_sentiment(&record.quote.text, lexicon));
    }
}
