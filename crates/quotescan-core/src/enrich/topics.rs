use crate::model::QuoteRecord;

/// Keywords occurring in `text`, case-insensitively, in the caller's order.
pub fn matching_topics(text: &str, keywords: &[String]) -> Vec<String> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|k| lower.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}

/// Keep only records mentioning at least one keyword and attach the matches.
pub fn filter_by_topics(records: Vec<QuoteRecord>, keywords: &[String]) -> Vec<QuoteRecord> {
    records
        .into_iter()
        .filter_map(|mut record| {
            let topics = matching_topics(&record.quote.text, keywords);
            if topics.is_empty() {
                None
            } else {
                record.topics = Some(topics);
                Some(record)
            }
        })
        .collect()
}
