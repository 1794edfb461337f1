use crate::model::Quote;
use std::collections::HashSet;

/// Drop duplicate detections and order the survivors by start position.
///
/// Two quotes are duplicates when they share [`Quote::dedup_key`]. The first
/// one in input order is kept, so the strategy order of the input decides
/// which confidence and author survive. The sort is stable.
pub fn merge(quotes: Vec<Quote>) -> Vec<Quote> {
    let mut seen = HashSet::new();
    let mut kept: Vec<Quote> = quotes
        .into_iter()
        .filter(|q| seen.insert(q.dedup_key()))
        .collect();

    kept.sort_by_key(|q| q.start_position);
    kept
}
