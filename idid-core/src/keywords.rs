use crate::entry::LogEntry;
use crate::tokenize::tokenize;
use std::collections::HashMap;

/// Returns the `n` most frequent tokens across all entries' text.
///
/// Equal counts are broken by first-occurrence order so the ranking stays
/// reproducible. Returns fewer than `n` keywords when fewer distinct tokens
/// exist.
pub fn top_keywords(logs: &[LogEntry], n: usize) -> Vec<String> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut seen: Vec<String> = Vec::new();
    for log in logs {
        for token in tokenize(&log.text) {
            let count = freq.entry(token.clone()).or_insert(0);
            if *count == 0 {
                seen.push(token);
            }
            *count += 1;
        }
    }
    // `sort_by` is stable, so ties keep the first-occurrence order of `seen`.
    let mut ranked = seen;
    ranked.sort_by(|a, b| freq[b.as_str()].cmp(&freq[a.as_str()]));
    ranked.truncate(n);
    ranked
}
