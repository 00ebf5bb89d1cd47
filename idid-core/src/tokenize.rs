use crate::lexicon::STOPWORDS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any character that is not a Unicode letter, digit or whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid regex"));

/// Splits free text into candidate keyword tokens.
///
/// Non-word characters are treated as separators, the rest is split on
/// whitespace runs. Tokens shorter than two characters and tokens in the
/// stop-word set are dropped. An empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD
        .replace_all(text, " ")
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2 && !STOPWORDS.contains(*t))
        .map(str::to_string)
        .collect()
}
