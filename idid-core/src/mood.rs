use crate::lexicon::{NEGATIVE, POSITIVE};
use serde::{Deserialize, Serialize};

/// Coarse mood label inferred from a day's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    /// The emoji glyph used when rendering this mood.
    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Positive => "🙂",
            Mood::Negative => "😞",
            Mood::Neutral => "😐",
        }
    }
}

/// Scores `text` against the fixed positive/negative lexicons.
///
/// Matching is intentionally crude: each lexicon word counts once if it
/// occurs as a substring anywhere in the case-folded text. No tokenization,
/// no negation handling.
pub fn mood_from_text(text: &str) -> Mood {
    let t = text.to_lowercase();
    let mut score: i32 = 0;
    for word in POSITIVE {
        if t.contains(word) {
            score += 1;
        }
    }
    for word in NEGATIVE {
        if t.contains(word) {
            score -= 1;
        }
    }
    if score >= 1 {
        Mood::Positive
    } else if score <= -1 {
        Mood::Negative
    } else {
        Mood::Neutral
    }
}
