//! Fixed word lists used by the analysis pipeline and the decision helper.
//!
//! These are static configuration data: initialized once, never mutated.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Korean particles and filler words skipped during tokenization.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "그리고", "그래서", "그냥", "오늘", "지금", "내가", "나는", "너무", "조금", "정말",
        "같아", "같은", "있어", "없어", "했다", "했어", "합니다", "되다", "된다", "하는",
        "을", "를", "은", "는", "이", "가", "에", "에서", "으로", "로", "과", "와", "도", "만",
        "하다", "한", "또", "좀", "더", "덜", "왜", "어떻게", "무슨",
    ]
    .into_iter()
    .collect()
});

/// Words counted toward a positive mood when found as substrings.
pub const POSITIVE: &[&str] = &[
    "좋", "행복", "감사", "만족", "즐겁", "신기", "기쁘", "편안", "성공",
];

/// Words counted toward a negative mood.
pub const NEGATIVE: &[&str] = &[
    "짜증", "피곤", "우울", "불안", "걱정", "아프", "힘들", "스트레스", "화",
];

/// Signals that a question leans toward acting now.
pub const GO_SIGNALS: &[&str] = &[
    "운동", "헬스", "마감", "약속", "목표", "정리", "시작", "습관", "중요", "필요",
];

/// Signals that a question leans toward resting or deferring.
pub const REST_SIGNALS: &[&str] = &[
    "피곤", "졸", "아프", "컨디션", "시간없", "늦", "무리", "스트레스", "힘들", "돈", "비용",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwords_contains_particles() {
        assert!(STOPWORDS.contains("그리고"));
        assert!(STOPWORDS.contains("을"));
        assert!(!STOPWORDS.contains("운동"));
    }
}
