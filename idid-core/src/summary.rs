use crate::entry::LogEntry;
use crate::keywords::top_keywords;
use crate::mood::{Mood, mood_from_text};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shown in place of a digest when a day has no entries.
pub const NO_ENTRIES_MESSAGE: &str = "오늘은 기록이 없습니다.";

const ONE_LINE_MAX_CHARS: usize = 60;
const ONE_LINE_KEEP_CHARS: usize = 58;

/// Derived digest of one day's log entries, cached per date.
///
/// A cached summary must reflect the log list at the time it was built; any
/// mutation of that day's list deletes the cache so the next read rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    #[serde(rename = "oneLine")]
    pub one_line: String,
    pub keywords: Vec<String>,
    pub mood: Mood,
    pub count: usize,
}

impl DailySummary {
    /// Builds a summary for `date` from its log list.
    pub fn build(date: NaiveDate, logs: &[LogEntry], keyword_count: usize) -> Self {
        let all_text = logs
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            date,
            one_line: one_line(logs),
            keywords: top_keywords(logs, keyword_count),
            mood: mood_from_text(&all_text),
            count: logs.len(),
        }
    }

    /// The mood glyph, or `None` when the day had no entries.
    ///
    /// A day without entries has no mood data, which is distinct from a
    /// neutral day; rendering suppresses the glyph instead of showing the
    /// neutral one.
    pub fn mood_glyph(&self) -> Option<&'static str> {
        if self.count == 0 {
            None
        } else {
            Some(self.mood.glyph())
        }
    }
}

/// One-line digest built from the last three entries, oldest first.
fn one_line(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return NO_ENTRIES_MESSAGE.to_string();
    }
    let start = logs.len().saturating_sub(3);
    let last: Vec<&str> = logs[start..]
        .iter()
        .map(|l| l.text.trim())
        .filter(|t| !t.is_empty())
        .collect();
    let joined = last.join(" / ");
    if joined.chars().count() <= ONE_LINE_MAX_CHARS {
        joined
    } else {
        let mut cut: String = joined.chars().take(ONE_LINE_KEEP_CHARS).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entry(text: &str) -> LogEntry {
        LogEntry::new(NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"), text)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 26).expect("valid date")
    }

    #[test]
    fn empty_day_uses_fixed_message_and_suppresses_mood() {
        let summary = DailySummary::build(date(), &[], 3);
        assert_eq!(summary.one_line, NO_ENTRIES_MESSAGE);
        assert_eq!(summary.count, 0);
        assert!(summary.keywords.is_empty());
        assert_eq!(summary.mood, Mood::Neutral);
        assert_eq!(summary.mood_glyph(), None);
    }

    #[test]
    fn one_line_joins_last_three_entries_in_order() {
        let logs = vec![
            entry("첫째"),
            entry("둘째"),
            entry("셋째"),
            entry("넷째"),
        ];
        let summary = DailySummary::build(date(), &logs, 3);
        assert_eq!(summary.one_line, "둘째 / 셋째 / 넷째");
    }

    #[test]
    fn one_line_skips_blank_texts_and_trims() {
        let logs = vec![entry("  아침 산책  "), entry("   "), entry("저녁 정리")];
        let summary = DailySummary::build(date(), &logs, 3);
        assert_eq!(summary.one_line, "아침 산책 / 저녁 정리");
    }

    #[test]
    fn long_one_line_is_truncated_to_58_chars_plus_ellipsis() {
        let a = "가".repeat(40);
        let b = "나".repeat(40);
        let logs = vec![entry(&a), entry(&b)];
        let summary = DailySummary::build(date(), &logs, 3);

        assert_eq!(summary.one_line.chars().count(), 59);
        assert!(summary.one_line.ends_with('…'));
        let expected: String = format!("{a} / {b}").chars().take(58).collect();
        assert!(summary.one_line.starts_with(&expected));
    }

    #[test]
    fn boundary_length_is_not_truncated() {
        let text = "가".repeat(60);
        let summary = DailySummary::build(date(), &[entry(&text)], 3);
        assert_eq!(summary.one_line, text);
    }

    #[test]
    fn summary_carries_keywords_mood_and_count() {
        let logs = vec![entry("운동 다녀와서 행복"), entry("운동 기록")];
        let summary = DailySummary::build(date(), &logs, 3);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.keywords[0], "운동");
        assert_eq!(summary.mood, Mood::Positive);
        assert_eq!(summary.mood_glyph(), Some("🙂"));
    }

    #[test]
    fn wire_format_uses_camel_case_one_line() {
        let summary = DailySummary::build(date(), &[], 3);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"oneLine\""), "{json}");
        assert!(json.contains("\"mood\":\"neutral\""), "{json}");
    }
}
