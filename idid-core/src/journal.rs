//! The core `Journal` struct: date-scoped logs, cached daily summaries and
//! the decision history, over an injected key-value store.

use crate::config::Config;
use crate::decision::{Advice, Decision, decide};
use crate::entry::LogEntry;
use crate::store::{self, DECISIONS_KEY, FileStore, KvStore};
use crate::summary::DailySummary;
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate, NaiveTime};
use log::debug;
use uuid::Uuid;

/// The central struct for all journal operations.
///
/// Holds the configuration and the storage collaborator; the analysis
/// functions themselves stay pure and never reach into storage.
pub struct Journal {
    pub config: Config,
    store: Box<dyn KvStore>,
}

impl Journal {
    /// Creates a `Journal` backed by a [`FileStore`], loading configuration
    /// from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a `Journal` with a specific `Config`, backed by a
    /// [`FileStore`] rooted at its `data_dir`.
    pub fn with_config(config: Config) -> Result<Self> {
        let store = FileStore::open(config.data_dir.clone())?;
        Ok(Self {
            config,
            store: Box::new(store),
        })
    }

    /// Creates a `Journal` over any storage backend.
    pub fn with_store(config: Config, store: Box<dyn KvStore>) -> Self {
        Self { config, store }
    }

    /// The date treated as "today".
    pub fn today(&self) -> NaiveDate {
        self.config.reference_date
    }

    /// Reads the log list for `date`. Missing or malformed data yields an
    /// empty list.
    pub fn logs_for(&self, date: NaiveDate) -> Result<Vec<LogEntry>> {
        store::load_or(self.store.as_ref(), &store::logs_key(date), Vec::new())
    }

    /// Reads today's log list.
    pub fn today_logs(&self) -> Result<Vec<LogEntry>> {
        self.logs_for(self.today())
    }

    /// Appends a log entry to today's list, stamped with the current time.
    pub fn append_log(&mut self, text: &str) -> Result<LogEntry> {
        self.append_log_on(self.today(), Local::now().time(), text)
    }

    /// Appends a log entry to `date`'s list at an explicit time.
    ///
    /// The text is trimmed before storing; empty text is rejected. The
    /// cached summary for `date` is invalidated.
    pub fn append_log_on(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        text: &str,
    ) -> Result<LogEntry> {
        let text = text.trim();
        if text.is_empty() {
            bail!("cannot append an empty log entry");
        }
        let mut logs = self.logs_for(date)?;
        let entry = LogEntry::new(time, text);
        logs.push(entry.clone());
        store::save(self.store.as_mut(), &store::logs_key(date), &logs)?;
        self.invalidate_summary(date)?;
        Ok(entry)
    }

    /// Deletes the entry with `id` from today's list.
    ///
    /// Returns whether an entry was removed; the cached summary is only
    /// invalidated when the list actually changed.
    pub fn delete_log(&mut self, id: Uuid) -> Result<bool> {
        let date = self.today();
        let mut logs = self.logs_for(date)?;
        let before = logs.len();
        logs.retain(|l| l.id != id);
        if logs.len() == before {
            return Ok(false);
        }
        store::save(self.store.as_mut(), &store::logs_key(date), &logs)?;
        self.invalidate_summary(date)?;
        Ok(true)
    }

    /// Empties today's log list and deletes its cached summary.
    pub fn clear_today(&mut self) -> Result<()> {
        let date = self.today();
        store::save(
            self.store.as_mut(),
            &store::logs_key(date),
            &Vec::<LogEntry>::new(),
        )?;
        self.invalidate_summary(date)
    }

    /// Returns today's summary, rebuilding and caching it when absent.
    ///
    /// Idempotent for unchanged inputs: a cache hit is returned as-is, a
    /// miss rebuilds from the current log list and persists the result.
    pub fn summary(&mut self) -> Result<DailySummary> {
        let date = self.today();
        let cached = store::load_or::<Option<DailySummary>>(
            self.store.as_ref(),
            &store::summary_key(date),
            None,
        )?;
        if let Some(summary) = cached {
            return Ok(summary);
        }
        self.rebuild_summary()
    }

    /// Rebuilds today's summary from the current log list and caches it,
    /// overwriting any prior value.
    pub fn rebuild_summary(&mut self) -> Result<DailySummary> {
        let date = self.today();
        let logs = self.logs_for(date)?;
        let summary = DailySummary::build(date, &logs, self.config.keyword_count);
        store::save(self.store.as_mut(), &store::summary_key(date), &summary)?;
        Ok(summary)
    }

    /// Runs the decision heuristic. Pure; nothing is persisted.
    pub fn decide(&self, question: &str) -> Advice {
        decide(question)
    }

    /// Stamps `advice` with a fresh id and timestamp and appends it to the
    /// decision history.
    pub fn record_decision(&mut self, question: &str, advice: Advice) -> Result<Decision> {
        let mut history = self.decisions()?;
        let decision = Decision::new(question, advice);
        history.push(decision.clone());
        store::save(self.store.as_mut(), DECISIONS_KEY, &history)?;
        Ok(decision)
    }

    /// The full decision history, oldest first.
    pub fn decisions(&self) -> Result<Vec<Decision>> {
        store::load_or(self.store.as_ref(), DECISIONS_KEY, Vec::new())
    }

    fn invalidate_summary(&mut self, date: NaiveDate) -> Result<()> {
        debug!("invalidating cached summary for {date}");
        self.store.remove(&store::summary_key(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mk_config;
    use crate::store::MemoryStore;
    use crate::summary::NO_ENTRIES_MESSAGE;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 26).expect("valid date")
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).expect("valid time")
    }

    fn mk_journal() -> Journal {
        let cfg = mk_config(PathBuf::from("unused"), Some(anchor()));
        Journal::with_store(cfg, Box::new(MemoryStore::new()))
    }

    #[test]
    fn append_and_read_today_logs() {
        let mut j = mk_journal();
        j.append_log_on(anchor(), noon(), "운동 30분").unwrap();
        j.append_log_on(anchor(), noon(), "  공부  ").unwrap();

        let logs = j.today_logs().unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].text, "운동 30분");
        // Text is trimmed on append.
        assert_eq!(logs[1].text, "공부");
    }

    #[test]
    fn append_rejects_empty_text() {
        let mut j = mk_journal();
        assert!(j.append_log_on(anchor(), noon(), "   ").is_err());
        assert!(j.today_logs().unwrap().is_empty());
    }

    #[test]
    fn logs_are_scoped_by_date() {
        let mut j = mk_journal();
        j.append_log_on(anchor(), noon(), "오늘 기록").unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
        assert!(j.logs_for(other).unwrap().is_empty());
    }

    #[test]
    fn delete_log_removes_by_id() {
        let mut j = mk_journal();
        let kept = j.append_log_on(anchor(), noon(), "남길 기록").unwrap();
        let gone = j.append_log_on(anchor(), noon(), "지울 기록").unwrap();

        assert!(j.delete_log(gone.id).unwrap());
        let logs = j.today_logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].id, kept.id);

        // Unknown id is a no-op.
        assert!(!j.delete_log(Uuid::new_v4()).unwrap());
    }

    #[test]
    fn summary_is_cached_until_the_log_list_changes() {
        let mut j = mk_journal();
        j.append_log_on(anchor(), noon(), "운동").unwrap();

        let first = j.summary().unwrap();
        assert_eq!(first.count, 1);

        // A cache hit returns the stored summary as-is.
        assert_eq!(j.summary().unwrap(), first);

        // Appending invalidates the cache; the next read reflects the change.
        j.append_log_on(anchor(), noon(), "공부").unwrap();
        let second = j.summary().unwrap();
        assert_eq!(second.count, 2);
    }

    #[test]
    fn rebuild_summary_overwrites_the_cache() {
        let mut j = mk_journal();
        j.append_log_on(anchor(), noon(), "행복한 하루").unwrap();
        let built = j.rebuild_summary().unwrap();
        assert_eq!(built.date, anchor());
        assert_eq!(j.summary().unwrap(), built);
    }

    #[test]
    fn clear_today_empties_logs_and_deletes_the_cached_summary() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("idid");
        let cfg = mk_config(root.clone(), Some(anchor()));
        let mut j = Journal::with_config(cfg).unwrap();

        for text in ["하나", "둘", "셋"] {
            j.append_log_on(anchor(), noon(), text).unwrap();
        }
        j.summary().unwrap();
        let summary_file = root.join("idid.summary.2025-08-26.json");
        assert!(summary_file.exists());

        j.clear_today().unwrap();
        assert!(j.today_logs().unwrap().is_empty());
        assert!(!summary_file.exists());

        let rebuilt = j.summary().unwrap();
        assert_eq!(rebuilt.count, 0);
        assert_eq!(rebuilt.one_line, NO_ENTRIES_MESSAGE);
        assert_eq!(rebuilt.mood_glyph(), None);
    }

    #[test]
    fn decisions_append_in_order() {
        let mut j = mk_journal();
        let advice = j.decide("운동 갈까");
        j.record_decision("운동 갈까", advice).unwrap();
        let advice = j.decide("너무 피곤해");
        j.record_decision("너무 피곤해", advice).unwrap();

        let history = j.decisions().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].question, "운동 갈까");
        assert_eq!(history[1].question, "너무 피곤해");
    }

    #[test]
    fn malformed_stored_logs_fall_back_to_an_empty_list() {
        let cfg = mk_config(PathBuf::from("unused"), Some(anchor()));
        let mut store = MemoryStore::new();
        store
            .write("idid.logs.2025-08-26", "not json at all")
            .unwrap();
        let j = Journal::with_store(cfg, Box::new(store));
        assert!(j.today_logs().unwrap().is_empty());
    }
}
