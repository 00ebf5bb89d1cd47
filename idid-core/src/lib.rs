pub mod config;
pub mod decision;
pub mod entry;
pub mod journal;
pub mod keywords;
pub mod lexicon;
pub mod mood;
pub mod store;
pub mod summary;
pub mod tokenize;

pub use config::Config;
pub use decision::{Advice, Decision, decide};
pub use entry::LogEntry;
pub use journal::Journal;
pub use mood::{Mood, mood_from_text};
pub use store::{FileStore, KvStore, MemoryStore};
pub use summary::DailySummary;
pub use tokenize::tokenize;
