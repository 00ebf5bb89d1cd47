use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One free-text note, scoped to the calendar day it was created.
///
/// Immutable once created except for deletion; owned by the daily log list
/// of its creation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub text: String,
}

impl LogEntry {
    pub fn new(time: NaiveTime, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            text: text.into(),
        }
    }
}

/// Times are stored as "HH:MM" strings.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(de::Error::custom)
    }
}
