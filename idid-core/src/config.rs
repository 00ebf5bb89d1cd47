use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Keywords kept per daily summary unless configured otherwise.
const DEFAULT_KEYWORD_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the key-value files live.
    pub data_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// How many top keywords a daily summary keeps.
    pub keyword_count: usize,
    /// The date treated as "today". Set to the current local date on load;
    /// overridable for deterministic tests.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    editor: Option<String>,
    keyword_count: Option<usize>,
}

impl FileConfig {
    fn empty() -> Self {
        FileConfig {
            data_dir: None,
            editor: None,
            keyword_count: None,
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig::empty());

        Ok(Self {
            data_dir: file_config.data_dir.unwrap_or_else(Self::default_data_dir),
            editor: file_config.editor,
            keyword_count: file_config.keyword_count.unwrap_or(DEFAULT_KEYWORD_COUNT),
            reference_date: Local::now().date_naive(),
        })
    }

    /// Default storage root: `{data_dir}/idid`
    /// - macOS:   `~/Library/Application Support/idid`
    /// - Linux:   `$XDG_DATA_HOME/idid` or `~/.local/share/idid`
    /// - Windows: `%APPDATA%\idid`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("idid");
            p
        } else {
            PathBuf::from("./idid")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("idid").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("idid").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::empty())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
#[cfg(test)]
pub(crate) fn mk_config(data_dir: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        data_dir,
        editor: None,
        keyword_count: DEFAULT_KEYWORD_COUNT,
        reference_date: reference_date.unwrap_or_else(|| Local::now().date_naive()),
    }
}
