//! Configuration for the keyword finder
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/keyword-finder/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::core::types::SortOrder;
use crate::core::wordlists::WordLists;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_COUNT: usize = 120;
pub const MIN_COUNT: usize = 10;
pub const MAX_COUNT: usize = 500;

/// Clamp a requested result count into `[MIN_COUNT, MAX_COUNT]`.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// Parse free-form count input; anything unparsable or zero becomes the default.
pub fn parse_count(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => clamp_count(n),
        _ => DEFAULT_COUNT,
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Result count used when none is given
    pub default_count: usize,

    /// Category combined with every seed unless overridden
    pub default_category: String,

    /// Initial ordering of the result view
    pub default_sort: SortOrder,

    /// Optional TOML/JSON file replacing the built-in word lists
    pub word_lists: Option<PathBuf>,

    /// Where exports are written when no path is given
    pub export_path: PathBuf,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            default_category: String::new(),
            default_sort: SortOrder::ScoreDesc,
            word_lists: None,
            export_path: PathBuf::from("keywords.csv"),
            logging: LoggingConfig::default(),
        }
    }
}

/// Optional [logging] section
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
}

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub default_count: Option<usize>,
    pub default_category: Option<String>,
    pub default_sort: Option<SortOrder>,
    pub word_lists: Option<String>,
    pub export_path: Option<String>,
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: <config dir>/keyword-finder/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keyword-finder").join("config.toml"))
    }

    /// Load from the default config path and the process environment.
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(file, |key| std::env::var(key).ok()))
    }

    /// Load from an explicit config file, still honouring the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = Self::read_file_config(path)?;
        Ok(Self::merge(file, |key| std::env::var(key).ok()))
    }

    /// A missing file is fine; a file that exists but doesn't parse is an error.
    fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn merge(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Count: env > file > default
        let default_count = env("KEYWORD_FINDER_COUNT")
            .and_then(|v| v.trim().parse().ok())
            .or(file.default_count)
            .map(clamp_count)
            .unwrap_or(DEFAULT_COUNT);

        // Word lists: env > file
        let word_lists = env("KEYWORD_FINDER_WORD_LISTS")
            .or(file.word_lists)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        // Log level: env > file > default
        let level = env("KEYWORD_FINDER_LOG")
            .or(file.logging.and_then(|l| l.level))
            .unwrap_or_else(|| LoggingConfig::default().level);

        Self {
            default_count,
            default_category: file.default_category.unwrap_or_default(),
            default_sort: file.default_sort.unwrap_or_default(),
            word_lists,
            export_path: file
                .export_path
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("keywords.csv")),
            logging: LoggingConfig { level },
        }
    }

    /// Word lists named by the config, or the built-in ones.
    pub fn word_lists(&self) -> Result<WordLists> {
        match &self.word_lists {
            Some(path) => WordLists::load(path),
            None => Ok(WordLists::default()),
        }
    }

    /// Write the defaults to the config path unless a file is already there.
    /// Returns the path when a file was created.
    pub fn ensure_config_exists() -> Result<Option<PathBuf>> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        if path.exists() {
            return Ok(None);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::default().to_toml())?;
        Ok(Some(path))
    }

    pub fn to_toml(&self) -> String {
        let word_lists = match &self.word_lists {
            Some(p) => format!("word_lists = {:?}", p.display().to_string()),
            None => "# word_lists = \"/path/to/word_lists.toml\"".to_string(),
        };
        format!(
            r#"# keyword-finder configuration

# Number of suggestions per generation (clamped to {min}-{max})
default_count = {count}

# Category appended to every seed, empty for none
default_category = {category:?}

# Result ordering: score-desc, score-asc, length-asc, length-desc, none
default_sort = "{sort}"

# Replacement word lists (TOML or JSON)
{word_lists}

# Default export file
export_path = {export:?}

[logging]
# trace, debug, info, warn, error
level = "{level}"
"#,
            min = MIN_COUNT,
            max = MAX_COUNT,
            count = self.default_count,
            category = self.default_category,
            sort = self.default_sort,
            word_lists = word_lists,
            export = self.export_path.display().to_string(),
            level = self.logging.level,
        )
    }
}
