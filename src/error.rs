// File: src/error.rs
//! Error types for the keyword finder library.

/// Result type alias using [`KeywordError`].
pub type Result<T> = std::result::Result<T, KeywordError>;

#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// The seed was empty after trimming.
    #[error("Please enter a seed keyword (e.g. \"soy candle\")")]
    EmptySeed,

    /// An export or copy was requested with no current results.
    #[error("No suggestions to {0}")]
    NoResults(&'static str),

    /// A word list file had an extension we don't know how to read.
    #[error("Unsupported word list format: {0}")]
    UnsupportedFormat(String),

    /// No display server, or the platform refused access.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
