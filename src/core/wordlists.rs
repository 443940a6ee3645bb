// src/core/wordlists.rs
use crate::error::{KeywordError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current on-disk word list format version.
pub const WORD_LISTS_VERSION: u32 = 1;

const MODIFIERS: &[&str] = &[
    "handmade", "organic", "personalized", "custom", "vintage", "minimal", "boho", "cute",
    "luxury", "eco", "modern", "rustic", "gift", "set", "bundle", "large", "small", "scented",
    "unscented", "iced", "engraved", "silver", "gold",
];

const INTENTS: &[&str] = &[
    "gift for", "for", "with", "made of", "in", "set of", "pack of", "for women", "for men",
    "for kids",
];

const MATERIALS: &[&str] = &[
    "wood", "soy", "resin", "ceramic", "cotton", "linen", "leather", "sterling silver",
    "gold plated", "glass",
];

const OCCASIONS: &[&str] = &[
    "wedding", "birthday", "anniversary", "christmas", "valentine", "mother's day",
    "baby shower",
];

const EXTRA_WORDS: &[&str] = &[
    "best", "cheap", "top", "unique", "trending", "popular", "handcrafted", "small business",
];

const SUFFIXES: &[&str] = &["best", "sale", "2025", "new", "handmade"];

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// The vocabulary the generator combines with a seed.
///
/// Loaded once and never mutated afterwards. Any list missing from a file
/// falls back to the built-in list, so a file only needs the lists it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordLists {
    pub version: u32,
    pub modifiers: Vec<String>,
    pub intents: Vec<String>,
    pub materials: Vec<String>,
    pub occasions: Vec<String>,
    pub extra_words: Vec<String>,
    /// Appended as `{phrase} - {suffix}` when the pool is smaller than requested.
    pub suffixes: Vec<String>,
}

impl Default for WordLists {
    fn default() -> Self {
        Self {
            version: WORD_LISTS_VERSION,
            modifiers: to_owned(MODIFIERS),
            intents: to_owned(INTENTS),
            materials: to_owned(MATERIALS),
            occasions: to_owned(OCCASIONS),
            extra_words: to_owned(EXTRA_WORDS),
            suffixes: to_owned(SUFFIXES),
        }
    }
}

impl WordLists {
    /// Reads word lists from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let lists: WordLists = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            other => {
                return Err(KeywordError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };
        if lists.version > WORD_LISTS_VERSION {
            tracing::warn!(
                path = %path.display(),
                version = lists.version,
                "Word list file is newer than this build understands"
            );
        }
        tracing::debug!(
            path = %path.display(),
            modifiers = lists.modifiers.len(),
            materials = lists.materials.len(),
            "Loaded word lists"
        );
        Ok(lists.normalized())
    }

    /// Lowercases and trims every entry and drops blanks, so substring
    /// checks against normalized phrases behave.
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.modifiers,
            &mut self.intents,
            &mut self.materials,
            &mut self.occasions,
            &mut self.extra_words,
            &mut self.suffixes,
        ] {
            *list = list
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
