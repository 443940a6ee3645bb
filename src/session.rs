// File: src/session.rs
use crate::config::{clamp_count, Config};
use crate::core::engine::KeywordGenerator;
use crate::core::normalize::normalize_seed;
use crate::core::types::{ScoredKeyword, SortOrder};
use crate::error::{KeywordError, Result};
use crate::export;
use crate::view;
use rand::Rng;
use std::path::Path;

/// The mutable state behind a results screen.
///
/// The generator stays pure; this owns the current results, the view
/// settings and the user's tag list, and hands out sorted/filtered copies.
pub struct Session {
    generator: KeywordGenerator,
    seed: String,
    results: Vec<ScoredKeyword>,
    tags: Vec<String>,
    pub sort: SortOrder,
    pub filter: String,
}

impl Session {
    pub fn new(generator: KeywordGenerator) -> Self {
        Self {
            generator,
            seed: String::new(),
            results: Vec::new(),
            tags: Vec::new(),
            sort: SortOrder::default(),
            filter: String::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut session = Self::new(KeywordGenerator::new(config.word_lists()?));
        session.sort = config.default_sort;
        Ok(session)
    }

    pub fn generate(&mut self, seed: &str, category: &str, count: usize) -> Result<&[ScoredKeyword]> {
        self.generate_with_rng(seed, category, count, &mut rand::thread_rng())
    }

    /// Replaces the current results. Rejects an empty seed before generating.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        seed: &str,
        category: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<&[ScoredKeyword]> {
        let seed = seed.trim();
        if normalize_seed(seed).is_empty() {
            return Err(KeywordError::EmptySeed);
        }
        let count = clamp_count(count);
        self.results = self.generator.generate_with_rng(seed, category, count, rng);
        self.seed = seed.to_string();
        self.tags = view::suggested_tags(&self.results);
        tracing::info!(seed = %self.seed, count = self.results.len(), "Suggestions generated");
        Ok(&self.results)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Results in generation order.
    pub fn results(&self) -> &[ScoredKeyword] {
        &self.results
    }

    /// Results filtered and sorted with the current view settings.
    pub fn visible(&self) -> Vec<ScoredKeyword> {
        view::apply(&self.results, self.sort, &self.filter)
    }

    pub fn top_suggestion(&self) -> Option<&ScoredKeyword> {
        view::top_suggestion(&self.results)
    }

    pub fn title_ideas(&self) -> Vec<String> {
        view::title_ideas(&self.results)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Adds the first three words of `phrase` to the tag list.
    /// Returns false when that tag was already there.
    pub fn add_tag(&mut self, phrase: &str) -> bool {
        let tag = view::tag_for(phrase);
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Writes every current result as CSV, ignoring the view's filter and sort.
    pub fn save_csv(&self, path: &Path) -> Result<()> {
        export::save_csv(&self.results, path)
    }

    /// Writes every current result as JSON, ignoring the view's filter and sort.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        export::save_json(&self.results, path)
    }

    pub fn clear(&mut self) {
        self.seed.clear();
        self.results.clear();
        self.tags.clear();
        self.filter.clear();
    }
}
