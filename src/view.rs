// File: src/view.rs
//! Read-only projections over a result list: sorting, filtering and the
//! sidebar summaries. Every function works on a copy.

use crate::core::normalize::{first_words, title_case};
use crate::core::types::{ScoredKeyword, SortOrder};

const TITLE_IDEAS: usize = 5;
const SUGGESTED_TAGS: usize = 12;
const TAG_WORDS: usize = 3;

/// Case-insensitive substring filter. A blank query keeps everything.
pub fn filter(items: &[ScoredKeyword], query: &str) -> Vec<ScoredKeyword> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|kw| query.is_empty() || kw.phrase.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Stable sort by the given order.
pub fn sort(items: &[ScoredKeyword], order: SortOrder) -> Vec<ScoredKeyword> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::ScoreDesc => sorted.sort_by(|a, b| b.opportunity.cmp(&a.opportunity)),
        SortOrder::ScoreAsc => sorted.sort_by_key(|kw| kw.opportunity),
        SortOrder::LengthAsc => sorted.sort_by_key(|kw| kw.word_count),
        SortOrder::LengthDesc => sorted.sort_by(|a, b| b.word_count.cmp(&a.word_count)),
    }
    sorted
}

/// Filter then sort, the way the result list is displayed.
pub fn apply(items: &[ScoredKeyword], order: SortOrder, query: &str) -> Vec<ScoredKeyword> {
    sort(&filter(items, query), order)
}

/// Highest-opportunity keyword; the earliest wins a tie.
pub fn top_suggestion(items: &[ScoredKeyword]) -> Option<&ScoredKeyword> {
    items.iter().fold(None, |best: Option<&ScoredKeyword>, kw| match best {
        Some(b) if b.opportunity >= kw.opportunity => Some(b),
        _ => Some(kw),
    })
}

/// Top five phrases by opportunity, title-cased for use as listing titles.
pub fn title_ideas(items: &[ScoredKeyword]) -> Vec<String> {
    sort(items, SortOrder::ScoreDesc)
        .iter()
        .take(TITLE_IDEAS)
        .map(|kw| title_case(&kw.phrase))
        .collect()
}

/// The shortest phrases cut to their first three words, deduplicated.
pub fn suggested_tags(items: &[ScoredKeyword]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for kw in sort(items, SortOrder::LengthAsc).iter().take(SUGGESTED_TAGS) {
        let tag = tag_for(&kw.phrase);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// The tag form of a phrase: its first three words.
pub fn tag_for(phrase: &str) -> String {
    first_words(phrase, TAG_WORDS)
}

/// All phrases, one per line, for a bulk clipboard copy.
pub fn phrases_text(items: &[ScoredKeyword]) -> String {
    items
        .iter()
        .map(|kw| kw.phrase.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
