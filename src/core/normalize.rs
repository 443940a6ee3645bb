// src/core/normalize.rs
//! String normalization shared by the generator and the views.

/// Trims and lowercases user input. Used for both the seed and the category.
pub fn normalize_seed(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a normalized seed into base words on runs of whitespace, commas or hyphens.
pub fn base_words(seed: &str) -> Vec<&str> {
    seed.split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Collapses every run of whitespace to a single space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Counts tokens separated by single spaces, the same way results report their length.
pub fn word_count(phrase: &str) -> usize {
    phrase.split(' ').count()
}

/// The first `n` space-separated words of a phrase.
pub fn first_words(phrase: &str, n: usize) -> String {
    phrase.split(' ').take(n).collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first character of every space-separated word.
pub fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
