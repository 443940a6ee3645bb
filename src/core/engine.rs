use crate::core::normalize::{base_words, collapse_whitespace, normalize_seed};
use crate::core::scorer::OpportunityScorer;
use crate::core::types::ScoredKeyword;
use crate::core::wordlists::WordLists;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Smallest result list a generation call returns.
pub const MIN_RESULTS: usize = 10;

const PREFIX_SUFFIX_MODIFIERS: usize = 12;
const COMBO_MATERIALS: usize = 8;
const PAIR_MODIFIERS: usize = 6;
const RANDOM_COMBO_ROUNDS: usize = 200;

const TEMPLATES: &[(&str, &str)] = &[
    ("set of ", ""),
    ("", " set"),
    ("mini ", ""),
    ("personalized ", ""),
    ("", " gift"),
    ("custom ", ""),
    ("", " for sale"),
    ("", " near me"),
    ("", " online"),
];

/// Expands a seed into scored keyword suggestions using a fixed vocabulary.
///
/// The generator holds no state besides its word lists; every call builds a
/// fresh candidate pool.
#[derive(Debug, Clone, Default)]
pub struct KeywordGenerator {
    lists: WordLists,
}

impl KeywordGenerator {
    pub fn new(lists: WordLists) -> Self {
        Self { lists }
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.lists
    }

    pub fn generate(&self, seed: &str, category: &str, count: usize) -> Vec<ScoredKeyword> {
        self.generate_with_rng(seed, category, count, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        seed: &str,
        category: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<ScoredKeyword> {
        let seed = normalize_seed(seed);
        if seed.is_empty() {
            return vec![];
        }

        // 1. Build the raw candidate pool
        let pool = self.candidate_pool(&seed, &normalize_seed(category), rng);
        let pool_size = pool.len();

        // 2. Normalize, dedupe, drop empties
        let cleaned = dedupe(pool);

        // 3. Pad with suffixed variants when the request exceeds the pool
        let mut expanded = pad_with_suffixes(&cleaned, count, &self.lists.suffixes, rng);

        // 4. Shuffle and keep the requested amount
        expanded.shuffle(rng);
        expanded.truncate(count.max(MIN_RESULTS));

        tracing::debug!(
            seed = %seed,
            pool = pool_size,
            unique = cleaned.len(),
            returned = expanded.len(),
            "Generated keyword candidates"
        );

        // 5. Score what survived
        let scorer = OpportunityScorer::new(&self.lists);
        expanded
            .into_iter()
            .map(|phrase| scorer.score(phrase, rng))
            .collect()
    }

    /// Every raw combination of the seed with the word lists, in a fixed order
    /// followed by the random modifier/material combinations.
    fn candidate_pool<R: Rng + ?Sized>(
        &self,
        seed: &str,
        category: &str,
        rng: &mut R,
    ) -> Vec<String> {
        let lists = &self.lists;
        let mut pool = vec![seed.to_string()];

        for m in lists.modifiers.iter().take(PREFIX_SUFFIX_MODIFIERS) {
            pool.push(format!("{} {}", m, seed));
            pool.push(format!("{} {}", seed, m));
        }

        for mat in lists.materials.iter().take(COMBO_MATERIALS) {
            pool.push(format!("{} {}", seed, mat));
            pool.push(format!("{} {}", mat, seed));
        }

        for it in &lists.intents {
            pool.push(format!("{} {}", it, seed));
            pool.push(format!("{} {}", seed, it));
        }

        for o in &lists.occasions {
            pool.push(format!("{} for {}", seed, o));
            pool.push(format!("{} {}", o, seed));
        }

        for w in &lists.extra_words {
            pool.push(format!("{} {}", w, seed));
            pool.push(format!("{} {}", seed, w));
        }

        let words = base_words(seed);
        if words.len() > 1 {
            for a in &words {
                for b in lists.modifiers.iter().take(PAIR_MODIFIERS) {
                    pool.push(format!("{} {}", a, b));
                    pool.push(format!("{} {}", b, a));
                }
            }
            pool.push(words.join(" "));
            pool.push(words.iter().rev().copied().collect::<Vec<_>>().join(" "));
        }

        if !category.is_empty() {
            pool.push(format!("{} {}", seed, category));
            pool.push(format!("{} {}", category, seed));
        }

        for (prefix, suffix) in TEMPLATES {
            pool.push(format!("{}{}{}", prefix, seed, suffix));
        }

        for _ in 0..RANDOM_COMBO_ROUNDS {
            let w1 = lists.modifiers.choose(rng);
            let w2 = lists.modifiers.choose(rng);
            if let (Some(w1), Some(w2)) = (w1, w2) {
                pool.push(format!("{} {} {}", w1, seed, w2));
            }
            if let (Some(w1), Some(mat)) = (w1, lists.materials.choose(rng)) {
                pool.push(format!("{} {} {}", w1, mat, seed));
            }
        }

        pool
    }
}

/// Appends `{phrase} - {suffix}` for each cleaned phrase in order until
/// `count` is reached. Each source phrase is padded at most once.
fn pad_with_suffixes<R: Rng + ?Sized>(
    cleaned: &[String],
    count: usize,
    suffixes: &[String],
    rng: &mut R,
) -> Vec<String> {
    let mut expanded = cleaned.to_vec();
    for phrase in cleaned {
        if expanded.len() >= count {
            break;
        }
        match suffixes.choose(rng) {
            Some(suffix) => expanded.push(format!("{} - {}", phrase, suffix)),
            None => break,
        }
    }
    expanded
}

/// Whitespace-normalizes candidates and keeps the first occurrence of each.
fn dedupe(pool: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.into_iter()
        .map(|s| collapse_whitespace(&s))
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::word_count;
    use crate::core::types::{KeywordClass, MAX_OPPORTUNITY, MIN_OPPORTUNITY};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_invariants(results: &[ScoredKeyword], count: usize) {
        assert!(results.len() >= MIN_RESULTS);
        assert!(results.len() <= count.max(MIN_RESULTS));
        for kw in results {
            assert!(!kw.phrase.is_empty());
            assert_eq!(kw.phrase, collapse_whitespace(&kw.phrase));
            assert!((MIN_OPPORTUNITY..=MAX_OPPORTUNITY).contains(&kw.opportunity));
            assert!(kw.estimated_volume >= 10);
            assert_eq!(kw.class, KeywordClass::from_opportunity(kw.opportunity));
            assert_eq!(kw.word_count, word_count(&kw.phrase));
        }
    }

    #[test]
    fn test_empty_seed_returns_nothing() {
        let generator = KeywordGenerator::default();
        assert!(generator.generate("", "", 50).is_empty());
        assert!(generator.generate("   \t", "mugs", 50).is_empty());
    }

    #[test]
    fn test_soy_candle_ten() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let results = generator.generate_with_rng("soy candle", "", 10, &mut rng);

        assert_eq!(results.len(), 10);
        assert_invariants(&results, 10);
        let with_seed = results
            .iter()
            .filter(|kw| kw.phrase.contains("soy candle"))
            .count();
        assert!(with_seed > 5, "only {} of 10 contained the seed", with_seed);
    }

    #[test]
    fn test_small_count_still_returns_minimum() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let results = generator.generate_with_rng("mug", "", 3, &mut rng);
        assert_eq!(results.len(), MIN_RESULTS);
    }

    #[test]
    fn test_no_duplicate_phrases() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(5);
        let results = generator.generate_with_rng("Soy  Candle", "Home Decor", 500, &mut rng);

        let unique: HashSet<_> = results.iter().map(|kw| kw.phrase.as_str()).collect();
        assert_eq!(unique.len(), results.len());
        assert_invariants(&results, 500);
    }

    #[test]
    fn test_large_count_pads_with_suffixes() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);
        let results = generator.generate_with_rng("mug", "", 500, &mut rng);

        let suffixes = &generator.word_lists().suffixes;
        assert!(results.iter().any(|kw| {
            kw.phrase
                .rsplit_once(" - ")
                .map_or(false, |(_, s)| suffixes.iter().any(|x| x == s))
        }));
        assert!(results.len() <= 500);
    }

    #[test]
    fn test_pool_contains_fixed_combinations() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = generator.candidate_pool("soy candle", "home decor", &mut rng);

        for expected in [
            "soy candle",
            "handmade soy candle",
            "soy candle rustic",
            "soy candle for mother's day",
            "gift for soy candle",
            "soy handmade",
            "candle soy",
            "home decor soy candle",
            "soy candle near me",
        ] {
            assert!(pool.iter().any(|p| p == expected), "missing '{}'", expected);
        }
        // modifiers past the first twelve only appear via random combinations
        assert!(!pool.iter().any(|p| p == "gift soy candle"));
    }

    #[test]
    fn test_single_word_seed_has_no_pair_combinations() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = generator.candidate_pool("mug", "", &mut rng);
        // seed + 12 modifiers x2 + 8 materials x2 + 10 intents x2
        // + 7 occasions x2 + 8 extra words x2 + 9 templates + 200 rounds x2
        assert_eq!(pool.len(), 1 + 24 + 16 + 20 + 14 + 16 + 9 + 400);
        assert!(pool.iter().any(|p| p == "handmade mug"));
    }

    #[test]
    fn test_multi_word_seed_adds_pair_combinations() {
        let generator = KeywordGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let single = generator.candidate_pool("mug", "", &mut rng).len();
        let pair = generator.candidate_pool("soy candle", "", &mut rng).len();
        // 2 words x 6 modifiers x2, then the joined and reversed seed
        assert_eq!(pair, single + 2 * 6 * 2 + 2);
    }

    #[test]
    fn test_padding_follows_cleaned_order() {
        let generator = KeywordGenerator::default();
        let suffixes = &generator.word_lists().suffixes;
        let mut rng = StdRng::seed_from_u64(17);
        let cleaned = dedupe(generator.candidate_pool("mug", "", &mut rng));

        let want = cleaned.len() + 25;
        let padded = pad_with_suffixes(&cleaned, want, suffixes, &mut rng);
        assert_eq!(padded.len(), want);
        assert_eq!(&padded[..cleaned.len()], &cleaned[..]);
        for (source, extra) in cleaned.iter().zip(&padded[cleaned.len()..]) {
            let (base, suffix) = extra.rsplit_once(" - ").unwrap();
            assert_eq!(base, source.as_str());
            assert!(suffixes.iter().any(|s| s == suffix));
        }
    }

    #[test]
    fn test_padding_stops_when_sources_run_out() {
        let suffixes = vec!["new".to_string()];
        let cleaned: Vec<String> = ["mug", "cup", "jar"].iter().map(|s| s.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(0);

        let padded = pad_with_suffixes(&cleaned, 500, &suffixes, &mut rng);
        assert_eq!(padded.len(), 2 * cleaned.len());
        assert_eq!(&padded[3..], &["mug - new", "cup - new", "jar - new"]);

        // already large enough: untouched
        assert_eq!(pad_with_suffixes(&cleaned, 2, &suffixes, &mut rng), cleaned);
        // no suffixes: nothing appended
        assert_eq!(pad_with_suffixes(&cleaned, 10, &[], &mut rng), cleaned);
    }

    #[test]
    fn test_tiny_word_lists_fall_short_of_minimum() {
        let lists = WordLists {
            modifiers: vec![],
            intents: vec![],
            materials: vec![],
            occasions: vec![],
            extra_words: vec![],
            suffixes: vec![],
            ..WordLists::default()
        };
        let generator = KeywordGenerator::new(lists);
        let results = generator.generate("mug", "", 50);
        // seed plus the nine templates
        assert_eq!(results.len(), 10);
    }

    proptest! {
        #[test]
        fn prop_generate_invariants(
            seed in "[a-z]{1,8}( [a-z]{1,8}){0,2}",
            category in "([a-z]{1,8})?",
            count in 0usize..=500,
            rng_seed in any::<u64>(),
        ) {
            let generator = KeywordGenerator::default();
            let mut rng = StdRng::seed_from_u64(rng_seed);
            let results = generator.generate_with_rng(&seed, &category, count, &mut rng);
            assert_invariants(&results, count);
        }
    }
}
