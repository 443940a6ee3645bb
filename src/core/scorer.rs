// File: src/core/scorer.rs
use crate::core::normalize::word_count;
use crate::core::types::{
    KeywordClass, ScoredKeyword, MAX_OPPORTUNITY, MIN_ESTIMATED_VOLUME, MIN_OPPORTUNITY,
};
use crate::core::wordlists::WordLists;
use rand::Rng;

const BASE_SCORE: f64 = 50.0;
const PER_EXTRA_WORD: f64 = 8.0;
const LENGTH_BONUS_CAP: f64 = 30.0;
const MATERIAL_BONUS: f64 = 8.0;
const INTENT_BONUS: f64 = 6.0;
const OCCASION_BONUS: f64 = 6.0;
const SHORT_PENALTY: f64 = 12.0;
const NOISE: f64 = 6.0;

/// Assigns the synthetic opportunity score and volume estimate to a phrase.
pub struct OpportunityScorer<'a> {
    lists: &'a WordLists,
}

impl<'a> OpportunityScorer<'a> {
    pub fn new(lists: &'a WordLists) -> Self {
        Self { lists }
    }

    /// Deterministic part of the score: length reward plus vocabulary bonuses,
    /// minus the short-phrase penalty. Not yet rounded or clamped.
    pub fn base_score(&self, phrase: &str) -> f64 {
        let words = word_count(phrase);
        let mut score = BASE_SCORE;
        score += LENGTH_BONUS_CAP.min((words.saturating_sub(1)) as f64 * PER_EXTRA_WORD);

        if contains_any(phrase, &self.lists.materials) {
            score += MATERIAL_BONUS;
        }
        if contains_any(phrase, &self.lists.intents) {
            score += INTENT_BONUS;
        }
        if contains_any(phrase, &self.lists.occasions) {
            score += OCCASION_BONUS;
        }
        if words <= 2 {
            score -= SHORT_PENALTY;
        }
        score
    }

    pub fn score<R: Rng + ?Sized>(&self, phrase: String, rng: &mut R) -> ScoredKeyword {
        let noise = rng.gen_range(-NOISE..NOISE);
        let opportunity = (self.base_score(&phrase) + noise)
            .round()
            .clamp(MIN_OPPORTUNITY as f64, MAX_OPPORTUNITY as f64) as u8;

        let multiplier = rng.gen_range(1.0..6.0);
        let estimated_volume = ((100 - opportunity) as f64 * multiplier).round() as u32;

        ScoredKeyword {
            word_count: word_count(&phrase),
            phrase,
            opportunity,
            class: KeywordClass::from_opportunity(opportunity),
            estimated_volume: estimated_volume.max(MIN_ESTIMATED_VOLUME),
        }
    }
}

fn contains_any(phrase: &str, words: &[String]) -> bool {
    words.iter().any(|w| phrase.contains(w.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_base_score_components() {
        let lists = WordLists::default();
        let scorer = OpportunityScorer::new(&lists);

        // 1 word: 50 + 0 - 12
        assert_eq!(scorer.base_score("mug"), 38.0);
        // 2 words, material "soy": 50 + 8 + 8 - 12
        assert_eq!(scorer.base_score("soy mug"), 54.0);
        // 4 words, "soy" material, "gift for"/"for" intent: 50 + 24 + 8 + 6
        assert_eq!(scorer.base_score("gift for soy mug"), 88.0);
        // 6 words hits the length cap: 50 + 30 + occasion 6 + intent 6
        assert_eq!(scorer.base_score("mug for baby shower and more"), 92.0);
    }

    #[test]
    fn test_score_is_bounded_and_classified() {
        let lists = WordLists::default();
        let scorer = OpportunityScorer::new(&lists);
        let mut rng = StdRng::seed_from_u64(7);

        for phrase in ["x", "soy mug", "gift for soy candle for wedding day set"] {
            for _ in 0..200 {
                let kw = scorer.score(phrase.to_string(), &mut rng);
                assert!((MIN_OPPORTUNITY..=MAX_OPPORTUNITY).contains(&kw.opportunity));
                assert!(kw.estimated_volume >= MIN_ESTIMATED_VOLUME);
                assert_eq!(kw.class, KeywordClass::from_opportunity(kw.opportunity));
                assert_eq!(kw.word_count, word_count(phrase));
            }
        }
    }

    #[test]
    fn test_noise_stays_within_six_points() {
        let lists = WordLists::default();
        let scorer = OpportunityScorer::new(&lists);
        let mut rng = StdRng::seed_from_u64(99);

        let base = scorer.base_score("gift for soy mug");
        for _ in 0..500 {
            let kw = scorer.score("gift for soy mug".to_string(), &mut rng);
            let diff = kw.opportunity as f64 - base;
            assert!((-6.0..=6.0).contains(&diff), "diff {} out of range", diff);
        }
    }
}
