// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest opportunity score a keyword can receive.
pub const MIN_OPPORTUNITY: u8 = 8;
/// Highest opportunity score a keyword can receive.
pub const MAX_OPPORTUNITY: u8 = 98;
/// Floor for the synthetic search volume estimate.
pub const MIN_ESTIMATED_VOLUME: u32 = 10;

/// Opportunity bucket used for styling a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordClass {
    High,
    Medium,
    Low,
}

impl KeywordClass {
    /// > 70 is high, > 45 is medium, everything else is low.
    pub fn from_opportunity(opportunity: u8) -> Self {
        if opportunity > 70 {
            KeywordClass::High
        } else if opportunity > 45 {
            KeywordClass::Medium
        } else {
            KeywordClass::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordClass::High => "high",
            KeywordClass::Medium => "medium",
            KeywordClass::Low => "low",
        }
    }
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated phrase with its synthetic scores.
/// This is the unit every view, export and copy action works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub phrase: String,
    /// Heuristic attractiveness in `[MIN_OPPORTUNITY, MAX_OPPORTUNITY]`.
    pub opportunity: u8,
    pub class: KeywordClass,
    /// Synthetic popularity proxy, never below `MIN_ESTIMATED_VOLUME`.
    pub estimated_volume: u32,
    /// Number of space-separated tokens in `phrase`.
    pub word_count: usize,
}

/// Orderings offered for a result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep generation order.
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "score-desc")]
    ScoreDesc,
    #[serde(rename = "score-asc")]
    ScoreAsc,
    #[serde(rename = "length-asc")]
    LengthAsc,
    #[serde(rename = "length-desc")]
    LengthDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::ScoreDesc => "score-desc",
            SortOrder::ScoreAsc => "score-asc",
            SortOrder::LengthAsc => "length-asc",
            SortOrder::LengthDesc => "length-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(SortOrder::None),
            "score-desc" => Ok(SortOrder::ScoreDesc),
            "score-asc" => Ok(SortOrder::ScoreAsc),
            "length-asc" => Ok(SortOrder::LengthAsc),
            "length-desc" => Ok(SortOrder::LengthDesc),
            other => Err(format!(
                "unknown sort order '{}' (expected score-desc, score-asc, length-asc, length-desc or none)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_thresholds() {
        assert_eq!(KeywordClass::from_opportunity(98), KeywordClass::High);
        assert_eq!(KeywordClass::from_opportunity(71), KeywordClass::High);
        assert_eq!(KeywordClass::from_opportunity(70), KeywordClass::Medium);
        assert_eq!(KeywordClass::from_opportunity(46), KeywordClass::Medium);
        assert_eq!(KeywordClass::from_opportunity(45), KeywordClass::Low);
        assert_eq!(KeywordClass::from_opportunity(8), KeywordClass::Low);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("score-desc".parse::<SortOrder>(), Ok(SortOrder::ScoreDesc));
        assert_eq!(" Length-Asc ".parse::<SortOrder>(), Ok(SortOrder::LengthAsc));
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::None));
        assert!("alphabetical".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_class_serializes_lowercase() {
        let json = serde_json::to_string(&KeywordClass::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
