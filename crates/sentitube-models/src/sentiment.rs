//! Sentiment labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome for a single comment.
///
/// The model is prompted for Positive/Neutral/Negative but is not
/// contractually bound to them; any other line it emits is preserved
/// verbatim as `Other` rather than discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
    Other(String),
}

impl From<&str> for SentimentLabel {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "positive" => Self::Positive,
            "neutral" => Self::Neutral,
            "negative" => Self::Negative,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("Positive"),
            Self::Neutral => f.write_str("Neutral"),
            Self::Negative => f.write_str("Negative"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nominal_labels() {
        assert_eq!(SentimentLabel::from("Positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from("Neutral"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from("Negative"), SentimentLabel::Negative);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(SentimentLabel::from("  positive "), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from("NEGATIVE"), SentimentLabel::Negative);
    }

    #[test]
    fn test_unknown_label_is_preserved() {
        assert_eq!(
            SentimentLabel::from("Mixed"),
            SentimentLabel::Other("Mixed".to_string())
        );
        assert_eq!(SentimentLabel::from("Mixed").to_string(), "Mixed");
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"Positive\""
        );
        let parsed: SentimentLabel = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(parsed, SentimentLabel::Negative);
    }
}
