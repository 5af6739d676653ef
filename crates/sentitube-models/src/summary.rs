//! Per-comment result rows and aggregated summaries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::sentiment::SentimentLabel;

/// One comment paired with its classification, aligned by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub comment: String,
    pub sentiment: SentimentLabel,
}

/// The table and chart data for one analyzed video: ordered rows plus
/// per-label counts. `total` always equals `rows.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
    pub rows: Vec<ResultRow>,
}

impl SentimentSummary {
    /// Pair comments with labels by position and aggregate label counts.
    ///
    /// Callers must supply exactly one label per comment; the classifier
    /// guarantees this by padding or truncating before handing labels over.
    pub fn build(comments: Vec<String>, labels: Vec<SentimentLabel>) -> Self {
        debug_assert_eq!(comments.len(), labels.len());

        let rows: Vec<ResultRow> = comments
            .into_iter()
            .zip(labels)
            .map(|(comment, sentiment)| ResultRow { comment, sentiment })
            .collect();

        let mut counts = BTreeMap::new();
        for row in &rows {
            *counts.entry(row.sentiment.to_string()).or_insert(0) += 1;
        }

        Self {
            total: rows.len(),
            counts,
            rows,
        }
    }

    /// Summary for a video with no comments.
    pub fn empty() -> Self {
        Self {
            total: 0,
            counts: BTreeMap::new(),
            rows: Vec::new(),
        }
    }
}
