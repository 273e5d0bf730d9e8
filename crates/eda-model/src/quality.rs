//! Heuristic quality labels attached to every summary row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality label derived from null ratio, cardinality, and outlier ratio.
///
/// The label is monotonic in the null percentage: raising nulls while
/// holding the other inputs fixed can only move the label toward `Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityFlag {
    Good,
    Medium,
    Bad,
}

impl QualityFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityFlag::Good => "good",
            QualityFlag::Medium => "medium",
            QualityFlag::Bad => "bad",
        }
    }
}

impl fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
