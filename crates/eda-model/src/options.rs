//! Configuration for the analysis engine.
//!
//! Every heuristic threshold used by the classifier, the calculators, and
//! the quality scorer lives here, so behavior is overridable without
//! touching calculator logic.

use serde::{Deserialize, Serialize};

/// Thresholds driving classification, statistics, and quality scoring.
///
/// Ratio fields compare with a strict `>` unless noted otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Distinct-count above which a column is high-cardinality.
    pub high_cardinality_threshold: usize,
    /// Maximum distinct count for a quasi-constant column.
    pub quasi_constant_unique: usize,
    /// Maximum unique percentage (0-100) for a quasi-constant column.
    pub quasi_constant_pct: f64,
    /// Unique ratio (0-1) below which a non-string column is categorical.
    pub categorical_unique_ratio: f64,
    /// Frequency ratio (0-1) below which a category counts as rare.
    pub rare_category_ratio: f64,
    /// Ratio of parseable values above which a text column is numeric-like.
    pub numeric_like_ratio: f64,
    /// Ratio of parseable values above which a text column is datetime-like.
    pub datetime_like_ratio: f64,
    /// IQR multiplier for Tukey outlier fences.
    pub iqr_multiplier: f64,
    /// Absolute coefficient above which a correlation pair is significant.
    pub correlation_threshold: f64,
    /// Null percentage below which a column can still be `Good`.
    pub quality_null_good: f64,
    /// Null percentage below which a column can still be `Medium`.
    pub quality_null_medium: f64,
    /// Outlier percentage below which a column can still be `Good`.
    pub quality_outlier_good: f64,
    /// Outlier percentage below which a column can still be `Medium`.
    pub quality_outlier_medium: f64,
    /// Null percentage above which a column joins the many-nulls insight.
    pub many_nulls_pct: f64,
    /// Dataset missing percentage below which the dataset can be `Good`.
    pub dataset_missing_good: f64,
    /// Dataset duplicate percentage below which the dataset can be `Good`.
    pub dataset_duplicate_good: f64,
    /// Dataset missing percentage below which the dataset can be `Medium`.
    pub dataset_missing_medium: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            high_cardinality_threshold: 50,
            quasi_constant_unique: 3,
            quasi_constant_pct: 5.0,
            categorical_unique_ratio: 0.5,
            rare_category_ratio: 0.01,
            numeric_like_ratio: 0.9,
            datetime_like_ratio: 0.6,
            iqr_multiplier: 1.5,
            correlation_threshold: 0.5,
            quality_null_good: 5.0,
            quality_null_medium: 20.0,
            quality_outlier_good: 5.0,
            quality_outlier_medium: 15.0,
            many_nulls_pct: 20.0,
            dataset_missing_good: 5.0,
            dataset_duplicate_good: 1.0,
            dataset_missing_medium: 15.0,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation_threshold(mut self, threshold: f64) -> Self {
        self.correlation_threshold = threshold;
        self
    }

    pub fn with_high_cardinality_threshold(mut self, threshold: usize) -> Self {
        self.high_cardinality_threshold = threshold;
        self
    }

    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = multiplier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.high_cardinality_threshold, 50);
        assert_eq!(opts.iqr_multiplier, 1.5);
        assert_eq!(opts.numeric_like_ratio, 0.9);
        assert_eq!(opts.datetime_like_ratio, 0.6);
        assert_eq!(opts.correlation_threshold, 0.5);
        assert_eq!(opts.many_nulls_pct, 20.0);
        assert_eq!(opts.dataset_missing_good, 5.0);
        assert_eq!(opts.dataset_duplicate_good, 1.0);
        assert_eq!(opts.dataset_missing_medium, 15.0);
    }

    #[test]
    fn builder_overrides() {
        let opts = AnalysisOptions::new()
            .with_correlation_threshold(0.7)
            .with_high_cardinality_threshold(10);
        assert_eq!(opts.correlation_threshold, 0.7);
        assert_eq!(opts.high_cardinality_threshold, 10);
    }
}
