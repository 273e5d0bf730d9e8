//! Per-column quality scoring.

use eda_model::{AnalysisOptions, QualityFlag};

/// Cardinality and null inputs to the quality scorer, precomputed by the
/// aggregator so the scorer stays a pure function.
#[derive(Debug, Clone, Copy)]
pub struct ColumnShape {
    pub null_pct: f64,
    pub unique: usize,
    pub unique_pct: f64,
}

impl ColumnShape {
    pub fn is_constant(&self) -> bool {
        self.unique <= 1
    }

    pub fn is_quasi_constant(&self, options: &AnalysisOptions) -> bool {
        self.unique <= options.quasi_constant_unique && self.unique_pct < options.quasi_constant_pct
    }

    pub fn is_high_cardinality(&self, options: &AnalysisOptions) -> bool {
        self.unique > options.high_cardinality_threshold
    }
}

/// Scores one column from its null share, cardinality, and outlier share.
///
/// `Good` needs a low null share, no high cardinality, and a low outlier
/// share; `Medium` relaxes all three; everything else is `Bad`. Monotonic
/// in `null_pct`: raising nulls with the other inputs fixed never improves
/// the flag.
pub fn score_quality(
    shape: &ColumnShape,
    outliers_pct: f64,
    options: &AnalysisOptions,
) -> QualityFlag {
    if shape.null_pct < options.quality_null_good
        && !shape.is_high_cardinality(options)
        && outliers_pct < options.quality_outlier_good
    {
        QualityFlag::Good
    } else if shape.null_pct < options.quality_null_medium
        && outliers_pct < options.quality_outlier_medium
    {
        QualityFlag::Medium
    } else {
        QualityFlag::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> AnalysisOptions {
        AnalysisOptions::default()
    }

    fn shape(null_pct: f64, unique: usize, unique_pct: f64) -> ColumnShape {
        ColumnShape {
            null_pct,
            unique,
            unique_pct,
        }
    }

    #[test]
    fn clean_column_scores_good() {
        let flag = score_quality(&shape(0.0, 10, 10.0), 0.0, &opts());
        assert_eq!(flag, QualityFlag::Good);
    }

    #[test]
    fn high_cardinality_downgrades_good() {
        let flag = score_quality(&shape(0.0, 51, 51.0), 0.0, &opts());
        assert_eq!(flag, QualityFlag::Medium);
    }

    #[test]
    fn nulls_walk_the_flag_down() {
        assert_eq!(score_quality(&shape(4.9, 5, 5.0), 0.0, &opts()), QualityFlag::Good);
        assert_eq!(score_quality(&shape(10.0, 5, 5.0), 0.0, &opts()), QualityFlag::Medium);
        assert_eq!(score_quality(&shape(20.0, 5, 5.0), 0.0, &opts()), QualityFlag::Bad);
    }

    #[test]
    fn outliers_walk_the_flag_down() {
        assert_eq!(score_quality(&shape(0.0, 5, 5.0), 4.0, &opts()), QualityFlag::Good);
        assert_eq!(score_quality(&shape(0.0, 5, 5.0), 10.0, &opts()), QualityFlag::Medium);
        assert_eq!(score_quality(&shape(0.0, 5, 5.0), 15.0, &opts()), QualityFlag::Bad);
    }

    #[test]
    fn constant_and_quasi_constant_shapes() {
        let options = opts();
        assert!(shape(0.0, 1, 0.5).is_constant());
        assert!(shape(0.0, 0, 0.0).is_constant());
        assert!(!shape(0.0, 2, 1.0).is_constant());

        // Few distinct values and a tiny unique share
        assert!(shape(0.0, 3, 1.0).is_quasi_constant(&options));
        // Few distinct values but a large share of a tiny column
        assert!(!shape(0.0, 3, 60.0).is_quasi_constant(&options));
        assert!(!shape(0.0, 4, 1.0).is_quasi_constant(&options));
    }
}
