//! Property tests for the invariants the engine promises.

use eda_core::describe::{average_ranks, percentile};
use eda_core::quality::{ColumnShape, score_quality};
use eda_core::{classify_column, correlate, summarize};
use eda_model::{AnalysisOptions, QualityFlag};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use proptest::prelude::*;

fn opts() -> AnalysisOptions {
    AnalysisOptions::default()
}

fn rank(flag: QualityFlag) -> u8 {
    match flag {
        QualityFlag::Good => 0,
        QualityFlag::Medium => 1,
        QualityFlag::Bad => 2,
    }
}

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(values in prop::collection::vec(-1e6..1e6f64, 0..64)) {
        let column: Column = Series::new("x".into(), values).into();
        let first = classify_column(&column, &opts());
        prop_assert_eq!(classify_column(&column, &opts()), first);
    }

    #[test]
    fn string_columns_always_classify(values in prop::collection::vec("[a-z]{0,8}", 0..64)) {
        let column: Column = Series::new("s".into(), values).into();
        let first = classify_column(&column, &opts());
        prop_assert_eq!(classify_column(&column, &opts()), first);
    }

    #[test]
    fn quality_is_monotonic_in_nulls(
        lo in 0.0..100.0f64,
        hi in 0.0..100.0f64,
        unique in 0usize..200,
        outliers_pct in 0.0..100.0f64,
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let shape_lo = ColumnShape { null_pct: lo, unique, unique_pct: 10.0 };
        let shape_hi = ColumnShape { null_pct: hi, unique, unique_pct: 10.0 };
        let flag_lo = score_quality(&shape_lo, outliers_pct, &opts());
        let flag_hi = score_quality(&shape_hi, outliers_pct, &opts());
        prop_assert!(rank(flag_lo) <= rank(flag_hi));
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal(
        a in prop::collection::vec(-1e3..1e3f64, 4..32),
        b in prop::collection::vec(-1e3..1e3f64, 4..32),
    ) {
        let n = a.len().min(b.len());
        let col_a: Column = Series::new("a".into(), a[..n].to_vec()).into();
        let col_b: Column = Series::new("b".into(), b[..n].to_vec()).into();
        let df = DataFrame::new(vec![col_a, col_b]).unwrap();

        let result = correlate(&df, &opts());
        let matrix = result.as_matrix().expect("two numeric columns");
        for i in 0..2 {
            prop_assert_eq!(matrix.values[i][i], 1.0);
            for j in 0..2 {
                let x = matrix.values[i][j];
                let y = matrix.values[j][i];
                prop_assert!(x == y || (x.is_nan() && y.is_nan()));
            }
        }
        for pair in &matrix.significant {
            prop_assert_ne!(&pair.left, &pair.right);
            prop_assert!(pair.coefficient.abs() > matrix.threshold);
            prop_assert!(pair.coefficient.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn percentiles_stay_within_range(
        mut values in prop::collection::vec(-1e6..1e6f64, 1..64),
        q in 0.0..1.0f64,
    ) {
        values.sort_by(|x, y| x.partial_cmp(y).unwrap());
        let p = percentile(&values, q);
        prop_assert!(p >= values[0] - 1e-9);
        prop_assert!(p <= values[values.len() - 1] + 1e-9);
    }

    #[test]
    fn ranks_sum_like_a_permutation(values in prop::collection::vec(-1e6..1e6f64, 1..64)) {
        let ranks = average_ranks(&values);
        let n = values.len() as f64;
        let sum: f64 = ranks.iter().sum();
        prop_assert!((sum - n * (n + 1.0) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn summary_never_loses_or_invents_columns(
        numeric in prop::collection::vec(-1e3..1e3f64, 1..32),
        words in prop::collection::vec("[a-z]{1,4}", 1..32),
    ) {
        let n = numeric.len().min(words.len());
        let col_a: Column = Series::new("nums".into(), numeric[..n].to_vec()).into();
        let col_b: Column = Series::new("words".into(), words[..n].to_vec()).into();
        let df = DataFrame::new(vec![col_a, col_b]).unwrap();

        let tables = summarize(&df, &opts());
        prop_assert_eq!(tables.column_count(), 2);
        let grouped = tables.numeric.len()
            + tables.categorical.len()
            + tables.binary.len()
            + tables.datetime.len()
            + tables.other.len();
        prop_assert_eq!(grouped, 2);
    }
}
