//! Dataset-level KPIs: the one-glance numbers for a whole table.

use std::collections::HashSet;

use eda_model::{AnalysisOptions, DatasetKpis, QualityFlag, VariableType, format_bytes};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::classify::classify_column;
use crate::column::{cell, distinct_non_null, value_to_string};

/// Column names that suggest a prediction target leaked into the features.
const LEAKAGE_NAMES: [&str; 5] = ["target", "label", "outcome", "y", "class"];

/// Computes the cross-column KPIs for a dataset in one pass.
pub fn dataset_kpis(df: &DataFrame, options: &AnalysisOptions) -> DatasetKpis {
    let rows = df.height();
    let columns = df.width();
    let cells = rows * columns;

    let null_cells: usize = df.get_columns().iter().map(|c| c.null_count()).sum();
    let missing_pct = if cells > 0 {
        null_cells as f64 / cells as f64 * 100.0
    } else {
        0.0
    };

    let duplicate_pct = if rows > 0 {
        duplicate_rows(df) as f64 / rows as f64 * 100.0
    } else {
        0.0
    };

    let mut high_cardinality = 0;
    let mut fe_complexity = 0;
    let mut leakage_risk = false;
    for column in df.get_columns() {
        let distinct = distinct_non_null(column);
        let high = distinct > options.high_cardinality_threshold;
        if high {
            high_cardinality += 1;
        }

        let vtype = classify_column(column, options);
        let needs_work = match vtype {
            VariableType::Categorical | VariableType::Datetime | VariableType::Other => true,
            VariableType::Numeric => high,
            VariableType::Binary => false,
        };
        if needs_work {
            fe_complexity += 1;
        }

        let lowered = column.name().to_lowercase();
        if LEAKAGE_NAMES.contains(&lowered.as_str()) {
            debug!(column = %column.name(), "column name suggests a prediction target");
            leakage_risk = true;
        }
    }

    let quality = if missing_pct < options.dataset_missing_good
        && duplicate_pct < options.dataset_duplicate_good
    {
        QualityFlag::Good
    } else if missing_pct < options.dataset_missing_medium {
        QualityFlag::Medium
    } else {
        QualityFlag::Bad
    };

    let memory_bytes = df.estimated_size();

    DatasetKpis {
        rows,
        columns,
        missing_pct,
        duplicate_pct,
        high_cardinality,
        memory_bytes,
        memory_display: format_bytes(memory_bytes),
        leakage_risk,
        fe_complexity,
        quality,
    }
}

/// Counts rows that repeat an earlier row, comparing full rendered rows so
/// mixed dtypes compare consistently (nulls render empty, which still
/// distinguishes them from any value).
fn duplicate_rows(df: &DataFrame) -> usize {
    let columns = df.get_columns();
    if columns.is_empty() {
        return 0;
    }
    let mut seen = HashSet::with_capacity(df.height());
    let mut duplicates = 0;
    for row in 0..df.height() {
        let key = columns
            .iter()
            .map(|column| value_to_string(&cell(column, row)))
            .collect::<Vec<_>>()
            .join("\u{1f}");
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}
