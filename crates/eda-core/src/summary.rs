//! The summary aggregator: one pass over the dataset, one profile per
//! column, grouped into per-type tables.

use eda_model::{
    AnalysisOptions, ColumnProfile, QualityFlag, QualityInsights, SummaryTables, TypeStats,
    VariableType,
};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, warn};

use crate::classify::classify_column;
use crate::column::distinct_non_null;
use crate::quality::{ColumnShape, score_quality};
use crate::stats::compute_stats;

/// Builds the summary tables for a dataset, visiting columns in source
/// order.
///
/// A calculator failure is contained to its column: the profile keeps the
/// base information and quality flag with an empty statistics record, and
/// the run continues. A zero-column frame yields empty tables.
pub fn summarize(df: &DataFrame, options: &AnalysisOptions) -> SummaryTables {
    let mut tables = SummaryTables::default();

    for column in df.get_columns() {
        let vtype = classify_column(column, options);
        if vtype == VariableType::Other {
            debug!(column = %column.name(), "column has no summary shape");
            tables.other.push(column.name().to_string());
            continue;
        }

        let profile = profile_column(column, vtype, options);
        match vtype {
            VariableType::Numeric => tables.numeric.push(profile.clone()),
            VariableType::Categorical => tables.categorical.push(profile.clone()),
            VariableType::Binary => tables.binary.push(profile.clone()),
            VariableType::Datetime => tables.datetime.push(profile.clone()),
            VariableType::Other => unreachable!("other columns filtered above"),
        }
        tables.general.push(profile);
    }

    tables
}

fn profile_column(column: &Column, vtype: VariableType, options: &AnalysisOptions) -> ColumnProfile {
    let total = column.len();
    let nulls = column.null_count();
    let non_null = total - nulls;
    let unique = distinct_non_null(column);
    let divisor = total.max(1) as f64;

    let shape = ColumnShape {
        null_pct: nulls as f64 / divisor * 100.0,
        unique,
        unique_pct: unique as f64 / divisor * 100.0,
    };

    let stats = match compute_stats(column, vtype, options) {
        Ok(stats) => stats,
        Err(err) => {
            warn!(column = %err.column(), error = %err, "statistics degraded to empty");
            TypeStats::empty(vtype)
        }
    };

    let quality = score_quality(&shape, stats.outliers_pct(), options);

    ColumnProfile {
        name: column.name().to_string(),
        vtype,
        total,
        non_null,
        nulls,
        null_pct: shape.null_pct,
        unique,
        unique_pct: shape.unique_pct,
        is_constant: shape.is_constant(),
        is_quasi_constant: shape.is_quasi_constant(options),
        is_high_cardinality: shape.is_high_cardinality(options),
        quality,
        stats,
    }
}

/// Collects the column names worth flagging, from an already-built general
/// table.
pub fn quality_insights(tables: &SummaryTables, options: &AnalysisOptions) -> QualityInsights {
    let mut insights = QualityInsights::default();
    for profile in &tables.general {
        if profile.null_pct > options.many_nulls_pct {
            insights.many_nulls.push(profile.name.clone());
        }
        if profile.is_high_cardinality {
            insights.high_cardinality.push(profile.name.clone());
        }
        if profile.is_constant {
            insights.constants.push(profile.name.clone());
        }
        if profile.is_quasi_constant {
            insights.quasi_constants.push(profile.name.clone());
        }
        if profile.quality == QualityFlag::Bad {
            insights.low_quality.push(profile.name.clone());
        }
    }
    insights
}
