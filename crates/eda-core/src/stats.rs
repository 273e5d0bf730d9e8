//! Per-type statistics calculators and their dispatch.
//!
//! Every calculator drops missing values first and returns `None` for a
//! column with nothing left — the emptiness contract callers check before
//! reading fields. Only the datetime calculator can genuinely fail (a
//! non-empty column where not a single value parses); the failure stays
//! scoped to that column.

use chrono::{Local, NaiveTime};
use eda_model::{
    AnalysisOptions, BinaryStats, CategoricalStats, DatetimeStats, EdaError, NumericStats,
    Result, TypeStats, VariableType,
};
use polars::prelude::Column;

use crate::column::{datetime_values, float_values, parse_dayfirst, text_values};
use crate::describe;

/// Computes the statistics record for a column of a known type.
pub fn compute_stats(
    column: &Column,
    vtype: VariableType,
    options: &AnalysisOptions,
) -> Result<TypeStats> {
    match vtype {
        VariableType::Numeric => Ok(TypeStats::Numeric(numeric_stats(column, options))),
        VariableType::Categorical => {
            Ok(TypeStats::Categorical(categorical_stats(column, options)))
        }
        VariableType::Binary => Ok(TypeStats::Binary(binary_stats(column))),
        VariableType::Datetime => Ok(TypeStats::Datetime(datetime_stats(column)?)),
        VariableType::Other => Ok(TypeStats::Other),
    }
}

/// Statistics for a numeric column; `None` when no non-null values remain.
pub fn numeric_stats(column: &Column, options: &AnalysisOptions) -> Option<NumericStats> {
    let mut values = float_values(column);
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len();
    let mean = describe::mean(&values);
    let min = values[0];
    let max = values[n - 1];
    let q1 = describe::percentile(&values, 0.25);
    let median = describe::percentile(&values, 0.5);
    let q3 = describe::percentile(&values, 0.75);
    let iqr = q3 - q1;

    let (outliers, outliers_pct) = if iqr > 0.0 {
        let lower = q1 - options.iqr_multiplier * iqr;
        let upper = q3 + options.iqr_multiplier * iqr;
        let count = values.iter().filter(|&&v| v < lower || v > upper).count();
        (count, count as f64 / n as f64 * 100.0)
    } else {
        (0, 0.0)
    };

    let var = describe::sample_variance(&values, mean);
    let std = var.map(f64::sqrt);
    let coef_var = if mean != 0.0 { std.map(|s| s / mean) } else { None };

    Some(NumericStats {
        mean,
        median,
        std,
        var,
        min,
        q1,
        q3,
        max,
        range: max - min,
        iqr,
        coef_var,
        skewness: describe::skewness(&values, mean),
        kurtosis: describe::kurtosis(&values, mean),
        outliers,
        outliers_pct,
    })
}

/// Statistics for a categorical column; `None` when no non-null values
/// remain.
pub fn categorical_stats(column: &Column, options: &AnalysisOptions) -> Option<CategoricalStats> {
    let values = text_values(column);
    if values.is_empty() {
        return None;
    }

    let total = values.len();
    let counts = value_counts(&values);
    let (top, top_freq) = counts[0].clone();
    let rare_categories = counts
        .iter()
        .filter(|(_, freq)| (*freq as f64 / total as f64) < options.rare_category_ratio)
        .count();

    let lengths: Vec<usize> = values.iter().map(|v| v.chars().count()).collect();
    let avg_len = lengths.iter().sum::<usize>() as f64 / total as f64;
    let max_len = lengths.iter().copied().max().unwrap_or(0);

    let numeric_hits = values
        .iter()
        .filter(|v| v.trim().parse::<f64>().is_ok())
        .count();
    let datetime_hits = values.iter().filter(|v| parse_dayfirst(v).is_some()).count();

    Some(CategoricalStats {
        n_unique: counts.len(),
        top,
        top_freq,
        top_pct: top_freq as f64 / total as f64 * 100.0,
        rare_categories,
        avg_len,
        max_len,
        numeric_like: numeric_hits as f64 / total as f64 > options.numeric_like_ratio,
        datetime_like: datetime_hits as f64 / total as f64 > options.datetime_like_ratio,
    })
}

/// Statistics for a boolean column; `None` when no non-null values remain.
pub fn binary_stats(column: &Column) -> Option<BinaryStats> {
    let values = text_values(column);
    if values.is_empty() {
        return None;
    }

    let total = values.len();
    let counts = value_counts(&values);
    let (top, top_freq) = counts[0].clone();
    let top_pct = top_freq as f64 / total as f64 * 100.0;
    let balance = if top_pct >= 50.0 { top_pct } else { 100.0 - top_pct };

    Some(BinaryStats {
        top,
        top_freq,
        top_pct,
        balance,
    })
}

/// Statistics for a datetime column.
///
/// `Ok(None)` for an all-null column; an error when the column has values
/// but none of them converts or parses to a timestamp.
pub fn datetime_stats(column: &Column) -> Result<Option<DatetimeStats>> {
    let non_null = column.len() - column.null_count();
    if non_null == 0 {
        return Ok(None);
    }

    let parsed = datetime_values(column);
    if parsed.is_empty() {
        return Err(EdaError::UnparseableDates {
            column: column.name().to_string(),
        });
    }

    // parsed is non-empty, so min/max exist
    let min = *parsed.iter().min().ok_or_else(|| EdaError::Stats {
        column: column.name().to_string(),
        message: "no minimum timestamp".to_string(),
    })?;
    let max = *parsed.iter().max().ok_or_else(|| EdaError::Stats {
        column: column.name().to_string(),
        message: "no maximum timestamp".to_string(),
    })?;

    let now = Local::now().naive_local();
    Ok(Some(DatetimeStats {
        min,
        max,
        range_days: (max - min).num_days(),
        has_time: parsed.iter().any(|dt| dt.time() != NaiveTime::MIN),
        future_dates: parsed.iter().filter(|&&dt| dt > now).count(),
    }))
}

/// Frequency per distinct value, most frequent first; ties resolve to the
/// earliest first occurrence, so the result is deterministic.
fn value_counts(values: &[String]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for value in values {
        if !counts.contains_key(value.as_str()) {
            order.push(value.clone());
        }
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    let mut result: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let freq = counts.get(value.as_str()).copied().unwrap_or(0);
            (value, freq)
        })
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// Top `k` entries of [`value_counts`], used by the profile briefs.
pub(crate) fn top_values(column: &Column, k: usize) -> (usize, Vec<(String, usize)>) {
    let values = text_values(column);
    let counts = value_counts(&values);
    let n_unique = counts.len();
    (n_unique, counts.into_iter().take(k).collect())
}
