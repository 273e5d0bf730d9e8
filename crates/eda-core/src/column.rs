//! Value access over polars columns.
//!
//! The engine never mutates its input; these helpers read cells as
//! `AnyValue` and convert them to the scalar shapes the calculators work
//! with. Only a null cell counts as missing: empty strings are values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::{AnyValue, Column, TimeUnit};
use std::collections::BTreeSet;

/// Reads one cell, treating any out-of-range access as null.
pub fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

/// Renders a cell as text. Nulls become the empty string; floats drop
/// trailing zeros so `1.0` and `1` render the same.
pub fn value_to_string(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        // Display for f64 already renders the shortest round-trip form,
        // so 1.0 and 1 come out the same without any trimming
        AnyValue::Float32(v) => f64::from(*v).to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Extracts a numeric cell as `f64`. Strings are not coerced here; the
/// numeric-looking-text heuristic belongs to the categorical calculator.
pub fn value_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        _ => None,
    }
}

/// Extracts a cell as a timestamp: native date/datetime values convert
/// directly, strings go through the day-first parser.
pub fn value_to_datetime(value: &AnyValue<'_>) -> Option<NaiveDateTime> {
    match value {
        AnyValue::Date(days) => date_from_epoch_days(*days).map(|d| d.and_time(NaiveTime::MIN)),
        AnyValue::Datetime(ts, unit, _) => timestamp_to_naive(*ts, *unit),
        AnyValue::DatetimeOwned(ts, unit, _) => timestamp_to_naive(*ts, *unit),
        AnyValue::String(s) => parse_dayfirst(s),
        AnyValue::StringOwned(s) => parse_dayfirst(s),
        _ => None,
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(chrono::Duration::days(i64::from(days)))
}

fn timestamp_to_naive(ts: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let dt = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(ts)?,
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(ts)?,
        TimeUnit::Nanoseconds => {
            DateTime::from_timestamp(ts.div_euclid(1_000_000_000), ts.rem_euclid(1_000_000_000) as u32)?
        }
    };
    Some(dt.naive_utc())
}

const DATETIME_FORMATS: [&str; 8] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 5] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parses a textual date with the day-first convention: for ambiguous
/// numeric dates like `03/04/2020` the first component is the day.
pub fn parse_dayfirst(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Non-null values rendered as text, in row order.
pub fn text_values(column: &Column) -> Vec<String> {
    (0..column.len())
        .filter_map(|idx| {
            let value = cell(column, idx);
            if matches!(value, AnyValue::Null) {
                None
            } else {
                Some(value_to_string(&value))
            }
        })
        .collect()
}

/// Non-null numeric values, in row order. NaN cells count as missing.
pub fn float_values(column: &Column) -> Vec<f64> {
    (0..column.len())
        .filter_map(|idx| value_to_f64(&cell(column, idx)))
        .filter(|v| !v.is_nan())
        .collect()
}

/// Values that convert or parse to a timestamp, in row order.
pub fn datetime_values(column: &Column) -> Vec<NaiveDateTime> {
    (0..column.len())
        .filter_map(|idx| value_to_datetime(&cell(column, idx)))
        .collect()
}

/// Distinct non-null values, compared by their text rendering.
pub fn distinct_non_null(column: &Column) -> usize {
    let mut seen = BTreeSet::new();
    for idx in 0..column.len() {
        let value = cell(column, idx);
        if !matches!(value, AnyValue::Null) {
            seen.insert(value_to_string(&value));
        }
    }
    seen.len()
}
