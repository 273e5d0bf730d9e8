//! Semantic type classification for single columns.

use eda_model::{AnalysisOptions, VariableType};
use polars::prelude::{Column, DataType};

use crate::column::distinct_non_null;

/// True for any of the polars integer or float dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// True for the native date and datetime dtypes.
pub fn is_temporal_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Date | DataType::Datetime(_, _))
}

/// Assigns the semantic type of one column.
///
/// The rules form a priority list, first match wins:
/// 1. boolean dtype -> binary
/// 2. numeric dtype -> numeric
/// 3. date/datetime dtype -> datetime
/// 4. string dtype, or unique ratio below the categorical threshold
///    -> categorical
/// 5. anything else -> other
///
/// Total and deterministic; an empty column classifies without panicking
/// (the unique-ratio divisor is floored at one). Numeric-looking strings
/// stay categorical here; spotting them is the categorical calculator's
/// heuristic, not a type decision.
pub fn classify_column(column: &Column, options: &AnalysisOptions) -> VariableType {
    let dtype = column.dtype();

    if matches!(dtype, DataType::Boolean) {
        return VariableType::Binary;
    }
    if is_numeric_dtype(dtype) {
        return VariableType::Numeric;
    }
    if is_temporal_dtype(dtype) {
        return VariableType::Datetime;
    }

    let unique_ratio = distinct_non_null(column) as f64 / column.len().max(1) as f64;
    if matches!(dtype, DataType::String) || unique_ratio < options.categorical_unique_ratio {
        return VariableType::Categorical;
    }

    VariableType::Other
}
