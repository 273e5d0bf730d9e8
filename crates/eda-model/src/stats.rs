//! Fixed-shape statistics records, one shape per variable type.
//!
//! Every field declared for a type is always present in the record; a field
//! that is undefined for the data at hand (empty column, zero variance,
//! too few observations) is `None`, never omitted. Calculators return full
//! precision; rounding to two decimals is presentation work.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::VariableType;

/// Statistics for a numeric column, computed over non-null values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `None` for fewer than two observations.
    pub std: Option<f64>,
    /// Sample variance; `None` for fewer than two observations.
    pub var: Option<f64>,
    pub min: f64,
    /// 25th percentile, linear interpolation.
    pub q1: f64,
    /// 75th percentile, linear interpolation.
    pub q3: f64,
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `std / mean`; `None` when the mean is zero or std is undefined.
    pub coef_var: Option<f64>,
    /// Adjusted Fisher-Pearson skewness; `None` below three observations
    /// or for zero variance.
    pub skewness: Option<f64>,
    /// Bias-corrected excess kurtosis; `None` below four observations or
    /// for zero variance.
    pub kurtosis: Option<f64>,
    /// Values strictly outside the Tukey fences. Zero when the IQR is not
    /// strictly positive.
    pub outliers: usize,
    /// Outlier share of the non-null values, 0-100.
    pub outliers_pct: f64,
}

/// Statistics for a categorical column, computed over non-null values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalStats {
    /// Distinct non-null values.
    pub n_unique: usize,
    /// Most frequent value (earliest first occurrence wins ties).
    pub top: String,
    pub top_freq: usize,
    /// Share of the most frequent value, 0-100.
    pub top_pct: f64,
    /// Categories whose frequency is below the rare-category ratio.
    pub rare_categories: usize,
    /// Mean length of the values coerced to text.
    pub avg_len: f64,
    /// Maximum length of the values coerced to text.
    pub max_len: usize,
    /// True when more than the configured share of values parse as numbers.
    pub numeric_like: bool,
    /// True when more than the configured share of values parse as dates
    /// (day-first convention).
    pub datetime_like: bool,
}

/// Statistics for a boolean two-class column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryStats {
    /// Majority class rendered as text.
    pub top: String,
    pub top_freq: usize,
    /// Share of the majority class, 0-100.
    pub top_pct: f64,
    /// Majority-class share expressed as a value >= 50, so that 50 means a
    /// perfectly balanced split and 100 a constant column.
    pub balance: f64,
}

/// Statistics for a datetime column, computed over parseable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatetimeStats {
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
    /// Whole days between max and min.
    pub range_days: i64,
    /// True when any value carries a non-midnight time of day.
    pub has_time: bool,
    /// Values strictly after the analysis wall-clock time.
    pub future_dates: usize,
}

/// Type-tagged statistics record for one column.
///
/// The inner `Option` is the emptiness contract: a column with no usable
/// values yields the tag with `None`, and callers must check before
/// indexing into the fields. `Other` columns never carry statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "stats", rename_all = "lowercase")]
pub enum TypeStats {
    Numeric(Option<NumericStats>),
    Categorical(Option<CategoricalStats>),
    Binary(Option<BinaryStats>),
    Datetime(Option<DatetimeStats>),
    Other,
}

impl TypeStats {
    /// The variable type this record belongs to.
    pub fn variable_type(&self) -> VariableType {
        match self {
            TypeStats::Numeric(_) => VariableType::Numeric,
            TypeStats::Categorical(_) => VariableType::Categorical,
            TypeStats::Binary(_) => VariableType::Binary,
            TypeStats::Datetime(_) => VariableType::Datetime,
            TypeStats::Other => VariableType::Other,
        }
    }

    /// An empty record for the given type, used when a calculator degrades.
    pub fn empty(vtype: VariableType) -> Self {
        match vtype {
            VariableType::Numeric => TypeStats::Numeric(None),
            VariableType::Categorical => TypeStats::Categorical(None),
            VariableType::Binary => TypeStats::Binary(None),
            VariableType::Datetime => TypeStats::Datetime(None),
            VariableType::Other => TypeStats::Other,
        }
    }

    /// True when the record carries no statistics.
    pub fn is_empty(&self) -> bool {
        match self {
            TypeStats::Numeric(s) => s.is_none(),
            TypeStats::Categorical(s) => s.is_none(),
            TypeStats::Binary(s) => s.is_none(),
            TypeStats::Datetime(s) => s.is_none(),
            TypeStats::Other => true,
        }
    }

    /// Outlier percentage, zero for anything but a numeric record.
    pub fn outliers_pct(&self) -> f64 {
        match self {
            TypeStats::Numeric(Some(stats)) => stats.outliers_pct,
            _ => 0.0,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericStats> {
        match self {
            TypeStats::Numeric(Some(stats)) => Some(stats),
            _ => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalStats> {
        match self {
            TypeStats::Categorical(Some(stats)) => Some(stats),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryStats> {
        match self {
            TypeStats::Binary(Some(stats)) => Some(stats),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DatetimeStats> {
        match self {
            TypeStats::Datetime(Some(stats)) => Some(stats),
            _ => None,
        }
    }
}
