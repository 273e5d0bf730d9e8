//! Per-column summary rows and the tables the aggregator assembles.

use serde::{Deserialize, Serialize};

use crate::quality::QualityFlag;
use crate::stats::TypeStats;
use crate::types::VariableType;

/// Base information plus type statistics for a single column.
///
/// Built once per column per run, in source column order, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub vtype: VariableType,
    /// Total values including nulls.
    pub total: usize,
    pub non_null: usize,
    pub nulls: usize,
    /// Null share of the total, 0-100.
    pub null_pct: f64,
    /// Distinct non-null values.
    pub unique: usize,
    /// Distinct share of the total, 0-100.
    pub unique_pct: f64,
    /// At most one distinct value.
    pub is_constant: bool,
    /// Very low distinct count and unique share.
    pub is_quasi_constant: bool,
    /// Distinct count above the high-cardinality threshold.
    pub is_high_cardinality: bool,
    pub quality: QualityFlag,
    pub stats: TypeStats,
}

/// The summary tables for one analysis run.
///
/// Each vector preserves source column order. `other` holds only the names
/// of columns the calculators have nothing to say about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTables {
    /// All classified columns (base info + quality).
    pub general: Vec<ColumnProfile>,
    pub numeric: Vec<ColumnProfile>,
    pub categorical: Vec<ColumnProfile>,
    pub binary: Vec<ColumnProfile>,
    pub datetime: Vec<ColumnProfile>,
    /// Names of `other`-typed columns.
    pub other: Vec<String>,
}

impl SummaryTables {
    /// Total columns seen by the aggregator, residual list included.
    pub fn column_count(&self) -> usize {
        self.general.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_count() == 0
    }
}

/// Column names grouped by the data-quality conditions worth surfacing.
///
/// Derived from the general table; order within each list follows the
/// source column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityInsights {
    /// Columns with more than 20% nulls.
    pub many_nulls: Vec<String>,
    pub high_cardinality: Vec<String>,
    pub constants: Vec<String>,
    pub quasi_constants: Vec<String>,
    /// Columns scored `Bad`.
    pub low_quality: Vec<String>,
}

impl QualityInsights {
    pub fn is_empty(&self) -> bool {
        self.many_nulls.is_empty()
            && self.high_cardinality.is_empty()
            && self.constants.is_empty()
            && self.quasi_constants.is_empty()
            && self.low_quality.is_empty()
    }
}
