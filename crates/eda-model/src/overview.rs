//! Dataset-level key performance indicators.

use serde::{Deserialize, Serialize};

use crate::quality::QualityFlag;

/// Cross-column metrics computed once per dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetKpis {
    pub rows: usize,
    pub columns: usize,
    /// Missing cells over total cells, 0-100.
    pub missing_pct: f64,
    /// Duplicated rows over total rows, 0-100.
    pub duplicate_pct: f64,
    /// Columns with a distinct count above the high-cardinality threshold.
    pub high_cardinality: usize,
    /// Estimated in-memory footprint in bytes.
    pub memory_bytes: usize,
    /// `memory_bytes` formatted as a human-readable unit.
    pub memory_display: String,
    /// True when any column name looks like a prediction target.
    pub leakage_risk: bool,
    /// Columns needing feature-engineering work: categorical, datetime,
    /// other, or high-cardinality numeric.
    pub fe_complexity: usize,
    /// Quick dataset-wide quality class from missing and duplicate ratios.
    pub quality: QualityFlag,
}

/// Formats a byte count into B/KB/MB/GB/TB with two decimals, dividing by
/// 1024 while the value is at least 1024.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}
