//! Lightweight per-variable records for profile cards and outlier panels.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::VariableType;

/// Type-dependent payload of a [`VariableBrief`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BriefPayload {
    Numeric {
        mean: Option<f64>,
        median: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Categorical and binary columns share this shape.
    Discrete {
        n_unique: usize,
        /// Up to three most frequent values with their counts, most
        /// frequent first.
        top_values: Vec<(String, usize)>,
    },
    Datetime {
        min: Option<NaiveDateTime>,
        max: Option<NaiveDateTime>,
    },
    Other,
}

/// Compact summary of one column, enough for a profile card header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBrief {
    pub name: String,
    pub vtype: VariableType,
    /// Total values including nulls.
    pub count: usize,
    pub missing: usize,
    /// Missing share of the total, 0-100.
    pub missing_pct: f64,
    pub payload: BriefPayload,
}

/// Tukey fences and quartiles for one numeric column.
///
/// These are the numbers an outlier panel annotates next to each
/// distribution plot; `lower`/`upper` are the 1.5x-IQR fences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierFences {
    pub name: String,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
    pub outliers: usize,
    /// Outlier share of the non-null values, 0-100.
    pub outliers_pct: f64,
}
