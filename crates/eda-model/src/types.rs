//! Semantic variable types assigned by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a column, assigned once per analysis run.
///
/// The five tags are mutually exclusive and collectively exhaustive:
/// every column receives exactly one, and the assignment never changes
/// during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableType {
    /// Integer or floating-point values.
    Numeric,
    /// Discrete labels (strings, or low-cardinality values of any kind).
    Categorical,
    /// Boolean-typed two-class values.
    Binary,
    /// Dates or timestamps.
    Datetime,
    /// Anything the other four tags do not cover.
    Other,
}

impl VariableType {
    /// Returns the lowercase name used in summary tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::Numeric => "numeric",
            VariableType::Categorical => "categorical",
            VariableType::Binary => "binary",
            VariableType::Datetime => "datetime",
            VariableType::Other => "other",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numeric" => Ok(VariableType::Numeric),
            "categorical" => Ok(VariableType::Categorical),
            "binary" | "boolean" => Ok(VariableType::Binary),
            "datetime" => Ok(VariableType::Datetime),
            "other" => Ok(VariableType::Other),
            _ => Err(format!("Unknown variable type: {s}")),
        }
    }
}
