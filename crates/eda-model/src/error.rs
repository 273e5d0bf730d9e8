use thiserror::Error;

/// Failure of a single column's statistics calculation.
///
/// These never abort a whole-dataset run: the aggregator catches them,
/// records a row with nulled-out stats, and continues with the next column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EdaError {
    #[error("column '{column}': no value could be parsed as a date")]
    UnparseableDates { column: String },
    #[error("column '{column}': {message}")]
    Stats { column: String, message: String },
}

impl EdaError {
    /// Name of the column the failure is scoped to.
    pub fn column(&self) -> &str {
        match self {
            EdaError::UnparseableDates { column } | EdaError::Stats { column, .. } => column,
        }
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;
