//! Data model for the EDA summarization engine.
//!
//! Pure types only: variable type tags, fixed-shape statistics records,
//! summary rows and tables, correlation results, dataset KPIs, analysis
//! options, and the per-column error type. The engine that fills these in
//! lives in `eda-core`; rendering them is an external concern.

pub mod correlation;
pub mod error;
pub mod options;
pub mod overview;
pub mod profile;
pub mod quality;
pub mod stats;
pub mod summary;
pub mod types;

pub use correlation::{CorrelationMatrix, CorrelationPair, CorrelationResult};
pub use error::{EdaError, Result};
pub use options::AnalysisOptions;
pub use overview::{DatasetKpis, format_bytes};
pub use profile::{BriefPayload, OutlierFences, VariableBrief};
pub use quality::QualityFlag;
pub use stats::{BinaryStats, CategoricalStats, DatetimeStats, NumericStats, TypeStats};
pub use summary::{ColumnProfile, QualityInsights, SummaryTables};
pub use types::VariableType;
