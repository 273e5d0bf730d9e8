//! Variable-type-aware statistical summarization over polars frames.
//!
//! The engine classifies each column into one of five semantic types,
//! runs the matching statistics calculator, scores data quality, and
//! derives dataset-wide results: summary tables, quality insights, a
//! Spearman correlation matrix, KPIs, per-variable briefs, and outlier
//! fences. [`analyze`] runs the whole pipeline; the individual passes are
//! public for callers that only need one of them.
//!
//! The input frame is never mutated, and a failure in one column's
//! statistics degrades that column instead of aborting the run.

pub mod classify;
pub mod column;
pub mod correlation;
pub mod describe;
pub mod overview;
pub mod profile;
pub mod quality;
pub mod stats;
pub mod summary;

use eda_model::{
    AnalysisOptions, CorrelationResult, DatasetKpis, OutlierFences, QualityInsights,
    SummaryTables, VariableBrief,
};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

pub use classify::classify_column;
pub use correlation::correlate;
pub use overview::dataset_kpis;
pub use profile::{outlier_fences, variable_briefs};
pub use stats::compute_stats;
pub use summary::{quality_insights, summarize};

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub tables: SummaryTables,
    pub insights: QualityInsights,
    pub correlation: CorrelationResult,
    pub kpis: DatasetKpis,
    pub briefs: Vec<VariableBrief>,
    pub fences: Vec<OutlierFences>,
}

/// Runs the full analysis pipeline over a frame.
pub fn analyze(df: &DataFrame, options: &AnalysisOptions) -> Report {
    debug!(rows = df.height(), columns = df.width(), "analysis started");

    let tables = summarize(df, options);
    let insights = quality_insights(&tables, options);
    let correlation = correlate(df, options);
    let kpis = dataset_kpis(df, options);
    let briefs = variable_briefs(df, options);
    let fences = outlier_fences(df, options);

    debug!(
        profiled = tables.column_count(),
        flagged = insights.low_quality.len(),
        "analysis finished"
    );

    Report {
        tables,
        insights,
        correlation,
        kpis,
        briefs,
        fences,
    }
}
