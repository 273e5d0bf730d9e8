//! Per-variable briefs and the outlier fence records.

use eda_model::{
    AnalysisOptions, BriefPayload, OutlierFences, VariableBrief, VariableType,
};
use polars::prelude::{Column, DataFrame};

use crate::classify::classify_column;
use crate::column::{datetime_values, float_values};
use crate::describe::percentile;
use crate::stats::top_values;

/// Builds one compact brief per column, in source order.
pub fn variable_briefs(df: &DataFrame, options: &AnalysisOptions) -> Vec<VariableBrief> {
    df.get_columns()
        .iter()
        .map(|column| brief(column, options))
        .collect()
}

fn brief(column: &Column, options: &AnalysisOptions) -> VariableBrief {
    let vtype = classify_column(column, options);
    let count = column.len();
    let missing = column.null_count();

    let payload = match vtype {
        VariableType::Numeric => {
            let mut values = float_values(column);
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            if values.is_empty() {
                BriefPayload::Numeric {
                    mean: None,
                    median: None,
                    min: None,
                    max: None,
                }
            } else {
                BriefPayload::Numeric {
                    mean: Some(crate::describe::mean(&values)),
                    median: Some(percentile(&values, 0.5)),
                    min: Some(values[0]),
                    max: Some(values[values.len() - 1]),
                }
            }
        }
        VariableType::Categorical | VariableType::Binary => {
            let (n_unique, top_values) = top_values(column, 3);
            BriefPayload::Discrete {
                n_unique,
                top_values,
            }
        }
        VariableType::Datetime => {
            let parsed = datetime_values(column);
            BriefPayload::Datetime {
                min: parsed.iter().min().copied(),
                max: parsed.iter().max().copied(),
            }
        }
        VariableType::Other => BriefPayload::Other,
    };

    VariableBrief {
        name: column.name().to_string(),
        vtype,
        count,
        missing,
        missing_pct: missing as f64 / count.max(1) as f64 * 100.0,
        payload,
    }
}

/// Tukey fences for every numeric column with at least one value.
///
/// Unlike the summary calculator, a zero IQR does not suppress the record:
/// the fences collapse onto the quartiles and any value off that point
/// still counts, which is what a plot annotation needs.
pub fn outlier_fences(df: &DataFrame, options: &AnalysisOptions) -> Vec<OutlierFences> {
    df.get_columns()
        .iter()
        .filter(|column| classify_column(column, options) == VariableType::Numeric)
        .filter_map(|column| fences(column, options))
        .collect()
}

fn fences(column: &Column, options: &AnalysisOptions) -> Option<OutlierFences> {
    let mut values = float_values(column);
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = percentile(&values, 0.25);
    let median = percentile(&values, 0.5);
    let q3 = percentile(&values, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - options.iqr_multiplier * iqr;
    let upper = q3 + options.iqr_multiplier * iqr;
    let outliers = values.iter().filter(|&&v| v < lower || v > upper).count();

    Some(OutlierFences {
        name: column.name().to_string(),
        q1,
        median,
        q3,
        lower,
        upper,
        outliers,
        outliers_pct: outliers as f64 / values.len() as f64 * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::prelude::{DataFrame, DataType, NamedFrom, Series, df};

    fn opts() -> AnalysisOptions {
        AnalysisOptions::default()
    }

    fn date_column(name: &str, dates: &[NaiveDate]) -> Column {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let days: Vec<i32> = dates.iter().map(|d| (*d - epoch).num_days() as i32).collect();
        Series::new(name.into(), days)
            .cast(&DataType::Date)
            .unwrap()
            .into()
    }

    #[test]
    fn briefs_cover_every_column() {
        let df = df!(
            "n" => [1i64, 2, 3],
            "c" => ["a", "b", "a"],
        )
        .unwrap();
        let briefs = variable_briefs(&df, &opts());
        assert_eq!(briefs.len(), 2);

        match &briefs[0].payload {
            BriefPayload::Numeric { mean, min, max, .. } => {
                assert_eq!(*mean, Some(2.0));
                assert_eq!(*min, Some(1.0));
                assert_eq!(*max, Some(3.0));
            }
            other => panic!("expected numeric payload, got {other:?}"),
        }

        match &briefs[1].payload {
            BriefPayload::Discrete { n_unique, top_values } => {
                assert_eq!(*n_unique, 2);
                assert_eq!(top_values[0], ("a".to_string(), 2));
            }
            other => panic!("expected discrete payload, got {other:?}"),
        }
    }

    #[test]
    fn discrete_briefs_cap_at_three_values() {
        let df = df!("c" => ["a", "a", "b", "b", "c", "d", "e"]).unwrap();
        let briefs = variable_briefs(&df, &opts());
        match &briefs[0].payload {
            BriefPayload::Discrete { n_unique, top_values } => {
                assert_eq!(*n_unique, 5);
                assert_eq!(top_values.len(), 3);
            }
            other => panic!("expected discrete payload, got {other:?}"),
        }
    }

    #[test]
    fn datetime_brief_spans_min_to_max() {
        let column = date_column(
            "d",
            &[
                NaiveDate::from_ymd_opt(2021, 3, 5).unwrap(),
                NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2021, 3, 10).unwrap(),
            ],
        );
        let df = DataFrame::new(vec![column]).unwrap();
        let briefs = variable_briefs(&df, &opts());
        match &briefs[0].payload {
            BriefPayload::Datetime { min, max } => {
                assert_eq!(
                    min.unwrap().date(),
                    NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
                );
                assert_eq!(
                    max.unwrap().date(),
                    NaiveDate::from_ymd_opt(2021, 3, 10).unwrap()
                );
            }
            other => panic!("expected datetime payload, got {other:?}"),
        }
    }

    #[test]
    fn fences_match_quartile_arithmetic() {
        let df = df!("x" => [1.0f64, 2.0, 3.0, 4.0, 100.0]).unwrap();
        let fences = outlier_fences(&df, &opts());
        assert_eq!(fences.len(), 1);
        let f = &fences[0];
        assert_eq!(f.q1, 2.0);
        assert_eq!(f.q3, 4.0);
        assert_eq!(f.lower, -1.0);
        assert_eq!(f.upper, 7.0);
        assert_eq!(f.outliers, 1);
        assert!((f.outliers_pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_iqr_fences_still_emit_a_record() {
        let df = df!("x" => [5.0f64, 5.0, 5.0, 5.0, 9.0]).unwrap();
        let fences = outlier_fences(&df, &opts());
        let f = &fences[0];
        assert_eq!(f.q1, 5.0);
        assert_eq!(f.q3, 5.0);
        assert_eq!(f.lower, 5.0);
        assert_eq!(f.upper, 5.0);
        assert_eq!(f.outliers, 1);
    }

    #[test]
    fn non_numeric_columns_get_no_fences() {
        let df = df!("c" => ["a", "b", "c"]).unwrap();
        assert!(outlier_fences(&df, &opts()).is_empty());
    }
}
