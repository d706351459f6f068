use crate::{
    error::Error, leaderboard::PredictedDf, model::LinearModel, role::RoleConfig, Result,
};
use derive_deref::Deref;
use polars::prelude::*;
use std::path::Path;

/// Position of each row in the source file, kept through filtering and sorting.
pub const INDEX_COLUMN: &str = "index";
pub const PREDICTION_COLUMN: &str = "preds";

/// Season statistics, one row per player-season, cleaned for prediction.
#[derive(Clone, Deref)]
pub struct SeasonStatsDf(DataFrame);

impl SeasonStatsDf {
    pub fn load<P: AsRef<Path>>(path: P, config: &RoleConfig) -> Result<Self> {
        let df = crate::load_csv(path.as_ref())?;
        log::debug!("{} rows read from {}", df.height(), path.as_ref().display());
        Self::clean(df, config)
    }

    /// Renames the metric column, indexes rows, strips `%` from text columns,
    /// casts the role's numeric columns to f64 and, if the role asks for it,
    /// drops incomplete rows. `NaN` in a numeric column counts as missing.
    pub fn clean(mut df: DataFrame, config: &RoleConfig) -> Result<Self> {
        log::trace!("stats::clean {}", config.role);
        df.rename(config.metric, &config.metric_column())?;
        let mut df = df.with_row_index(INDEX_COLUMN, None)?;

        strip_percent(&mut df)?;

        for name in config.numeric_columns {
            let cast = df.column(name)?.strict_cast(&DataType::Float64)?;
            df.with_column(nan_to_null(&cast)?)?;
        }

        if config.drop_missing {
            let before = df.height();
            df = df.drop_nulls::<String>(None)?;
            log::debug!(
                "{}: dropped {} rows with missing values",
                config.role,
                before - df.height()
            );
        }
        Ok(Self(df))
    }

    /// Appends the model's prediction for every row as `preds`.
    pub fn predict(self, model: &LinearModel, features: &[&str]) -> Result<PredictedDf> {
        model.check_features(features)?;
        for name in features {
            let dtype = self.column(name)?.dtype();
            if dtype != &DataType::Float64 {
                return Err(Error::NotNumeric {
                    column: name.to_string(),
                    dtype: dtype.clone(),
                });
            }
        }

        let mut df = self
            .0
            .lazy()
            .with_column(model.expr(features).alias(PREDICTION_COLUMN))
            .collect()?;
        // polars ranks NaN above every number, so a NaN prediction is stored as missing
        let preds = nan_to_null(df.column(PREDICTION_COLUMN)?)?;
        df.with_column(preds)?;
        log::debug!(
            "{} predictions, {} missing",
            df.height(),
            df.column(PREDICTION_COLUMN)?.null_count()
        );
        Ok(PredictedDf::new(df))
    }
}

/// Replaces `NaN` in an f64 column with null.
fn nan_to_null(series: &Series) -> Result<Series> {
    let ca: Float64Chunked = series
        .f64()?
        .into_iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect();
    Ok(ca.with_name(series.name()).into_series())
}

/// Removes `%` and surrounding whitespace from every string column.
/// Text-only columns such as `Name` are trimmed too.
fn strip_percent(df: &mut DataFrame) -> Result<()> {
    let text_columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|s| s.dtype() == &DataType::String)
        .map(|s| s.name().to_string())
        .collect();

    for name in text_columns {
        let stripped: StringChunked = df
            .column(&name)?
            .str()?
            .into_iter()
            .map(|value| value.map(|v| v.replace('%', "").trim().to_string()))
            .collect();
        df.with_column(stripped.with_name(&name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::{PITCHING_FEATURES, PITCHING_NUMERIC};

    /// One pitcher row with every numeric column present, percentages as text.
    fn pitcher_frame(era: &str) -> DataFrame {
        let mut columns = vec![
            Series::new("Name", ["Jacob deGrom"]),
            Series::new("ERA", [era]),
            Series::new("IP", [204.0]),
        ];
        for name in PITCHING_NUMERIC {
            if *name == "ERA_current_year" {
                continue;
            }
            if name.ends_with('%') {
                columns.push(Series::new(name, ["21.5 %"]));
            } else {
                columns.push(Series::new(name, [1.25]));
            }
        }
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn renames_metric_and_casts_numeric_columns() {
        let stats = SeasonStatsDf::clean(pitcher_frame("2.43"), &RoleConfig::starter()).unwrap();

        assert!(stats.column("ERA").is_err());
        let era = stats.column("ERA_current_year").unwrap();
        assert_eq!(era.dtype(), &DataType::Float64);
        assert_eq!(era.f64().unwrap().get(0), Some(2.43));

        for name in PITCHING_NUMERIC {
            assert_eq!(stats.column(name).unwrap().dtype(), &DataType::Float64, "{name}");
        }
        assert_eq!(stats.column("K%").unwrap().f64().unwrap().get(0), Some(21.5));
        assert_eq!(stats.column(INDEX_COLUMN).unwrap().dtype(), &IDX_DTYPE);
    }

    #[test]
    fn strips_percent_from_every_text_column() {
        let mut df = df!(
            "Name" => [" A", "B "],
            "Dollars" => ["12 %", "%3"],
            "K%" => [Some("25.0%"), None],
        )
        .unwrap();
        strip_percent(&mut df).unwrap();

        for name in ["Name", "Dollars", "K%"] {
            let column = df.column(name).unwrap().str().unwrap();
            assert!(column.into_iter().flatten().all(|v| !v.contains('%')));
        }
        assert_eq!(df.column("Dollars").unwrap().str().unwrap().get(0), Some("12"));
        assert_eq!(df.column("Name").unwrap().str().unwrap().get(0), Some("A"));
        assert_eq!(df.column("K%").unwrap().str().unwrap().get(1), None);
    }

    #[test]
    fn unparsable_numeric_value_fails() {
        let result = SeasonStatsDf::clean(pitcher_frame("n/a"), &RoleConfig::starter());
        assert!(matches!(result, Err(Error::Polars(_))));
    }

    #[test]
    fn missing_metric_column_fails() {
        let df = pitcher_frame("3.10").drop("ERA").unwrap();
        assert!(SeasonStatsDf::clean(df, &RoleConfig::starter()).is_err());
    }

    #[test]
    fn pitchers_keep_missing_values() {
        let mut df = pitcher_frame("3.10");
        df.with_column(Series::new("xFIP", [None::<f64>])).unwrap();

        let stats = SeasonStatsDf::clean(df, &RoleConfig::reliever()).unwrap();
        assert_eq!(stats.height(), 1);
        assert_eq!(stats.column("xFIP").unwrap().null_count(), 1);
    }

    #[test]
    fn nan_counts_as_missing() {
        let mut df = pitcher_frame("3.50");
        df.with_column(Series::new("K/9", [f64::NAN])).unwrap();
        let stats = SeasonStatsDf::clean(df, &RoleConfig::starter()).unwrap();
        assert_eq!(stats.column("K/9").unwrap().null_count(), 1);

        let mut df = pitcher_frame("3.50");
        df.with_column(Series::new("K/9", [f64::NAN])).unwrap();
        let mut config = RoleConfig::starter();
        config.drop_missing = true;
        let stats = SeasonStatsDf::clean(df, &config).unwrap();
        assert_eq!(stats.height(), 0);
    }

    #[test]
    fn nan_prediction_is_missing() {
        let stats = SeasonStatsDf::clean(pitcher_frame("3.50"), &RoleConfig::starter()).unwrap();
        let mut model = LinearModel::constant(3.0, PITCHING_FEATURES.len());
        model.coefficients[1] = f64::INFINITY;
        model.coefficients[2] = f64::NEG_INFINITY;

        let predicted = stats.predict(&model, PITCHING_FEATURES).unwrap();
        assert_eq!(predicted.column(PREDICTION_COLUMN).unwrap().null_count(), 1);
    }

    #[test]
    fn predicts_constant_model() {
        let stats = SeasonStatsDf::clean(pitcher_frame("3.50"), &RoleConfig::starter()).unwrap();
        let model = LinearModel::constant(3.0, PITCHING_FEATURES.len());
        let predicted = stats.predict(&model, PITCHING_FEATURES).unwrap();

        let preds = predicted.column(PREDICTION_COLUMN).unwrap().f64().unwrap().clone();
        assert_eq!(preds.get(0), Some(3.0));
    }

    #[test]
    fn missing_feature_gives_missing_prediction() {
        let mut df = pitcher_frame("3.50");
        df.with_column(Series::new("Hard%", [None::<&str>])).unwrap();
        let stats = SeasonStatsDf::clean(df, &RoleConfig::starter()).unwrap();
        let model = LinearModel::constant(3.0, PITCHING_FEATURES.len());

        let predicted = stats.predict(&model, PITCHING_FEATURES).unwrap();
        assert_eq!(predicted.column(PREDICTION_COLUMN).unwrap().null_count(), 1);
    }

    #[test]
    fn predict_rejects_text_features() {
        let stats = SeasonStatsDf::clean(pitcher_frame("3.50"), &RoleConfig::starter()).unwrap();
        let model = LinearModel::constant(3.0, 1);
        let err = stats.predict(&model, &["Name"]).err().unwrap();
        assert!(matches!(err, Error::NotNumeric { .. }));
    }

    #[test]
    fn predict_rejects_model_fitted_on_other_columns() {
        let stats = SeasonStatsDf::clean(pitcher_frame("3.50"), &RoleConfig::starter()).unwrap();
        let mut fitted: Vec<&str> = PITCHING_FEATURES.to_vec();
        fitted.swap(0, 1);
        let model = LinearModel::constant(3.0, fitted.len()).with_features(&fitted);

        let err = stats.predict(&model, PITCHING_FEATURES).err().unwrap();
        assert!(matches!(err, Error::FeatureMismatch { .. }));
    }
}
