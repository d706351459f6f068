use polars::{datatypes::DataType, error::PolarsError};
use std::io::Error as IoError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Model file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model expects {expected} features, found {found}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("Model was fitted on [{}], asked to predict from [{}]", .expected.join(", "), .found.join(", "))]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Feature column {column} is {dtype}, expected f64")]
    NotNumeric { column: String, dtype: DataType },
}
