use crate::{error::Error, Result};
use itertools::Itertools;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// A fitted linear regression: `intercept + coefficients · features`.
///
/// `features` names the columns the model was fitted on. When present, any
/// prediction request must name exactly those columns in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
            features: None,
        }
    }

    /// A model that predicts `value` for every row of `n_features` inputs.
    pub fn constant(value: f64, n_features: usize) -> Self {
        Self::new(value, vec![0.0; n_features])
    }

    pub fn with_features<S: AsRef<str>>(mut self, features: &[S]) -> Self {
        self.features = Some(features.iter().map(|f| f.as_ref().to_string()).collect());
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let model: Self = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded model with {} coefficients from {}",
            model.n_features(),
            path.as_ref().display()
        );
        Ok(model)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Checks a feature list against what the model was fitted on.
    pub fn check_features(&self, features: &[&str]) -> Result<()> {
        if let Some(fitted) = &self.features {
            if fitted.len() != self.coefficients.len() {
                return Err(Error::FeatureCountMismatch {
                    expected: self.coefficients.len(),
                    found: fitted.len(),
                });
            }
            if !fitted.iter().map(String::as_str).eq(features.iter().copied()) {
                return Err(Error::FeatureMismatch {
                    expected: fitted.clone(),
                    found: features.iter().map(|f| f.to_string()).collect(),
                });
            }
        }
        if features.len() != self.coefficients.len() {
            return Err(Error::FeatureCountMismatch {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }
        Ok(())
    }

    /// Prediction as a column expression. Callers must have run `check_features`.
    pub(crate) fn expr(&self, features: &[&str]) -> Expr {
        features
            .iter()
            .zip_eq(&self.coefficients)
            .fold(lit(0.0), |acc, (name, coef)| acc + col(name) * lit(*coef))
            + lit(self.intercept)
    }
}
