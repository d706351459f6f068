use crate::{model::LinearModel, role::RoleConfig, stats::SeasonStatsDf, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Where a run reads its inputs and writes its leaderboards.
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Paths {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(data_dir: P, out_dir: Q) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Reads and writes in the same directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(&dir, &dir)
    }

    pub fn stats(&self, config: &RoleConfig) -> PathBuf {
        self.data_dir.join(config.stats_file)
    }

    pub fn model(&self, config: &RoleConfig) -> PathBuf {
        self.data_dir.join(config.model_file)
    }

    pub fn output(&self, config: &RoleConfig) -> PathBuf {
        self.out_dir.join(config.output_file)
    }
}

pub fn load_model(config: &RoleConfig, paths: &Paths) -> Result<LinearModel> {
    LinearModel::load(paths.model(config))
}

/// Cleans one role's season stats, predicts with `model` and writes the
/// sorted leaderboard. Returns the leaderboard as written.
pub fn run_role(config: &RoleConfig, model: &LinearModel, paths: &Paths) -> Result<DataFrame> {
    log::trace!("pipeline::run_role {}", config.role);
    let stats = SeasonStatsDf::load(paths.stats(config), config)?;
    let predicted = stats.predict(model, config.features)?;
    let mut board = predicted.leaderboard(config.display_columns, config.order)?;

    let output = paths.output(config);
    crate::write_csv(&mut board, &output)?;
    log::info!(
        "{}: wrote {} rows to {}",
        config.role,
        board.height(),
        output.display()
    );
    Ok(board)
}
