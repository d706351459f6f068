use parse_display::{Display, FromStr};
use polars::prelude::*;
use std::path::Path;

mod error;
pub mod leaderboard;
pub mod model;
pub mod pipeline;
pub mod role;
pub mod stats;
pub use error::Error;
pub use model::LinearModel;
pub use role::{RoleConfig, SortOrder};

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, FromStr)]
#[display(style = "lowercase")]
pub enum Role {
    Starter,
    Batter,
    Reliever,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Starter, Role::Batter, Role::Reliever];

    pub fn config(self) -> RoleConfig {
        match self {
            Role::Starter => RoleConfig::starter(),
            Role::Batter => RoleConfig::batter(),
            Role::Reliever => RoleConfig::reliever(),
        }
    }
}

/// Reads a headered CSV, inferring column types from every row rather than a sample.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = std::fs::File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(file)
        .finish()?;
    Ok(df)
}

pub fn write_csv<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}
