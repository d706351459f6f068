use crate::Role;

/// Columns cast to f64 for both pitching roles.
pub static PITCHING_NUMERIC: &[&str] = &[
    "Age", "ERA_current_year", "K/9", "BB/9", "K/BB", "H/9", "HR/9", "AVG", "WHIP", "BABIP",
    "LOB%", "GB/FB", "LD%", "GB%", "FB%", "IFFB%", "HR/FB", "IFH%", "BUH%", "O-Swing%",
    "Z-Swing%", "Swing%", "O-Contact%", "Z-Contact%", "Contact%", "Zone%", "F-Strike%",
    "SwStr%", "K%", "BB%", "SIERA", "RS/9", "Pull%", "Cent%", "Oppo%", "Soft%", "Med%",
    "Hard%", "xFIP", "playerid",
];

/// Inputs of the ERA models, in the order they were fitted.
pub static PITCHING_FEATURES: &[&str] = &[
    "Age", "ERA_current_year", "K/9", "BB/9", "K/BB", "H/9", "HR/9", "AVG", "WHIP", "BABIP",
    "LOB%", "GB/FB", "LD%", "GB%", "FB%", "IFFB%", "HR/FB", "O-Swing%", "Z-Swing%", "Swing%",
    "O-Contact%", "Z-Contact%", "Contact%", "Zone%", "F-Strike%", "SwStr%", "K%", "BB%",
    "Pull%", "Cent%", "Oppo%", "Soft%", "Med%", "Hard%",
];

pub static PITCHING_DISPLAY: &[&str] = &["Name", "ERA_current_year", "SIERA", "preds", "IP"];

pub static BATTING_NUMERIC: &[&str] = &[
    "Age", "AVG", "BB%", "K%", "BB/K", "OBP", "SLG", "OPS", "ISO", "BABIP", "GB/FB", "LD%",
    "GB%", "FB%", "IFFB%", "HR/FB", "IFH%", "BUH%", "wOBA_current_year", "O-Swing%",
    "Z-Swing%", "Swing%", "O-Contact%", "Z-Contact%", "Contact%", "Zone%", "F-Strike%",
    "SwStr%", "Pull%", "Cent%", "Oppo%", "Soft%", "Med%", "Hard%",
];

/// Inputs of the wOBA model, in the order it was fitted.
pub static BATTING_FEATURES: &[&str] = &[
    "AVG", "BB%", "K%", "BB/K", "OBP", "SLG", "ISO", "BABIP", "GB/FB", "LD%", "GB%", "FB%",
    "IFFB%", "HR/FB", "IFH%", "BUH%", "wOBA_current_year", "O-Swing%", "Z-Swing%", "Swing%",
    "O-Contact%", "Z-Contact%", "Contact%", "Zone%", "F-Strike%", "SwStr%", "Pull%", "Cent%",
    "Oppo%", "Soft%", "Med%", "Hard%",
];

pub static BATTING_DISPLAY: &[&str] = &["Name", "wOBA_current_year", "preds", "PA"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lower is better (ERA)
    Ascending,
    /// Higher is better (wOBA)
    Descending,
}

impl SortOrder {
    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }
}

/// Everything that distinguishes one role's pipeline from another's.
#[derive(Debug, Clone)]
pub struct RoleConfig {
    pub role: Role,
    /// Raw metric column, renamed to `<metric>_current_year` on load
    pub metric: &'static str,
    pub numeric_columns: &'static [&'static str],
    pub features: &'static [&'static str],
    pub display_columns: &'static [&'static str],
    pub order: SortOrder,
    /// Drop rows with any missing value after casting. Only the batter role does this.
    pub drop_missing: bool,

    pub stats_file: &'static str,
    pub model_file: &'static str,
    pub output_file: &'static str,
}

impl RoleConfig {
    pub fn starter() -> Self {
        Self {
            role: Role::Starter,
            metric: "ERA",
            numeric_columns: PITCHING_NUMERIC,
            features: PITCHING_FEATURES,
            display_columns: PITCHING_DISPLAY,
            order: SortOrder::Ascending,
            drop_missing: false,
            stats_file: "pitch2019.csv",
            model_file: "2020_era_model.json",
            output_file: "pitching_leaders.csv",
        }
    }

    pub fn reliever() -> Self {
        Self {
            role: Role::Reliever,
            stats_file: "reliefpitch2019.csv",
            model_file: "2020_reliever_era_model.json",
            output_file: "relief_pitching_leaders.csv",
            ..Self::starter()
        }
    }

    pub fn batter() -> Self {
        Self {
            role: Role::Batter,
            metric: "wOBA",
            numeric_columns: BATTING_NUMERIC,
            features: BATTING_FEATURES,
            display_columns: BATTING_DISPLAY,
            order: SortOrder::Descending,
            drop_missing: true,
            stats_file: "batting2019.csv",
            model_file: "2020_woba_model.json",
            output_file: "batting_leaders.csv",
        }
    }

    pub fn metric_column(&self) -> String {
        format!("{}_current_year", self.metric)
    }
}
