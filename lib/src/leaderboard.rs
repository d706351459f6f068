use crate::{
    role::SortOrder,
    stats::{INDEX_COLUMN, PREDICTION_COLUMN},
    Result,
};
use derive_deref::Deref;
use polars::prelude::*;

/// Season statistics with a `preds` column appended.
#[derive(Clone, Deref)]
pub struct PredictedDf(DataFrame);

impl PredictedDf {
    pub(crate) fn new(df: DataFrame) -> Self {
        Self(df)
    }

    /// Selects the row index and `columns`, ranked by prediction.
    ///
    /// The sort is stable, so tied predictions keep file order. Rows without a
    /// prediction go last in either direction.
    pub fn leaderboard(self, columns: &[&str], order: SortOrder) -> Result<DataFrame> {
        let selection: Vec<Expr> = std::iter::once(INDEX_COLUMN)
            .chain(columns.iter().copied())
            .map(col)
            .collect();

        let df = self
            .0
            .lazy()
            .select(selection)
            .sort(
                [PREDICTION_COLUMN],
                SortMultipleOptions::default()
                    .with_order_descending(order.is_descending())
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .collect()?;
        log::debug!("{} rows on the leaderboard", df.height());
        Ok(df)
    }
}
