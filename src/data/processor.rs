//! Data Processor Module
//! Derives the cumulative reward column and picks the plotted series.

use super::loader::is_numeric;
use crate::charts::{ChartData, LineSeries};
use polars::prelude::*;
use thiserror::Error;

pub const REWARD_COL: &str = "reward";
pub const CUMULATIVE_REWARD_COL: &str = "cumulative reward";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Column '{name}' is not numeric ({dtype})")]
    NonNumericColumn { name: String, dtype: DataType },
    #[error("Column '{0}' already exists")]
    DuplicateColumn(String),
    #[error("Column index {index} out of range for a table with {width} columns")]
    ColumnIndexOutOfRange { index: usize, width: usize },
}

/// How the plotted columns are located in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColumnSchema {
    /// Columns 0, 1 and 2, whatever their names
    ByPosition,
    /// Column 0 against "reward" and the derived "cumulative reward"
    #[default]
    ByName,
}

impl ColumnSchema {
    /// Whether the cumulative reward column has to be derived first.
    pub fn needs_cumulative_reward(self) -> bool {
        matches!(self, ColumnSchema::ByName)
    }
}

/// Handles table transformation and series selection.
pub struct DataProcessor;

impl DataProcessor {
    /// Append "cumulative reward", the running total of "reward".
    ///
    /// A null or NaN reward leaves a null at that row and the total carries on.
    pub fn derive_cumulative_reward(df: &mut DataFrame) -> Result<(), ProcessorError> {
        if df.column(CUMULATIVE_REWARD_COL).is_ok() {
            return Err(ProcessorError::DuplicateColumn(
                CUMULATIVE_REWARD_COL.to_string(),
            ));
        }

        let reward = df
            .column(REWARD_COL)
            .map_err(|_| ProcessorError::MissingColumn(REWARD_COL.to_string()))?;

        // Header-only files infer every column as a string
        if !is_numeric(reward.dtype()) && df.height() > 0 {
            return Err(ProcessorError::NonNumericColumn {
                name: REWARD_COL.to_string(),
                dtype: reward.dtype().clone(),
            });
        }

        let reward_f64 = reward.cast(&DataType::Float64)?;
        let cumulative = prefix_sum(reward_f64.f64()?.into_iter());

        df.with_column(Column::new(CUMULATIVE_REWARD_COL.into(), cumulative))?;
        tracing::debug!("Derived '{}' over {} rows", CUMULATIVE_REWARD_COL, df.height());

        Ok(())
    }

    /// Resolve x, primary and secondary series for the chart.
    pub fn select_series(
        df: &DataFrame,
        schema: ColumnSchema,
        title: &str,
    ) -> Result<ChartData, ProcessorError> {
        let x_col = Self::column_at(df, 0)?;
        let (primary_col, secondary_col) = match schema {
            ColumnSchema::ByPosition => (Self::column_at(df, 1)?, Self::column_at(df, 2)?),
            ColumnSchema::ByName => (
                Self::column_named(df, REWARD_COL)?,
                Self::column_named(df, CUMULATIVE_REWARD_COL)?,
            ),
        };

        let x = Self::x_values(x_col)?;
        let primary = Self::series_of(primary_col)?;
        let secondary = Self::series_of(secondary_col)?;

        Ok(ChartData {
            title: title.to_string(),
            x_label: x_col.name().to_string(),
            x,
            primary,
            secondary,
        })
    }

    fn column_at(df: &DataFrame, index: usize) -> Result<&Column, ProcessorError> {
        df.get_columns()
            .get(index)
            .ok_or(ProcessorError::ColumnIndexOutOfRange {
                index,
                width: df.width(),
            })
    }

    fn column_named<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ProcessorError> {
        df.column(name)
            .map_err(|_| ProcessorError::MissingColumn(name.to_string()))
    }

    /// X values, or row positions when the column is not numeric.
    ///
    /// Nulls in a numeric column stay missing so the row is not drawn.
    fn x_values(col: &Column) -> Result<Vec<Option<f64>>, ProcessorError> {
        if !is_numeric(col.dtype()) {
            return Ok((0..col.len()).map(|i| Some(i as f64)).collect());
        }

        let as_f64 = col.cast(&DataType::Float64)?;
        Ok(as_f64.f64()?.into_iter().collect())
    }

    fn series_of(col: &Column) -> Result<LineSeries, ProcessorError> {
        let as_f64 = col.cast(&DataType::Float64)?;
        Ok(LineSeries {
            name: col.name().to_string(),
            values: as_f64.f64()?.into_iter().collect(),
        })
    }
}

/// Running total that skips over missing values. NaN counts as missing.
fn prefix_sum(values: impl Iterator<Item = Option<f64>>) -> Vec<Option<f64>> {
    let mut total = 0.0;
    values
        .map(|v| {
            v.filter(|v| !v.is_nan()).map(|v| {
                total += v;
                total
            })
        })
        .collect()
}
