//! Tabular data handed to an external chart renderer.
//!
//! This crate loads and prepares tables; drawing them is left to whatever
//! implements [`ChartRenderer`].

use crate::error::{Result, SeqError};
use ndarray::Array2;
use polars::lazy::dsl::*;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fs::File;
use std::io::Cursor;

/// Replacement for adjusted p-values of exactly zero before taking the log.
const PADJ_FLOOR: f64 = 1e-300;

/// A chart request understood by a [`ChartRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Row/column clustered heatmap of every numeric column, rows labelled by `index_column`
    ClusteredHeatmap { index_column: String },
    /// log2FoldChange against -log10(Padj), coloured by `significance`
    Volcano { lfc_threshold: f64 },
    Scatter { x: String, y: String, hue: String },
    /// Pearson correlation between `features`
    CorrelationHeatmap { features: Vec<String> },
    Density { x: String, hue: String },
}

impl ChartSpec {
    /// Columns the input table must contain for this chart.
    pub fn required_columns(&self) -> Vec<&str> {
        match self {
            ChartSpec::ClusteredHeatmap { index_column } => vec![index_column.as_str()],
            ChartSpec::Volcano { .. } => vec!["log2FoldChange", "Padj", "significance"],
            ChartSpec::Scatter { x, y, hue } => vec![x.as_str(), y.as_str(), hue.as_str()],
            ChartSpec::CorrelationHeatmap { features } => {
                features.iter().map(String::as_str).collect()
            }
            ChartSpec::Density { x, hue } => vec![x.as_str(), hue.as_str()],
        }
    }

    /// Checks that `table` has every column in [`ChartSpec::required_columns`].
    pub fn validate(&self, table: &DataFrame) -> Result<()> {
        match self
            .required_columns()
            .into_iter()
            .find(|name| table.column(name).is_err())
        {
            Some(missing) => Err(SeqError::missing_column(missing)),
            None => Ok(()),
        }
    }
}

/// Draws a prepared table. Implemented outside this crate.
pub trait ChartRenderer {
    type Output;

    fn render(&self, table: &DataFrame, spec: &ChartSpec) -> Result<Self::Output>;
}

/// Reads a CSV file with a header row into a DataFrame.
///
/// # Errors
/// * Returns `SeqError::Io` if the file cannot be opened
/// * Returns `SeqError::DataError` if the CSV cannot be parsed
pub fn load_table(path: &str) -> Result<DataFrame> {
    let file = File::open(path)?;
    CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| SeqError::DataError(e.to_string()))
}

/// Parses CSV text with a header row into a DataFrame.
pub fn load_table_from_str(csv: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes().to_vec()))
        .finish()
        .map_err(|e| SeqError::DataError(e.to_string()))
}

/// Values of `name` as floats, nulls kept as `None`. Text that does not parse is an error.
fn numeric_column(table: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = table
        .column(name)
        .map_err(|_| SeqError::missing_column(name))?
        .strict_cast(&DataType::Float64)
        .map_err(|e| SeqError::DataError(e.to_string()))?;
    let values = column
        .f64()
        .map_err(|e| SeqError::DataError(e.to_string()))?
        .into_iter()
        .collect();
    Ok(values)
}

/// Pearson correlation matrix of `features`, in the order given.
///
/// Each entry uses only the rows where both columns are non-null. A constant
/// column, or a pair with fewer than two complete rows, yields NaN.
pub fn correlation_matrix(table: &DataFrame, features: &[String]) -> Result<Array2<f64>> {
    let columns = features
        .iter()
        .map(|name| numeric_column(table, name))
        .collect::<Result<Vec<_>>>()?;
    let n = columns.len();

    Ok(Array2::from_shape_fn((n, n), |(i, j)| {
        pearson(&columns[i], &columns[j])
    }))
}

fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();

    let covariance = xs.iter().covariance(ys.iter());
    covariance / (xs.iter().std_dev() * ys.iter().std_dev())
}

/// Applies the per-chart preparation the renderer expects.
///
/// * `ClusteredHeatmap` - every column except `index_column` cast to Float64; text is an error
/// * `Volcano` - zero `Padj` values floored to 1e-300, plus a `neg_log10_padj` column
/// * `CorrelationHeatmap` - a square table: `feature` then one column per feature
/// * `Scatter`, `Density` - only the needed columns
///
/// # Errors
/// * Returns `SeqError::MissingColumn` if the table lacks a required column
/// * Returns `SeqError::DataError` for casting or DataFrame failures
pub fn prepare(table: &DataFrame, spec: &ChartSpec) -> Result<DataFrame> {
    spec.validate(table)?;

    match spec {
        ChartSpec::ClusteredHeatmap { index_column } => {
            let columns = table
                .get_columns()
                .iter()
                .map(|column| {
                    if column.name().as_str() == index_column.as_str() {
                        Ok(column.clone())
                    } else {
                        column.strict_cast(&DataType::Float64)
                    }
                })
                .collect::<PolarsResult<Vec<_>>>()
                .map_err(|e| SeqError::DataError(e.to_string()))?;
            DataFrame::new(columns).map_err(|e| SeqError::DataError(e.to_string()))
        }
        ChartSpec::Volcano { .. } => table
            .clone()
            .lazy()
            .with_column(col("Padj").cast(DataType::Float64))
            .with_column(
                when(col("Padj").eq(lit(0.0)))
                    .then(lit(PADJ_FLOOR))
                    .otherwise(col("Padj"))
                    .alias("Padj"),
            )
            .with_column((-col("Padj").log(10.0)).alias("neg_log10_padj"))
            .collect()
            .map_err(|e| SeqError::DataError(e.to_string())),
        ChartSpec::CorrelationHeatmap { features } => {
            let matrix = correlation_matrix(table, features)?;
            let mut columns = vec![Column::new("feature".into(), features.clone())];
            for (j, name) in features.iter().enumerate() {
                columns.push(Column::new(name.as_str().into(), matrix.column(j).to_vec()));
            }
            DataFrame::new(columns).map_err(|e| SeqError::DataError(e.to_string()))
        }
        ChartSpec::Scatter { .. } | ChartSpec::Density { .. } => table
            .select(spec.required_columns())
            .map_err(|e| SeqError::DataError(e.to_string())),
    }
}

/// Validates and prepares `table`, then hands it to `renderer`.
pub fn render_chart<R: ChartRenderer>(
    renderer: &R,
    table: &DataFrame,
    spec: &ChartSpec,
) -> Result<R::Output> {
    let prepared = prepare(table, spec)?;
    renderer.render(&prepared, spec)
}
