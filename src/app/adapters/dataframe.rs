//! Polars materialization of parsed tables
//!
//! Text columns become `String`, integer columns `Int32` and real columns
//! `Float64`; missing values become nulls.

use crate::Result;
use crate::app::models::{Column as TableColumn, ColumnValues, Table};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

fn to_series(column: &TableColumn) -> Series {
    let name = PlSmallStr::from(column.name());
    match column.values() {
        ColumnValues::Text(values) => {
            let values: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
            Series::new(name, values)
        }
        ColumnValues::Integer(values) => Series::new(name, values.as_slice()),
        ColumnValues::Real(values) => Series::new(name, values.as_slice()),
    }
}

impl Table {
    /// Materialize this table as a Polars `DataFrame`
    ///
    /// Fails if two columns share a name, which can happen when an
    /// attribute tag is named like a selected fixed column.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns: Vec<Column> = self
            .columns()
            .iter()
            .map(|c| to_series(c).into_column())
            .collect();
        let df = DataFrame::new(columns)?;
        debug!("Built DataFrame with shape {:?}", df.shape());
        Ok(df)
    }
}

/// Write a table to a Snappy-compressed Parquet file
pub fn write_parquet(table: &Table, output_path: &Path) -> Result<u64> {
    let mut df = table.to_dataframe()?;
    let file = std::fs::File::create(output_path).map_err(|e| {
        crate::Error::io(format!("Failed to create {}", output_path.display()), e)
    })?;

    let size = ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)?;

    info!(
        "Wrote {} rows to {} ({} bytes)",
        table.nrow(),
        output_path.display(),
        size
    );
    Ok(size)
}
