//! Telemetry record parsing.
//!
//! Reads headerless delimited telemetry files into a column-oriented table,
//! assigning the schema's field names positionally. The parser validates
//! column count and numeric coercion per cell; it performs no correction of
//! malformed rows.

use crate::constants::{MISSING_VALUE_TOKEN, RECORD_FIELD_COUNT};
use crate::error::{ConvertError, Result};
use crate::models::ColumnTable;
use crate::schema::{DATA_FIELDS, TIMESTAMP_FIELD};
use std::path::Path;
use tracing::debug;

/// Parse one telemetry file into a column table
///
/// Rows are preserved in source order. A wrong column count or a failed
/// numeric coercion fails the whole file with an error naming the row and
/// column; `NA` or empty cells become NaN for the data columns. The
/// timestamp column must be present and integral in every row, since a
/// sample without a time-axis position cannot be placed in the dataset.
pub fn parse_telemetry_file(path: &Path) -> Result<ColumnTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ConvertError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut timestamps: Vec<i64> = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); DATA_FIELDS.len()];

    for (idx, record) in reader.records().enumerate() {
        let row = idx + 1;
        let record = record.map_err(|source| ConvertError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        if record.len() != RECORD_FIELD_COUNT {
            return Err(ConvertError::format(
                path,
                format!(
                    "row {} has {} columns, expected {}",
                    row,
                    record.len(),
                    RECORD_FIELD_COUNT
                ),
            ));
        }

        let raw_timestamp = &record[0];
        if is_missing(raw_timestamp) {
            return Err(ConvertError::coercion(
                path,
                row,
                TIMESTAMP_FIELD,
                "timestamp is missing",
            ));
        }
        let timestamp: i64 = raw_timestamp.parse().map_err(|_| {
            ConvertError::coercion(
                path,
                row,
                TIMESTAMP_FIELD,
                format!("'{}' is not an integer epoch timestamp", raw_timestamp),
            )
        })?;
        timestamps.push(timestamp);

        for (col, field) in DATA_FIELDS.iter().enumerate() {
            let cell = &record[col + 1];
            let value = if is_missing(cell) {
                f64::NAN
            } else {
                cell.parse::<f64>().map_err(|_| {
                    ConvertError::coercion(
                        path,
                        row,
                        field.name,
                        format!("'{}' is not numeric", cell),
                    )
                })?
            };
            columns[col].push(value);
        }
    }

    debug!(
        "Parsed {} rows from {}",
        timestamps.len(),
        path.display()
    );

    Ok(ColumnTable {
        path: path.to_path_buf(),
        timestamps,
        columns,
    })
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == MISSING_VALUE_TOKEN
}
