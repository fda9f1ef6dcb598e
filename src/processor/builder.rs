//! Dataset assembly from parsed column tables.
//!
//! Builds the in-memory labeled dataset: the time coordinate taken verbatim
//! from the timestamp column plus the ten data variables, stored per the
//! configured numeric policy.

use crate::constants::FILL_I32;
use crate::error::{ConvertError, Result};
use crate::models::{Attributes, ColumnData, ColumnTable, Dataset, Variable};
use crate::schema::{DATA_FIELDS, NumericPolicy, Storage};

/// Assemble a dataset from a parsed table
///
/// The time coordinate preserves source order and duplicates. Under the
/// mixed policy, integer-annotated fields are rounded to i32 and missing
/// samples become the fill value; every other column stays f64 with NaN
/// marking missing samples. Row alignment is a structural invariant and is
/// re-checked here.
pub fn build_dataset(table: ColumnTable, policy: NumericPolicy) -> Result<Dataset> {
    if table.columns.len() != DATA_FIELDS.len() {
        return Err(ConvertError::Structure {
            path: table.path.clone(),
            reason: format!(
                "expected {} data columns, found {}",
                DATA_FIELDS.len(),
                table.columns.len()
            ),
        });
    }

    let rows = table.timestamps.len();
    for (field, column) in DATA_FIELDS.iter().zip(&table.columns) {
        if column.len() != rows {
            return Err(ConvertError::Structure {
                path: table.path.clone(),
                reason: format!(
                    "column '{}' has {} values for {} time steps",
                    field.name,
                    column.len(),
                    rows
                ),
            });
        }
    }

    let variables = DATA_FIELDS
        .iter()
        .zip(table.columns)
        .map(|(field, values)| {
            let data = match field.storage(policy) {
                Storage::Float64 => ColumnData::Float(values),
                Storage::Int32 => ColumnData::Int(
                    values
                        .into_iter()
                        .map(|v| if v.is_nan() { FILL_I32 } else { v.round() as i32 })
                        .collect(),
                ),
            };
            Variable::new(field.name, data)
        })
        .collect();

    Ok(Dataset {
        time: table.timestamps,
        time_attrs: Attributes::new(),
        variables,
        attrs: Attributes::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn single_row_table() -> ColumnTable {
        ColumnTable {
            path: PathBuf::from("buoy.csv"),
            timestamps: vec![1_700_000_000],
            columns: vec![
                vec![34.5],   // latitude
                vec![-120.2], // longitude
                vec![5.1],    // true_wind_speed
                vec![180.0],  // true_wind_direction
                vec![18.2],   // air_temperature
                vec![60.0],   // air_humidity
                vec![12.0],   // dew_point
                vec![1013.2], // immediate_air_pressure
                vec![0.1],    // average_air_pressure_for_last_minute
                vec![1014.0], // sea_level_air_pressure
            ],
        }
    }

    #[test]
    fn test_all_float_policy_keeps_every_variable_f64() {
        let dataset = build_dataset(single_row_table(), NumericPolicy::AllFloat).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.variables.len(), 10);
        for variable in &dataset.variables {
            assert!(matches!(variable.data, ColumnData::Float(_)));
            assert_eq!(variable.data.len(), 1);
        }
    }

    #[test]
    fn test_mixed_policy_casts_annotated_fields() {
        let dataset = build_dataset(single_row_table(), NumericPolicy::MixedInteger).unwrap();

        assert_eq!(
            dataset.variable("true_wind_direction").unwrap().data,
            ColumnData::Int(vec![180])
        );
        assert_eq!(
            dataset.variable("air_humidity").unwrap().data,
            ColumnData::Int(vec![60])
        );
        // The remaining eight stay floating point
        let float_count = dataset
            .variables
            .iter()
            .filter(|v| matches!(v.data, ColumnData::Float(_)))
            .count();
        assert_eq!(float_count, 8);
    }

    #[test]
    fn test_mixed_policy_fills_missing_integers() {
        let mut table = single_row_table();
        table.columns[5][0] = f64::NAN; // air_humidity

        let dataset = build_dataset(table, NumericPolicy::MixedInteger).unwrap();
        assert_eq!(
            dataset.variable("air_humidity").unwrap().data,
            ColumnData::Int(vec![FILL_I32])
        );
    }

    #[test]
    fn test_misaligned_column_is_structural_error() {
        let mut table = single_row_table();
        table.columns[3].push(90.0);

        let err = build_dataset(table, NumericPolicy::AllFloat).unwrap_err();
        assert!(matches!(err, ConvertError::Structure { .. }));
    }

    #[test]
    fn test_empty_table_builds_empty_dataset() {
        let table = ColumnTable {
            path: PathBuf::from("empty.csv"),
            timestamps: vec![],
            columns: vec![Vec::new(); 10],
        };

        let dataset = build_dataset(table, NumericPolicy::AllFloat).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.variables.len(), 10);
    }
}
