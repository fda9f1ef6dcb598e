//! NetCDF artifact writing.
//!
//! Persists a fully annotated dataset to disk. The file is written to a
//! staging path and renamed into place once complete, so a failed write
//! never leaves a half-written artifact that could be mistaken for a
//! finished one.

use crate::constants::{FILL_I32, STAGING_SUFFIX, TIME_VARIABLE};
use crate::error::{ConvertError, Result};
use crate::models::{AttrValue, Attributes, ColumnData, Dataset};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the dataset to `output_path`
///
/// On any failure the staging file is removed and a persistence error
/// naming the artifact path is returned; the artifact is either fully
/// written or absent.
pub fn write_dataset(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let staging = staging_path(output_path);

    let written = write_netcdf(dataset, &staging).map_err(|e| match e {
        ConvertError::NetCdf(inner) => {
            ConvertError::persistence(output_path, inner.to_string())
        }
        other => other,
    });

    if let Err(e) = written {
        let _ = std::fs::remove_file(&staging);
        return Err(e);
    }

    std::fs::rename(&staging, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&staging);
        ConvertError::persistence(output_path, format!("cannot finalize artifact: {}", e))
    })?;

    debug!("Wrote artifact {}", output_path.display());
    Ok(())
}

fn staging_path(output_path: &Path) -> PathBuf {
    let mut os = output_path.as_os_str().to_os_string();
    os.push(STAGING_SUFFIX);
    PathBuf::from(os)
}

fn write_netcdf(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    file.add_unlimited_dimension(TIME_VARIABLE)?;

    {
        let mut time_var = file.add_variable::<i64>(TIME_VARIABLE, &[TIME_VARIABLE])?;
        put_attributes(&mut time_var, &dataset.time_attrs)?;
        if !dataset.time.is_empty() {
            time_var.put_values(&dataset.time, (&[0usize], &[dataset.time.len()]))?;
        }
    }

    for variable in &dataset.variables {
        match &variable.data {
            ColumnData::Float(values) => {
                let mut var = file.add_variable::<f64>(&variable.name, &[TIME_VARIABLE])?;
                put_attributes(&mut var, &variable.attrs)?;
                if !values.is_empty() {
                    var.put_values(values, (&[0usize], &[values.len()]))?;
                }
            }
            ColumnData::Int(values) => {
                let mut var = file.add_variable::<i32>(&variable.name, &[TIME_VARIABLE])?;
                var.set_fill_value(FILL_I32)?;
                put_attributes(&mut var, &variable.attrs)?;
                if !values.is_empty() {
                    var.put_values(values, (&[0usize], &[values.len()]))?;
                }
            }
        }
    }

    for (name, value) in dataset.attrs.iter() {
        match value {
            AttrValue::Text(text) => file.add_attribute(name, text.as_str())?,
            AttrValue::Float(v) => file.add_attribute(name, *v)?,
            AttrValue::Int(v) => file.add_attribute(name, *v)?,
        };
    }

    Ok(())
}

fn put_attributes(variable: &mut netcdf::VariableMut, attrs: &Attributes) -> Result<()> {
    for (name, value) in attrs.iter() {
        match value {
            AttrValue::Text(text) => variable.put_attribute(name, text.as_str())?,
            AttrValue::Float(v) => variable.put_attribute(name, *v)?,
            AttrValue::Int(v) => variable.put_attribute(name, *v)?,
        };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variable;
    use tempfile::TempDir;

    fn small_dataset() -> Dataset {
        let mut time_attrs = Attributes::new();
        time_attrs.set("units", "seconds since 1970-01-01 00:00:00");

        let mut lat = Variable::new("latitude", ColumnData::Float(vec![34.5, 34.6]));
        lat.attrs.set("units", "decimal_degrees");

        let mut humidity = Variable::new("air_humidity", ColumnData::Int(vec![60, FILL_I32]));
        humidity.attrs.set("units", "percent");

        let mut attrs = Attributes::new();
        attrs.set("title", "buoy_alpha");

        Dataset {
            time: vec![1_700_000_000, 1_700_000_060],
            time_attrs,
            variables: vec![lat, humidity],
            attrs,
        }
    }

    #[test]
    fn test_written_artifact_round_trips() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("buoy_alpha.nc");

        write_dataset(&small_dataset(), &output).unwrap();
        assert!(output.exists());
        assert!(!staging_path(&output).exists());

        let file = netcdf::open(&output).unwrap();
        let time: Vec<i64> = file
            .variable("time")
            .unwrap()
            .get_values(..)
            .unwrap();
        assert_eq!(time, vec![1_700_000_000, 1_700_000_060]);

        let lat: Vec<f64> = file
            .variable("latitude")
            .unwrap()
            .get_values(..)
            .unwrap();
        assert_eq!(lat, vec![34.5, 34.6]);

        let humidity: Vec<i32> = file
            .variable("air_humidity")
            .unwrap()
            .get_values(..)
            .unwrap();
        assert_eq!(humidity, vec![60, FILL_I32]);
    }

    #[test]
    fn test_empty_dataset_is_writable() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("empty.nc");

        let dataset = Dataset {
            time: vec![],
            time_attrs: Attributes::new(),
            variables: vec![Variable::new("latitude", ColumnData::Float(vec![]))],
            attrs: Attributes::new(),
        };

        write_dataset(&dataset, &output).unwrap();

        let file = netcdf::open(&output).unwrap();
        assert_eq!(file.dimension("time").unwrap().len(), 0);
        let time: Vec<i64> = file.variable("time").unwrap().get_values(..).unwrap();
        assert!(time.is_empty());
    }

    #[test]
    fn test_failed_write_leaves_no_artifact() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("no_such_subdir").join("buoy.nc");

        let err = write_dataset(&small_dataset(), &output).unwrap_err();
        assert!(matches!(err, ConvertError::Persistence { .. }));
        assert!(!output.exists());
        assert!(!staging_path(&output).exists());
    }
}
