//! Coverage extent computation.
//!
//! Derives the dataset-level geospatial and temporal bounds from the
//! already-built variables with missing-aware reductions. A variable with
//! no valid samples yields NaN-valued extent attributes; an empty or
//! all-missing dataset is still writable.

use crate::constants::attrs;
use crate::error::{ConvertError, Result};
use crate::models::{AttrValue, ColumnData, Dataset};

/// Minimum over a slice, ignoring NaN entries; NaN when none are valid
pub fn nan_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::min)
}

/// Maximum over a slice, ignoring NaN entries; NaN when none are valid
pub fn nan_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::max)
}

/// Attach the six coverage attributes to the dataset
///
/// Runs read-only over the built variables; must execute after the builder
/// and before the dataset is considered attribute-complete.
pub fn apply_extents(dataset: &mut Dataset) -> Result<()> {
    let latitude = float_values(dataset, "latitude")?;
    let longitude = float_values(dataset, "longitude")?;

    let lat_min = nan_min(&latitude);
    let lat_max = nan_max(&latitude);
    let lon_min = nan_min(&longitude);
    let lon_max = nan_max(&longitude);

    let time_bounds = match (dataset.time.iter().min(), dataset.time.iter().max()) {
        (Some(&start), Some(&end)) => Some((start, end)),
        _ => None,
    };

    dataset.attrs.set(attrs::GEOSPATIAL_LAT_MIN, lat_min);
    dataset.attrs.set(attrs::GEOSPATIAL_LAT_MAX, lat_max);
    dataset.attrs.set(attrs::GEOSPATIAL_LON_MIN, lon_min);
    dataset.attrs.set(attrs::GEOSPATIAL_LON_MAX, lon_max);

    match time_bounds {
        Some((start, end)) => {
            dataset.attrs.set(attrs::TIME_COVERAGE_START, start);
            dataset.attrs.set(attrs::TIME_COVERAGE_END, end);
        }
        // No samples at all: the temporal extent is undefined, mirrored as NaN
        None => {
            dataset
                .attrs
                .set(attrs::TIME_COVERAGE_START, AttrValue::Float(f64::NAN));
            dataset
                .attrs
                .set(attrs::TIME_COVERAGE_END, AttrValue::Float(f64::NAN));
        }
    }

    Ok(())
}

fn float_values(dataset: &Dataset, name: &str) -> Result<Vec<f64>> {
    let variable = dataset
        .variable(name)
        .ok_or_else(|| ConvertError::lookup(name))?;
    match &variable.data {
        ColumnData::Float(values) => Ok(values.clone()),
        ColumnData::Int(values) => Ok(values.iter().map(|&v| f64::from(v)).collect()),
    }
}
