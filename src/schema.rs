//! Observation schema catalog and typing policies.
//!
//! Defines the fixed 11-field layout of marine weather-station telemetry
//! records together with the storage type, unit strings, and CF vocabulary
//! for every variable. The catalog is the single source of truth for the
//! parser, the dataset builder, and the attribute annotator.

use crate::constants::TIME_UNITS;
use crate::error::{ConvertError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Numeric storage policy for the produced dataset
///
/// `AllFloat` keeps every data variable as 64-bit floating point.
/// `MixedInteger` stores the fields annotated as integer-valued
/// (wind direction, humidity) as 32-bit integers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NumericPolicy {
    #[default]
    AllFloat,
    MixedInteger,
}

/// Unit-string convention applied to every variable of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UnitConvention {
    /// Plain spellings: `decimal_degrees`, `m/s`, `degrees_celsius`
    #[default]
    Plain,
    /// CF spellings: `degree_north`, `m s-1`, `degree_Celsius`
    Cf,
}

/// Metadata richness attached by the annotator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MetadataProfile {
    /// Per-variable units plus dataset title and feature type
    #[default]
    Units,
    /// Units profile plus standard names, long names, and provenance
    Cf,
}

/// Physical storage type of a variable in the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Float64,
    Int32,
}

/// Catalog entry for one telemetry data field
#[derive(Debug, Clone, Copy)]
pub struct ObsField {
    /// Target variable name (also the positional column name)
    pub name: &'static str,
    /// Stored as a 32-bit integer under `NumericPolicy::MixedInteger`
    pub mixed_integer: bool,
    unit_plain: &'static str,
    unit_cf: &'static str,
    /// CF controlled-vocabulary name
    pub standard_name: &'static str,
}

impl ObsField {
    /// Unit string under the given convention
    pub fn unit(&self, convention: UnitConvention) -> &'static str {
        match convention {
            UnitConvention::Plain => self.unit_plain,
            UnitConvention::Cf => self.unit_cf,
        }
    }

    /// Storage type under the given numeric policy
    pub fn storage(&self, policy: NumericPolicy) -> Storage {
        match policy {
            NumericPolicy::MixedInteger if self.mixed_integer => Storage::Int32,
            _ => Storage::Float64,
        }
    }

    /// Free-text label; the variable name doubles as the long name
    pub fn long_name(&self) -> &'static str {
        self.name
    }
}

/// Positional name of the leading time column
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// The ten data fields following the timestamp, in column order
pub const DATA_FIELDS: [ObsField; 10] = [
    ObsField {
        name: "latitude",
        mixed_integer: false,
        unit_plain: "decimal_degrees",
        unit_cf: "degree_north",
        standard_name: "latitude",
    },
    ObsField {
        name: "longitude",
        mixed_integer: false,
        unit_plain: "decimal_degrees",
        unit_cf: "degree_east",
        standard_name: "longitude",
    },
    ObsField {
        name: "true_wind_speed",
        mixed_integer: false,
        unit_plain: "m/s",
        unit_cf: "m s-1",
        standard_name: "wind_speed",
    },
    ObsField {
        name: "true_wind_direction",
        mixed_integer: true,
        unit_plain: "degrees",
        unit_cf: "degrees",
        standard_name: "wind_from_direction",
    },
    ObsField {
        name: "air_temperature",
        mixed_integer: false,
        unit_plain: "degrees_celsius",
        unit_cf: "degree_Celsius",
        standard_name: "air_temperature",
    },
    ObsField {
        name: "air_humidity",
        mixed_integer: true,
        unit_plain: "percent",
        unit_cf: "percent",
        standard_name: "humidity_mixing_ratio",
    },
    ObsField {
        name: "dew_point",
        mixed_integer: false,
        unit_plain: "degrees_celsius",
        unit_cf: "degree_Celsius",
        standard_name: "dew_point_temperature",
    },
    ObsField {
        name: "immediate_air_pressure",
        mixed_integer: false,
        unit_plain: "hPa",
        unit_cf: "hPa",
        standard_name: "air_pressure",
    },
    ObsField {
        name: "average_air_pressure_for_last_minute",
        mixed_integer: false,
        unit_plain: "hPa",
        unit_cf: "hPa s-1",
        standard_name: "tendency_of_air_pressure",
    },
    ObsField {
        name: "sea_level_air_pressure",
        mixed_integer: false,
        unit_plain: "hPa",
        unit_cf: "hPa",
        standard_name: "air_pressure_at_mean_sea_level",
    },
];

/// Look up a data field by variable name
///
/// A miss is a programming defect for the fixed schema, surfaced as a
/// `Lookup` error rather than silently skipped.
pub fn data_field(name: &str) -> Result<&'static ObsField> {
    DATA_FIELDS
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| ConvertError::lookup(name))
}

/// Unit string for any of the 11 variables, time coordinate included
pub fn unit_for(name: &str, convention: UnitConvention) -> Result<&'static str> {
    if name == TIMESTAMP_FIELD || name == crate::constants::TIME_VARIABLE {
        return Ok(TIME_UNITS);
    }
    Ok(data_field(name)?.unit(convention))
}

/// All 11 positional column names in input order
pub fn column_names() -> Vec<&'static str> {
    let mut names = Vec::with_capacity(1 + DATA_FIELDS.len());
    names.push(TIMESTAMP_FIELD);
    names.extend(DATA_FIELDS.iter().map(|f| f.name));
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_matches_telemetry_layout() {
        let names = column_names();
        assert_eq!(names.len(), crate::constants::RECORD_FIELD_COUNT);
        assert_eq!(names[0], "timestamp");
        assert_eq!(names[1], "latitude");
        assert_eq!(names[10], "sea_level_air_pressure");
    }

    #[test]
    fn test_storage_policy_annotations() {
        let dir = data_field("true_wind_direction").unwrap();
        let hum = data_field("air_humidity").unwrap();
        let lat = data_field("latitude").unwrap();

        assert_eq!(dir.storage(NumericPolicy::AllFloat), Storage::Float64);
        assert_eq!(dir.storage(NumericPolicy::MixedInteger), Storage::Int32);
        assert_eq!(hum.storage(NumericPolicy::MixedInteger), Storage::Int32);
        assert_eq!(lat.storage(NumericPolicy::MixedInteger), Storage::Float64);
    }

    #[test]
    fn test_unit_conventions() {
        let lat = data_field("latitude").unwrap();
        assert_eq!(lat.unit(UnitConvention::Plain), "decimal_degrees");
        assert_eq!(lat.unit(UnitConvention::Cf), "degree_north");

        let speed = data_field("true_wind_speed").unwrap();
        assert_eq!(speed.unit(UnitConvention::Plain), "m/s");
        assert_eq!(speed.unit(UnitConvention::Cf), "m s-1");

        assert_eq!(
            unit_for("time", UnitConvention::Plain).unwrap(),
            "seconds since 1970-01-01 00:00:00"
        );
    }

    #[test]
    fn test_unknown_variable_is_lookup_error() {
        assert!(matches!(
            data_field("sea_surface_temperature"),
            Err(crate::error::ConvertError::Lookup { .. })
        ));
    }

    #[test]
    fn test_every_field_has_nonempty_vocabulary() {
        for field in &DATA_FIELDS {
            assert!(!field.unit(UnitConvention::Plain).is_empty());
            assert!(!field.unit(UnitConvention::Cf).is_empty());
            assert!(!field.standard_name.is_empty());
            assert!(!field.long_name().is_empty());
        }
    }
}
