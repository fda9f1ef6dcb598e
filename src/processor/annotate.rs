//! Controlled-vocabulary attribute annotation.
//!
//! Walks an assembled dataset and attaches per-variable metadata (units,
//! and under the CF profile standard and long names) plus the dataset-level
//! title and feature type. One strategy parameterized by profile and unit
//! convention; the two historic annotation variants never diverge here.

use crate::constants::{FEATURE_TYPE_TIME_SERIES, TIME_UNITS, attrs, var_attrs};
use crate::error::Result;
use crate::models::Dataset;
use crate::schema::{self, MetadataProfile, UnitConvention};

/// Annotate every variable and the dataset itself
///
/// Each of the ten data variables and the time coordinate must resolve to a
/// unit in the schema catalog; a miss aborts annotation with a lookup error
/// rather than leaving a silently unlabeled variable.
pub fn annotate(
    dataset: &mut Dataset,
    title: &str,
    profile: MetadataProfile,
    convention: UnitConvention,
) -> Result<()> {
    dataset.time_attrs.set(var_attrs::UNITS, TIME_UNITS);

    for variable in &mut dataset.variables {
        let field = schema::data_field(&variable.name)?;
        variable.attrs.set(var_attrs::UNITS, field.unit(convention));

        if profile == MetadataProfile::Cf {
            variable
                .attrs
                .set(var_attrs::STANDARD_NAME, field.standard_name);
            variable.attrs.set(var_attrs::LONG_NAME, field.long_name());
        }
    }

    dataset.attrs.set(attrs::TITLE, title);
    dataset
        .attrs
        .set(attrs::FEATURE_TYPE, FEATURE_TYPE_TIME_SERIES);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttrValue, Attributes, ColumnData, Variable};

    fn dataset_with_all_fields() -> Dataset {
        Dataset {
            time: vec![1_700_000_000],
            time_attrs: Attributes::new(),
            variables: schema::DATA_FIELDS
                .iter()
                .map(|f| Variable::new(f.name, ColumnData::Float(vec![1.0])))
                .collect(),
            attrs: Attributes::new(),
        }
    }

    #[test]
    fn test_units_profile_attaches_units_only() {
        let mut dataset = dataset_with_all_fields();
        annotate(
            &mut dataset,
            "buoy_alpha",
            MetadataProfile::Units,
            UnitConvention::Plain,
        )
        .unwrap();

        for variable in &dataset.variables {
            let units = variable.attrs.get("units").unwrap();
            assert!(matches!(units, AttrValue::Text(u) if !u.is_empty()));
            assert!(variable.attrs.get("standard_name").is_none());
            assert!(variable.attrs.get("long_name").is_none());
        }

        assert_eq!(
            dataset.time_attrs.get("units"),
            Some(&AttrValue::Text(
                "seconds since 1970-01-01 00:00:00".to_string()
            ))
        );
        assert_eq!(
            dataset.attrs.get("title"),
            Some(&AttrValue::Text("buoy_alpha".to_string()))
        );
        assert_eq!(
            dataset.attrs.get("featureType"),
            Some(&AttrValue::Text("timeSeries".to_string()))
        );
    }

    #[test]
    fn test_cf_profile_attaches_full_vocabulary() {
        let mut dataset = dataset_with_all_fields();
        annotate(
            &mut dataset,
            "buoy_alpha",
            MetadataProfile::Cf,
            UnitConvention::Cf,
        )
        .unwrap();

        let lat = dataset.variable("latitude").unwrap();
        assert_eq!(
            lat.attrs.get("units"),
            Some(&AttrValue::Text("degree_north".to_string()))
        );
        assert_eq!(
            lat.attrs.get("standard_name"),
            Some(&AttrValue::Text("latitude".to_string()))
        );
        assert_eq!(
            lat.attrs.get("long_name"),
            Some(&AttrValue::Text("latitude".to_string()))
        );

        let tendency = dataset
            .variable("average_air_pressure_for_last_minute")
            .unwrap();
        assert_eq!(
            tendency.attrs.get("standard_name"),
            Some(&AttrValue::Text("tendency_of_air_pressure".to_string()))
        );
        assert_eq!(
            tendency.attrs.get("units"),
            Some(&AttrValue::Text("hPa s-1".to_string()))
        );
    }

    #[test]
    fn test_unknown_variable_fails_fast() {
        let mut dataset = dataset_with_all_fields();
        dataset
            .variables
            .push(Variable::new("salinity", ColumnData::Float(vec![35.0])));

        let err = annotate(
            &mut dataset,
            "buoy_alpha",
            MetadataProfile::Units,
            UnitConvention::Plain,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ConvertError::Lookup { ref variable } if variable == "salinity"
        ));
    }
}
