//! Application constants for the MAWS converter.
//!
//! Attribute names, fixed metadata tags, and tokens shared across the
//! parsing and annotation pipeline.

// =============================================================================
// Dataset-level attribute names
// =============================================================================

/// Global attribute names written by the converter
pub mod attrs {
    pub const TITLE: &str = "title";
    pub const FEATURE_TYPE: &str = "featureType";
    pub const DATE_CREATED: &str = "date_created";
    pub const HISTORY: &str = "history";

    pub const GEOSPATIAL_LAT_MIN: &str = "geospatial_lat_min";
    pub const GEOSPATIAL_LAT_MAX: &str = "geospatial_lat_max";
    pub const GEOSPATIAL_LON_MIN: &str = "geospatial_lon_min";
    pub const GEOSPATIAL_LON_MAX: &str = "geospatial_lon_max";
    pub const TIME_COVERAGE_START: &str = "time_coverage_start";
    pub const TIME_COVERAGE_END: &str = "time_coverage_end";
}

/// Variable-level attribute names
pub mod var_attrs {
    pub const UNITS: &str = "units";
    pub const STANDARD_NAME: &str = "standard_name";
    pub const LONG_NAME: &str = "long_name";
}

// =============================================================================
// Fixed metadata values
// =============================================================================

/// Sampling-geometry tag for a station time series
pub const FEATURE_TYPE_TIME_SERIES: &str = "timeSeries";

/// Epoch-anchored unit string for the time coordinate
pub const TIME_UNITS: &str = "seconds since 1970-01-01 00:00:00";

/// Date format for the `date_created` attribute
pub const DATE_CREATED_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used in the `history` attribute
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// =============================================================================
// Input parsing
// =============================================================================

/// Missing value indicator in telemetry CSV files
pub const MISSING_VALUE_TOKEN: &str = "NA";

/// Number of positional columns in a telemetry record
pub const RECORD_FIELD_COUNT: usize = 11;

// =============================================================================
// Output artifact
// =============================================================================

/// Extension of the persisted artifact
pub const OUTPUT_EXTENSION: &str = "nc";

/// Suffix of the staging file used for atomic artifact writes
pub const STAGING_SUFFIX: &str = ".part";

/// Fill value for integer variables with missing samples
pub const FILL_I32: i32 = -9999;

/// Name of the shared time dimension and coordinate variable
pub const TIME_VARIABLE: &str = "time";

/// Get the expected artifact filename for an input file stem
pub fn output_filename(stem: &str) -> String {
    format!("{}.{}", stem, OUTPUT_EXTENSION)
}
