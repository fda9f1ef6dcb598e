//! MAWS Converter Library
//!
//! A Rust library for converting marine automatic weather station (MAWS)
//! telemetry from headerless CSV into self-describing, CF-annotated NetCDF
//! datasets.
//!
//! This library provides tools for:
//! - Parsing fixed-schema telemetry records with cell-level coercion errors
//! - Assembling time-indexed datasets under configurable numeric policies
//! - Attaching controlled-vocabulary metadata (units, standard names)
//! - Computing geospatial and temporal coverage over missing-aware data
//! - Recording conversion provenance
//! - Writing NetCDF artifacts atomically

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod schema;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{ConvertError, Result};
pub use models::{ConversionStats, Dataset, Variable};
pub use processor::Converter;
pub use schema::{MetadataProfile, NumericPolicy, UnitConvention};
