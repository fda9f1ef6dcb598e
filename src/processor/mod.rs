//! Conversion engine.
//!
//! Orchestrates the per-file pipeline (parse, build, annotate, extents,
//! provenance, configured-attribute merge, write) and the sequential batch
//! loop over the configured inputs. Files are independent; whether a failed
//! file aborts the batch is the explicit `fail_fast` configuration choice.

pub mod annotate;
pub mod builder;
pub mod extent;
pub mod provenance;
pub mod writer;

use crate::config::Config;
use crate::constants::{DATE_CREATED_FORMAT, attrs, output_filename};
use crate::error::{ConvertError, Result};
use crate::models::{AttrValue, ConversionStats, Dataset};
use crate::parser::parse_telemetry_file;
use crate::schema::MetadataProfile;

use chrono::Utc;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use self::provenance::ProvenanceContext;

/// Sequential converter for a configured batch of telemetry files
#[derive(Debug)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter after validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert every configured input, one at a time, in list order
    ///
    /// With `fail_fast` unset a failed file is logged and counted and the
    /// batch continues; with it set the first failure aborts the batch.
    pub fn run(&self) -> Result<ConversionStats> {
        let start = Instant::now();

        let inputs = self.config.expanded_inputs()?;
        let output_dir = self.config.output_dir()?;
        std::fs::create_dir_all(output_dir).map_err(|e| {
            ConvertError::configuration(format!(
                "Cannot create output directory {}: {}",
                output_dir.display(),
                e
            ))
        })?;

        let mut stats = ConversionStats::default();

        for input in &inputs {
            match self.convert_file(input) {
                Ok(rows) => {
                    stats.files_converted += 1;
                    stats.total_rows += rows;
                }
                Err(e) => {
                    stats.files_failed += 1;
                    error!("Conversion failed for {}: {}", input.display(), e);
                    if self.config.fail_fast {
                        return Err(e);
                    }
                }
            }
        }

        stats.elapsed_ms = start.elapsed().as_millis();
        Ok(stats)
    }

    /// Convert a single telemetry file to one artifact
    ///
    /// Returns the number of time steps written.
    pub fn convert_file(&self, input: &Path) -> Result<usize> {
        info!("Converting {}", input.display());

        let table = parse_telemetry_file(input)?;
        let mut dataset = builder::build_dataset(table, self.config.numeric_policy)?;

        let title = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| ConvertError::format(input, "input path has no file name"))?;

        annotate::annotate(
            &mut dataset,
            &title,
            self.config.metadata_profile,
            self.config.unit_convention,
        )?;
        extent::apply_extents(&mut dataset)?;

        let now = Utc::now();
        dataset.attrs.set(
            attrs::DATE_CREATED,
            now.format(DATE_CREATED_FORMAT).to_string(),
        );

        let output_path = self.config.output_dir()?.join(output_filename(&title));

        if self.config.metadata_profile == MetadataProfile::Cf {
            // Process state is read once here and passed in explicitly
            let context = ProvenanceContext {
                timestamp: now,
                user: invoking_user(),
                tool: format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                input,
                output: &output_path,
            };
            provenance::record(&mut dataset, &context);
        }

        merge_global_attributes(&mut dataset, &self.config.global_attributes);

        writer::write_dataset(&dataset, &output_path)?;
        info!(
            "Wrote {} ({} time steps)",
            output_path.display(),
            dataset.len()
        );

        Ok(dataset.len())
    }
}

/// Merge configured global attributes onto the dataset
///
/// Entries with empty values (YAML null or empty string) are skipped; the
/// rest overwrite any previously computed attribute of the same name. This
/// is how deployment-specific metadata (institution, license, contact) is
/// layered on without code changes.
pub fn merge_global_attributes(
    dataset: &mut Dataset,
    extra: &BTreeMap<String, serde_yaml::Value>,
) {
    for (name, value) in extra {
        if let Some(attr) = configured_attr_value(value) {
            dataset.attrs.set(name.clone(), attr);
        }
    }
}

fn configured_attr_value(value: &serde_yaml::Value) -> Option<AttrValue> {
    use serde_yaml::Value;

    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(AttrValue::Text(s.clone())),
        Value::Bool(b) => Some(AttrValue::Text(b.to_string())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(AttrValue::Int(i))
            } else {
                n.as_f64().map(AttrValue::Float)
            }
        }
        other => {
            tracing::warn!(
                "Skipping global attribute with non-scalar value: {:?}",
                other
            );
            None
        }
    }
}

fn invoking_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
