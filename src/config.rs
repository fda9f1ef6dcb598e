//! Configuration management and validation.
//!
//! Loads the YAML run configuration (input files, output directory,
//! deployment-specific global attributes, annotation knobs) and validates
//! it before any conversion starts.

use crate::error::{ConvertError, Result};
use crate::schema::{MetadataProfile, NumericPolicy, UnitConvention};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run configuration for the converter
///
/// `input_path` entries may be literal file paths or glob patterns; the
/// first `output_path` element is the destination directory for artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered list of source files or glob patterns
    pub input_path: Vec<String>,

    /// Destination list; only the first element is used
    pub output_path: Vec<PathBuf>,

    /// Extra dataset-level attributes merged after the computed ones
    #[serde(default)]
    pub global_attributes: BTreeMap<String, serde_yaml::Value>,

    /// Annotation richness: units-only or full CF vocabulary
    #[serde(default)]
    pub metadata_profile: MetadataProfile,

    /// Unit-string convention applied to all variables
    #[serde(default)]
    pub unit_convention: UnitConvention,

    /// Storage typing for the data variables
    #[serde(default)]
    pub numeric_policy: NumericPolicy,

    /// Abort the batch on the first failed file instead of continuing
    #[serde(default)]
    pub fail_fast: bool,
}

impl Config {
    /// Minimal configuration for a set of inputs and one output directory
    pub fn new(inputs: Vec<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: inputs,
            output_path: vec![output_dir.into()],
            global_attributes: BTreeMap::new(),
            metadata_profile: MetadataProfile::default(),
            unit_convention: UnitConvention::default(),
            numeric_policy: NumericPolicy::default(),
            fail_fast: false,
        }
    }

    /// Load and parse a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::configuration(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConvertError::configuration(format!(
                "Malformed config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the fail-fast batch policy
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Override the metadata profile
    pub fn with_profile(mut self, profile: MetadataProfile) -> Self {
        self.metadata_profile = profile;
        self
    }

    /// Override the unit convention
    pub fn with_convention(mut self, convention: UnitConvention) -> Self {
        self.unit_convention = convention;
        self
    }

    /// Override the numeric storage policy
    pub fn with_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_path = vec![dir.into()];
        self
    }

    /// Destination directory for artifacts
    pub fn output_dir(&self) -> Result<&Path> {
        self.output_path
            .first()
            .map(PathBuf::as_path)
            .ok_or_else(|| ConvertError::configuration("output_path must not be empty"))
    }

    /// Validate the configuration before processing starts
    ///
    /// Missing or malformed paths are fatal for the whole run, surfaced
    /// here rather than midway through the batch.
    pub fn validate(&self) -> Result<()> {
        if self.input_path.is_empty() {
            return Err(ConvertError::configuration(
                "input_path must list at least one source file",
            ));
        }

        self.output_dir()?;

        for entry in &self.input_path {
            if entry.trim().is_empty() {
                return Err(ConvertError::configuration(
                    "input_path contains an empty entry",
                ));
            }
            if !is_glob_pattern(entry) && !Path::new(entry).exists() {
                return Err(ConvertError::configuration(format!(
                    "Input file does not exist: {}",
                    entry
                )));
            }
        }

        Ok(())
    }

    /// Expand `input_path` into concrete file paths
    ///
    /// Entries are kept in configuration order; glob matches within an
    /// entry are sorted so runs are deterministic.
    pub fn expanded_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();

        for entry in &self.input_path {
            if is_glob_pattern(entry) {
                let paths = glob::glob(entry).map_err(|e| {
                    ConvertError::configuration(format!("Invalid input pattern '{}': {}", entry, e))
                })?;

                let mut matches: Vec<PathBuf> = paths.filter_map(std::result::Result::ok).collect();
                if matches.is_empty() {
                    return Err(ConvertError::configuration(format!(
                        "Input pattern matched no files: {}",
                        entry
                    )));
                }
                matches.sort();
                inputs.extend(matches);
            } else {
                inputs.push(PathBuf::from(entry));
            }
        }

        Ok(inputs)
    }
}

fn is_glob_pattern(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}
