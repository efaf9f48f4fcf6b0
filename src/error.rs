//! @ai:module:intent Define the closed pipeline error taxonomy and the crate-level error type
//! @ai:module:layer domain
//! @ai:module:public_api PipelineError, Stage, Error, Result
//! @ai:module:stateless true

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent The three pipeline stages, in execution order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Load,
    Validate,
    Process,
}

impl Stage {
    /// @ai:intent Human-readable stage name
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::Validate => "validate",
            Stage::Process => "process",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// @ai:intent Closed set of failures a pipeline run can end with
/// @ai:invariant each variant is produced by exactly one stage
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineError {
    #[error("could not read config source {filename}")]
    ConfigRead { filename: String },

    #[error("config parse error at line {line_number}: {line_content}")]
    ConfigParse {
        line_content: String,
        line_number: usize,
    },

    #[error("validation failed for field {field_name}: {invalid_value}")]
    Validation {
        field_name: String,
        invalid_value: String,
    },

    #[error("task {task_name} failed: {details}")]
    Processing { task_name: String, details: String },
}

impl PipelineError {
    /// @ai:intent Stage that is allowed to produce this error kind
    /// @ai:effects pure
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::ConfigRead { .. } | PipelineError::ConfigParse { .. } => Stage::Load,
            PipelineError::Validation { .. } => Stage::Validate,
            PipelineError::Processing { .. } => Stage::Process,
        }
    }

    /// @ai:intent Stable snake_case tag for the error kind
    /// @ai:effects pure
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::ConfigRead { .. } => "config_read",
            PipelineError::ConfigParse { .. } => "config_parse",
            PipelineError::Validation { .. } => "validation",
            PipelineError::Processing { .. } => "processing",
        }
    }
}

/// @ai:intent Error type for operations around the pipeline (settings, rendering)
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read settings file {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
