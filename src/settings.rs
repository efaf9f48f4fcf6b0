//! @ai:module:intent Settings for report rendering, loaded from TOML
//! @ai:module:layer infrastructure
//! @ai:module:public_api PipelineSettings, ReportSettings
//! @ai:module:depends_on error, report
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Top-level settings for the CLI
/// @ai:invariant stage triggers and thresholds are fixed; unknown tables are rejected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineSettings {
    #[serde(default)]
    pub report: ReportSettings,
}

/// @ai:intent How reports are rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

impl PipelineSettings {
    /// @ai:intent Load settings from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::SettingsRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// @ai:intent Parse settings from TOML text, filling omitted keys with defaults
    /// @ai:effects pure
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// @ai:intent Save settings to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
