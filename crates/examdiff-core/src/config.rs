//! `examdiff.toml` configuration.
//!
//! Every key is optional; an absent file or section means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diff::{DiffOptions, DuplicateIdPolicy};
use crate::display::{ZonedRenderer, DEFAULT_DISPLAY_TIMEZONE};
use crate::errors::{ExamDiffError, Result};
use crate::logging_facility::Profile;

/// Conventional config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "examdiff.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// IANA zone used to render changed timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub profile: Profile,
}

fn default_timezone() -> String {
    DEFAULT_DISPLAY_TIMEZONE.to_string()
}

impl DiffConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// `ConfigRead` if the file cannot be read, `ConfigParse` if it is not
    /// valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExamDiffError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ExamDiffError::ConfigParse { message, .. } => ExamDiffError::ConfigParse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Like [`DiffConfig::load`], but a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Same as [`DiffConfig::load`] for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// # Errors
    ///
    /// `ConfigParse` when `content` is not valid TOML for this schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| ExamDiffError::ConfigParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            duplicate_ids: self.reconcile.duplicate_ids,
            parallel: self.reconcile.parallel,
        }
    }

    /// # Errors
    ///
    /// `InvalidTimezone` when `display.timezone` is not a known zone.
    pub fn renderer(&self) -> Result<ZonedRenderer> {
        ZonedRenderer::from_name(&self.display.timezone)
    }
}
