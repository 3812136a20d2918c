//! Versioned settings files
//!
//! Base settings and variance dials are stored together as one JSON document:
//!
//! ```json
//! { "version": 1, "settings": { ... }, "variance": { ... } }
//! ```
//!
//! Missing fields fall back to their defaults and everything is validated
//! after loading, so hand-edited files can never push the generator outside
//! its parameter domains.

use crate::io::configuration::SETTINGS_VERSION;
use crate::io::error::{MondriantError, Result};
use crate::params::{BaseSettings, Variance};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct SettingsDocument {
    version: u32,
    #[serde(default)]
    settings: BaseSettings,
    #[serde(default)]
    variance: Variance,
}

/// Reads and writes the settings document at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the stored settings
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The contents are not a valid settings document
    /// - The document was written with an unsupported version
    pub fn load(&self) -> Result<(BaseSettings, Variance)> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No settings file; using defaults");
            return Ok((BaseSettings::default(), Variance::default()));
        }

        let data =
            std::fs::read_to_string(&self.path).map_err(|e| MondriantError::FileSystem {
                path: self.path.clone(),
                operation: "read settings",
                source: e,
            })?;
        self.parse(&data)
    }

    /// Parse a settings document held in memory
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has an unsupported
    /// version
    pub fn parse(&self, data: &str) -> Result<(BaseSettings, Variance)> {
        let document: SettingsDocument =
            serde_json::from_str(data).map_err(|e| MondriantError::SettingsFormat {
                path: self.path.clone(),
                source: e,
            })?;

        if document.version != SETTINGS_VERSION {
            return Err(MondriantError::UnsupportedSettingsVersion {
                path: self.path.clone(),
                found: document.version,
                supported: SETTINGS_VERSION,
            });
        }

        Ok((document.settings.validated(), document.variance.validated()))
    }

    /// Validate and write settings, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn save(&self, settings: &BaseSettings, variance: &Variance) -> Result<()> {
        let document = SettingsDocument {
            version: SETTINGS_VERSION,
            settings: settings.clone().validated(),
            variance: variance.validated(),
        };
        let json =
            serde_json::to_string_pretty(&document).map_err(|e| MondriantError::SettingsFormat {
                path: self.path.clone(),
                source: e,
            })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| MondriantError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(&self.path, json).map_err(|e| MondriantError::FileSystem {
            path: self.path.clone(),
            operation: "write settings",
            source: e,
        })?;
        info!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}
