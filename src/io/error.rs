//! Error types for the generator's outer surfaces
//!
//! The simulation core never fails; these errors only arise at the edges:
//! writing images, reading or writing settings files and validating
//! command-line input.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
#[derive(Debug)]
pub enum MondriantError {
    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Settings file could not be parsed or serialized
    SettingsFormat {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Settings file was written by an incompatible version
    UnsupportedSettingsVersion {
        /// Path of the settings file
        path: PathBuf,
        /// Version tag found in the file
        found: u32,
        /// Version tag this build understands
        supported: u32,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Animation export was requested but nothing was captured
    EmptyCapture {
        /// Path where export was attempted
        path: PathBuf,
    },
}

impl fmt::Display for MondriantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::SettingsFormat { path, source } => {
                write!(f, "Malformed settings file '{}': {source}", path.display())
            }
            Self::UnsupportedSettingsVersion {
                path,
                found,
                supported,
            } => {
                write!(
                    f,
                    "Settings file '{}' has version {found} (supported: {supported})",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCapture { path } => {
                write!(
                    f,
                    "No frames captured for animation '{}'",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MondriantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::SettingsFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, MondriantError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MondriantError {
    MondriantError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
