//! Comprehensive error types for parcel configuration.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use thiserror::Error;

/// Result type alias for parcel operations
pub type Result<T> = std::result::Result<T, ParcelError>;

/// Main error type for all parcel operations
#[derive(Error, Debug)]
pub enum ParcelError {
    /// Build configuration resolution errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Resolution-time failures raised while building a [`BuildConfiguration`].
///
/// Resolution aborts on the first of these. Retrying with identical inputs
/// reproduces the identical failure.
///
/// [`BuildConfiguration`]: crate::parcel::BuildConfiguration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Target or parcel kind could not be resolved from any source
    #[error("Missing required field '{field}': not provided explicitly, on the command line, or by default")]
    MissingRequiredField {
        /// Field name as it appears on the command line
        field: &'static str,
    },

    /// Target string is not in the alias table
    #[error("Unable to find build target: {value}")]
    UnknownTargetString {
        /// Offending target string (after any streamed transform)
        value: String,
    },

    /// Entry point owning type is not in the inference table
    #[error("Unable to infer parcel kind from entry point '{entry_point}' (owning type '{owner}')")]
    UnknownParcelInference {
        /// Full entry point value from `executeMethod`
        entry_point: String,
        /// Owning type segment that was looked up
        owner: String,
    },

    /// Value does not name a member of the expected enumeration
    #[error("Invalid value '{value}' for '{key}', expected one of: {expected}")]
    InvalidEnumValue {
        /// CLI key the value came from
        key: String,
        /// Offending value
        value: String,
        /// Accepted names, comma separated
        expected: String,
    },
}

impl ConfigError {
    /// Command-line key this error concerns.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::MissingRequiredField { field } => field,
            ConfigError::UnknownTargetString { .. } => "buildTarget",
            ConfigError::UnknownParcelInference { .. } => "executeMethod",
            ConfigError::InvalidEnumValue { key, .. } => key,
        }
    }
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ParcelError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ParcelError::Config(ConfigError::MissingRequiredField { field: "executeMethod" }) => vec![
                "Pass --parcel <client|bundle|package>".to_string(),
                "Or pass -executeMethod <Namespace.Type.Method> in the build arguments".to_string(),
            ],
            ParcelError::Config(ConfigError::MissingRequiredField { field }) => vec![
                format!("Pass -{field} <value> in the build arguments"),
                "Or supply the value explicitly with the matching --option".to_string(),
            ],
            ParcelError::Config(ConfigError::UnknownTargetString { .. }) => vec![format!(
                "Use one of: {}",
                crate::parcel::Target::known_aliases().join(", ")
            )],
            ParcelError::Config(ConfigError::UnknownParcelInference { .. }) => vec![
                "Pass --parcel explicitly".to_string(),
                "Or add the owning type to the --entry-points table".to_string(),
            ],
            ParcelError::Config(ConfigError::InvalidEnumValue { expected, .. }) => {
                vec![format!("Use one of: {expected}")]
            }
            ParcelError::Toml(_) => {
                vec!["Check the [entry_points] table in the --entry-points file".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is recoverable
    ///
    /// Only I/O failures depend on the environment. Everything else fails the
    /// same way for the same inputs.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParcelError::Io(_))
    }
}
