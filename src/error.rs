//! Custom error types for syncscript
//!
//! This module defines the error hierarchy for the generator using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for syncscript operations
#[derive(Error, Debug)]
pub enum ScriptError {
    /// A value tree does not match its schema
    #[error("Schema violation at `{path}`: {message}")]
    SchemaViolation { path: String, message: String },

    /// The configuration failed validation when the resolver was built
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// A per-job field resolved to nothing after the full lookup
    #[error("`{field}` is not defined in the config for backup '{job}'")]
    RequiredNotDefined { job: String, field: &'static str },

    /// A command was requested for a job that is not declared
    #[error("Backup not found: {0}")]
    UnknownJob(String),

    /// A resolved value has a shape the generator cannot use
    #[error("Invalid value for `{property}`: expected {expected}")]
    InvalidValue {
        property: String,
        expected: &'static str,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Document parsing errors
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ScriptError {
    /// Create a schema violation at the given path
    pub fn violation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a "required not defined" error for a job field
    pub fn required(job: impl Into<String>, field: &'static str) -> Self {
        Self::RequiredNotDefined {
            job: job.into(),
            field,
        }
    }

    /// Check if this is a schema violation
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. })
    }

    /// Check if this is a missing required field error
    pub fn is_required_not_defined(&self) -> bool {
        matches!(self, Self::RequiredNotDefined { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ScriptError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ScriptError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for syncscript operations
pub type ScriptResult<T> = Result<T, ScriptError>;
