//! Configuration document loading
//!
//! Reads a backup configuration from disk and parses it into a [`Value`]
//! tree. TOML is the native format; YAML and JSON documents with the same
//! shape are accepted too.

use clap::ValueEnum;
use std::path::Path;

use super::value::Value;
use crate::error::{ScriptError, ScriptResult};

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Infer the format from a file extension, falling back to TOML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse document text in the given format
pub fn parse(contents: &str, format: Format) -> ScriptResult<Value> {
    let value: Value = match format {
        Format::Toml => toml::from_str(contents)?,
        Format::Yaml => serde_yaml::from_str(contents)?,
        Format::Json => serde_json::from_str(contents)?,
    };
    Ok(value)
}

/// Load a configuration document from disk.
///
/// When `format` is `None` it is inferred from the file extension.
pub fn load(path: &Path, format: Option<Format>) -> ScriptResult<Value> {
    let format = format.unwrap_or_else(|| Format::from_path(path));

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ScriptError::Io(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    tracing::debug!(path = %path.display(), ?format, "parsing configuration");

    parse(&contents, format).map_err(|e| match e {
        ScriptError::Parse(msg) => {
            ScriptError::Parse(format!("in '{}': {}", path.display(), msg))
        }
        other => other,
    })
}
