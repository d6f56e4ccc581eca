use std::path::PathBuf;

use thiserror::Error;

use crate::config::{ConfigError, PriorConfig};

/// Loads and validates a prior table from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file containing the prior table
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(PriorConfig)` - The parsed and validated prior table
/// * `Err(IOError)` - An error that occurred during reading, parsing or validation
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be found or opened (`IOError::FileNotFound`)
/// * The file contents are not valid JSON or contain an invalid prior string (`IOError::JsonParseError`)
/// * Parameter names are empty or duplicated (`IOError::InvalidConfig`)
pub fn load_prior_config(path: impl Into<PathBuf>) -> Result<PriorConfig, IOError> {
    let path = path.into();
    let file = std::fs::File::open(&path).map_err(IOError::FileNotFound)?;
    let config: PriorConfig = serde_json::from_reader(file).map_err(IOError::JsonParseError)?;
    config.validate()?;

    log::debug!(
        "Loaded {} priors from {}: {:?}",
        config.len(),
        path.display(),
        config.names()
    );

    Ok(config)
}

/// Saves a prior table to a JSON file.
///
/// Priors are written in their string form, so the file can be edited by hand
/// and loaded again with [`load_prior_config`].
pub fn save_prior_config(path: impl Into<PathBuf>, config: &PriorConfig) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::WriteError)?;
    serde_json::to_writer_pretty(file, config).map_err(IOError::SerializeError)
}

/// Represents errors that can occur while reading or writing prior tables.
#[derive(Error, Debug)]
pub enum IOError {
    /// Indicates that the specified file could not be found or opened.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// Indicates that the file contents could not be parsed as a prior table.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// Indicates that the prior table violates naming rules.
    #[error("Invalid prior table: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Indicates that the target file could not be created or written.
    #[error("Failed to write file: {0}")]
    WriteError(std::io::Error),

    /// Indicates that the prior table could not be serialized to JSON.
    #[error("Failed to serialize JSON: {0}")]
    SerializeError(serde_json::Error),
}
