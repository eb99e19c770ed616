use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for assetkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Input path given on the command line does not exist.
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A directory was required but the path is something else.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// External tool invocation failed.
    #[error("Tool error running '{command}': {details}")]
    ToolFailed { command: String, details: String },

    /// Directory traversal failed.
    #[error("Directory traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),

    /// Image could not be decoded or encoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Interactive viewer could not be started or failed while running.
    #[error("Viewer error: {0}")]
    Viewer(String),

    /// Worker pool could not be created.
    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn viewer_error<E: std::fmt::Display>(err: E) -> Self {
        AppError::Viewer(err.to_string())
    }
}
