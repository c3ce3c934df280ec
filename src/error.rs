/// Error types for the showcase application
///
/// `AppError` covers startup concerns (configuration, preference storage).
/// `FrameError` covers frame loading and travels inside UI messages, so it
/// must stay `Clone`.
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// The preference database could not be opened or queried
    #[error("Preference store error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file exists but could not be read
    #[error("Failed to read configuration {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for `AppConfig`
    #[error("Invalid configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine the user data directory")]
    NoDataDir,

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while loading a frame for the live viewer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Frame not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The blocking decode task panicked or was cancelled
    #[error("Task join error: {0}")]
    Join(String),
}
