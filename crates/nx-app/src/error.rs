//! Error types for the nx-app service layer.

use std::path::PathBuf;

/// Application error shared by the CLI and the GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Load error: {0}")]
    Load(#[from] nx_io::LoadError),

    #[error("Failed to read parameter file: {}", path.display())]
    ParamsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write parameter file: {}", path.display())]
    ParamsFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid parameter document {}: {message}", path.display())]
    ParamsDocument { path: PathBuf, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for nx-app operations.
pub type AppResult<T> = Result<T, AppError>;
