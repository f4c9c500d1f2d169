//! Error types for the image differ.
//!
//! Provides a small hierarchy of error types using `thiserror`.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Validation errors for comparison requests and options.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Option value out of range
    #[error("Option error: {0}")]
    Option(String),
}

/// File path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// Directory for the output image does not exist
    #[error("Output directory not found: {0}")]
    MissingDir(PathBuf),
    /// Output path points at a directory
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
}

/// Main error type for image comparisons.
#[derive(Error, Debug)]
pub enum DiffError {
    /// The engine binary could not be started. The launch error is kept as is.
    #[error(transparent)]
    Launch(#[from] io::Error),

    /// The engine ran but exited non-zero or reported an error on stderr
    #[error("FFmpeg failed ({status}): {stderr}")]
    Engine {
        status: ExitStatus,
        stderr: String,
    },

    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience result type for diff operations.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    pub fn engine<T: Into<String>>(status: ExitStatus, stderr: T) -> Self {
        Self::Engine {
            status,
            stderr: stderr.into(),
        }
    }

    /// Diagnostic text written by the engine, if it got that far.
    pub fn engine_output(&self) -> Option<&str> {
        match self {
            Self::Engine { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

impl ValidationError {
    pub fn missing_dir(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::MissingDir(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn option(msg: impl Into<String>) -> Self {
        Self::Option(msg.into())
    }
}
