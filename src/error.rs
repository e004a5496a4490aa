//! Error types for labscan operations.
//!
//! This module defines [`LabscanError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LabscanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LabscanError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for labscan operations.
#[derive(Debug, Error)]
pub enum LabscanError {
    /// Scan directory does not exist.
    #[error("Scan directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Scan path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Requested lab number is outside the known range.
    #[error("Unknown lab number {lab}: expected {first} through {last}")]
    LabOutOfRange { lab: u8, first: u8, last: u8 },

    /// An existence check failed for a reason other than plain absence.
    #[error("Failed to check {path}: {source}")]
    CheckFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for labscan operations.
pub type Result<T> = std::result::Result<T, LabscanError>;
