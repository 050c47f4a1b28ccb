//! Custom error types for the bio console.
//!
//! This module provides error handling for profile persistence,
//! data parsing, and terminal interaction.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bio console operations.
#[derive(Error, Debug)]
pub enum BioError {
    /// The data file exists but does not contain a valid profile.
    #[error("Profile data in {} is corrupt: {message}", .path.display())]
    CorruptData { path: PathBuf, message: String },

    /// The data file exists but could not be read.
    #[error("Failed to read profile data from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Saving the profile failed (permission denied, disk full, ...).
    #[error("Failed to write profile data to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile could not be encoded as JSON.
    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Terminal read/write error.
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// Standard input was closed while waiting for the user.
    #[error("Input closed before the session was finished")]
    InputClosed,
}

/// Result type alias for bio console operations.
pub type Result<T> = std::result::Result<T, BioError>;
