//! Error types for asset loading and lookup

use std::path::PathBuf;
use thiserror::Error;

/// Error type for asset operations
#[derive(Debug, Error)]
pub enum AssetError {
    /// Asset not present in the store
    #[error("asset {0} not found")]
    NotFound(String),

    /// Failed to read an asset from disk
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to walk an asset directory
    #[error("failed to walk asset directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Asset path is not valid UTF-8
    #[error("asset path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;
