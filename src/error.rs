//! Error types for geohash grid operations.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors produced by the geohash grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// The text is not a valid geohash (empty, too long, or outside the base-32 alphabet)
    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    /// Precision outside of 1..=12
    #[error("Invalid precision {0}, expected 1..=12")]
    InvalidPrecision(usize),

    /// The text is not a `g:` zone identifier
    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by the underlying geohash codec
    #[error("Geohash codec error: {0}")]
    Codec(#[from] geohash::GeohashError),

    /// Tiling walk did not reach its target cell within the step bound
    #[error("Tiling failed: {0}")]
    TilingFailed(String),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// Cells of different lengths where a uniform precision is required
    #[error("Mixed precision: expected {expected} characters, found {found}")]
    MixedPrecision { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
