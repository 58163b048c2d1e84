//! Error types shared by the dashboard crates.

use thiserror::Error;

/// A bundled JSON document could not be decoded.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("bundled dataset `{dataset}` is malformed: {source}")]
    Malformed {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Dashboard configuration could not be decoded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("zoom {zoom} is outside {min}..={max}")]
    ZoomOutOfRange { zoom: u8, min: u8, max: u8 },
    #[error("max_zoom {max_zoom} is above the deepest tile level {limit}")]
    MaxZoomTooDeep { max_zoom: u8, limit: u8 },
    #[error("upload max_files {max_files} is outside 1..={limit}")]
    UploadCapOutOfRange { max_files: usize, limit: usize },
}

/// Rejection from the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both email and password.")]
    MissingCredentials,
}
