// crates/wilayah-core/src/error.rs
use thiserror::Error;

/// Errors raised while acquiring region data or forecasts.
///
/// Building a hierarchy from text never fails; these only come out of the
/// loader (files, snapshots) and the forecast client.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Forecast request failed with HTTP status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, RegionError>;
