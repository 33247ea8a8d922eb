//! Error type shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was rejected at stage entry. Nothing was applied.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("unknown font style '{font}'")]
    GlyphLookup { font: String },

    /// The assembled mission has more items than the configured ceiling.
    #[error("mission needs {actual} items but the limit is {allowed}")]
    WaypointLimitExceeded { actual: usize, allowed: usize },

    #[error("projection failed: {0}")]
    Projection(#[from] enu_geodesy::GeodesyError),

    #[error("unsupported export format '{0}' (expected plan, waypoint, kml, csv or geojson)")]
    ExportFormat(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("{value} must be a positive number")))
    }
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("{value} must be zero or positive")))
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("{value} is not a finite number")))
    }
}
