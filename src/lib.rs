//! Position: geographic coordinate conversion and display formatting
//!
//! This crate converts a latitude/longitude pair between decimal degrees
//! (DD), degrees with decimal minutes (DDM) and degrees, minutes and seconds
//! (DMS), and renders any of them as text under configurable rules.
//!
//! Conversion and rendering are pure functions without validation: NaN,
//! infinities and out-of-range degrees are passed through the arithmetic
//! and never cause an error or a panic. Only the configuration edges
//! (parsing names, reading files) can fail.
//!
//! ```rust
//! use position::{format_position, Position, PositionDd, DMS_FORMAT};
//!
//! let eiffel = PositionDd::new(48.858553598330445, 2.2944812975469286);
//! let text = format_position(&Position::Dms(eiffel.to_dms()), &DMS_FORMAT);
//! assert_eq!(text.lat, "48°51'30.79\"N");
//! assert_eq!(text.lon, "2°17'40.13\"E");
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod config;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod formatting;

// Re-export commonly used types
pub use coordinates::{Direction, Notation, Position, PositionDd, PositionDdm, PositionDms};
pub use formatting::{
    format_number, format_number_to_string, format_position, DisplayString, PositionFormat, Preset,
    DDM_FORMAT, DDM_SHORT_FORMAT, DD_FORMAT, DEFAULT_FORMAT, DMS_FORMAT,
};

/// Main error type for the position library
#[derive(Debug, Error)]
pub enum PositionError {
    #[error("Invalid direction letter: {0:?}")]
    InvalidDirection(String),

    #[error("Unknown format preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown notation: {0} (expected dd, ddm or dms)")]
    UnknownNotation(String),

    #[error("File I/O error on {path:?}: {source}")]
    Io {
        /// The path of the file that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for position operations
pub type Result<T> = std::result::Result<T, PositionError>;

/// Helper function to attach a path to a std::io::Error
pub(crate) fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> PositionError {
    PositionError::Io {
        path: path.into(),
        source: err,
    }
}
