//! Number formatting, format configuration and position rendering

pub mod display;
pub mod format;
pub mod number;

pub use display::{format_position, DisplayString};
pub use format::{
    PositionFormat, Preset, DDM_FORMAT, DDM_SHORT_FORMAT, DD_FORMAT, DEFAULT_FORMAT, DMS_FORMAT,
};
pub use number::{format_number, format_number_to_string, MAX_PRECISION};
