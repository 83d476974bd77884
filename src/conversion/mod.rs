//! # Conversion Engine
//!
//! Arithmetic transforms between the three position notations. Every edge
//! of the DD/DMS/DDM triangle is computed directly from its source rather
//! than through a common intermediate, so two different paths to the same
//! notation agree only to within floating-point rounding.
//!
//! Nothing here validates its input. NaN, infinities and out-of-range
//! magnitudes flow through the arithmetic and produce correspondingly
//! meaningless output; no function in this module can fail.
//!
//! ## Example
//!
//! ```rust
//! use position::conversion::decompose;
//!
//! // 37.7749 -> 37° 46' 29.64"
//! let (d, m, s) = decompose(37.7749);
//! assert_eq!((d, m), (37, 46));
//! assert!((s - 29.64).abs() < 1e-6);
//! ```

use crate::constants::{MINUTES_PER_DEGREE, SECONDS_PER_DEGREE, SECONDS_PER_MINUTE};
use crate::coordinates::{Direction, PositionDd, PositionDdm, PositionDms};

/// Splits a decimal degree value into `(degree, minute, second)` magnitudes
///
/// The sign is discarded. Each integer extraction truncates toward zero,
/// and the second is derived from the already-truncated minute rather than
/// from the original fraction, so rounding error can accumulate across the
/// two stages.
pub fn decompose(value: f64) -> (i32, i32, f64) {
    let value = value.abs();
    let degree = value.trunc();
    let decimal_minute = value.fract() * MINUTES_PER_DEGREE;
    let minute = decimal_minute.trunc();
    let second = decimal_minute.fract() * SECONDS_PER_MINUTE;
    (degree as i32, minute as i32, second)
}

/// Splits a decimal degree value into `(degree, decimal_minute)` magnitudes
///
/// Goes through [`decompose`] and folds the second back into the minute.
pub fn decimal_minutes(value: f64) -> (i32, f64) {
    let (degree, minute, second) = decompose(value);
    (degree, minute as f64 + second / SECONDS_PER_MINUTE)
}

/// Decimal degrees to DMS; N/E only for values strictly above zero
pub fn dd_to_dms(dd: PositionDd) -> PositionDms {
    let (lat_d, lat_m, lat_s) = decompose(dd.lat);
    let (lon_d, lon_m, lon_s) = decompose(dd.lon);
    PositionDms {
        lat_dir: Some(Direction::from_latitude(dd.lat)),
        lat_d,
        lat_m,
        lat_s,
        lon_dir: Some(Direction::from_longitude(dd.lon)),
        lon_d,
        lon_m,
        lon_s,
    }
}

/// Decimal degrees to DDM through [`decimal_minutes`], same hemisphere rule as [`dd_to_dms`]
pub fn dd_to_ddm(dd: PositionDd) -> PositionDdm {
    let (lat_d, lat_m) = decimal_minutes(dd.lat);
    let (lon_d, lon_m) = decimal_minutes(dd.lon);
    PositionDdm {
        lat_dir: Some(Direction::from_latitude(dd.lat)),
        lat_d,
        lat_m,
        lon_dir: Some(Direction::from_longitude(dd.lon)),
        lon_d,
        lon_m,
    }
}

/// DMS to signed decimal degrees; only South and West negate
pub fn dms_to_dd(dms: PositionDms) -> PositionDd {
    let lat = dms.lat_d as f64
        + dms.lat_m as f64 / MINUTES_PER_DEGREE
        + dms.lat_s / SECONDS_PER_DEGREE;
    let lon = dms.lon_d as f64
        + dms.lon_m as f64 / MINUTES_PER_DEGREE
        + dms.lon_s / SECONDS_PER_DEGREE;
    PositionDd {
        lat: apply_latitude_sign(lat, dms.lat_dir),
        lon: apply_longitude_sign(lon, dms.lon_dir),
    }
}

/// DMS to DDM, folding seconds into the minute
pub fn dms_to_ddm(dms: PositionDms) -> PositionDdm {
    PositionDdm {
        lat_dir: dms.lat_dir,
        lat_d: dms.lat_d,
        lat_m: dms.lat_m as f64 + dms.lat_s / SECONDS_PER_MINUTE,
        lon_dir: dms.lon_dir,
        lon_d: dms.lon_d,
        lon_m: dms.lon_m as f64 + dms.lon_s / SECONDS_PER_MINUTE,
    }
}

/// DDM to signed decimal degrees; only South and West negate
pub fn ddm_to_dd(ddm: PositionDdm) -> PositionDd {
    let lat = ddm.lat_d as f64 + ddm.lat_m / MINUTES_PER_DEGREE;
    let lon = ddm.lon_d as f64 + ddm.lon_m / MINUTES_PER_DEGREE;
    PositionDd {
        lat: apply_latitude_sign(lat, ddm.lat_dir),
        lon: apply_longitude_sign(lon, ddm.lon_dir),
    }
}

/// DDM to DMS, truncating the minute and carrying the remainder as seconds
pub fn ddm_to_dms(ddm: PositionDdm) -> PositionDms {
    let lat_m = ddm.lat_m as i32;
    let lon_m = ddm.lon_m as i32;
    PositionDms {
        lat_dir: ddm.lat_dir,
        lat_d: ddm.lat_d,
        lat_m,
        lat_s: (ddm.lat_m - lat_m as f64) * SECONDS_PER_MINUTE,
        lon_dir: ddm.lon_dir,
        lon_d: ddm.lon_d,
        lon_m,
        lon_s: (ddm.lon_m - lon_m as f64) * SECONDS_PER_MINUTE,
    }
}

// Only the southern letter negates a latitude; any other letter, or none, is positive.
fn apply_latitude_sign(magnitude: f64, dir: Option<Direction>) -> f64 {
    match dir {
        Some(Direction::South) => -magnitude,
        _ => magnitude,
    }
}

fn apply_longitude_sign(magnitude: f64, dir: Option<Direction>) -> f64 {
    match dir {
        Some(Direction::West) => -magnitude,
        _ => magnitude,
    }
}
