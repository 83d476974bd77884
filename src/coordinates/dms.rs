//! Degrees, minutes and seconds

use crate::conversion;
use crate::coordinates::{Direction, PositionDd, PositionDdm};

/// A position in whole degrees, whole minutes and decimal seconds
///
/// Degree magnitudes are unsigned by convention and the hemisphere lives in
/// the direction letters. Conversions from [`PositionDd`] always keep
/// minutes and seconds inside `[0, 60)`; hand-built values are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct PositionDms {
    pub lat_dir: Option<Direction>,
    pub lat_d: i32,
    pub lat_m: i32,
    pub lat_s: f64,
    pub lon_dir: Option<Direction>,
    pub lon_d: i32,
    pub lon_m: i32,
    pub lon_s: f64,
}

impl PositionDms {
    pub fn from_dd(dd: PositionDd) -> Self {
        conversion::dd_to_dms(dd)
    }

    pub fn from_ddm(ddm: PositionDdm) -> Self {
        conversion::ddm_to_dms(ddm)
    }

    pub fn to_dd(&self) -> PositionDd {
        conversion::dms_to_dd(*self)
    }

    pub fn to_ddm(&self) -> PositionDdm {
        conversion::dms_to_ddm(*self)
    }
}
