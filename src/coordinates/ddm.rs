//! Degrees and decimal minutes

use crate::conversion;
use crate::coordinates::{Direction, PositionDd, PositionDms};

/// A position in whole degrees and decimal minutes
///
/// Same layout as [`PositionDms`] with the seconds folded into the minute.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct PositionDdm {
    pub lat_dir: Option<Direction>,
    pub lat_d: i32,
    pub lat_m: f64,
    pub lon_dir: Option<Direction>,
    pub lon_d: i32,
    pub lon_m: f64,
}

impl PositionDdm {
    pub fn from_dd(dd: PositionDd) -> Self {
        conversion::dd_to_ddm(dd)
    }

    pub fn from_dms(dms: PositionDms) -> Self {
        conversion::dms_to_ddm(dms)
    }

    pub fn to_dd(&self) -> PositionDd {
        conversion::ddm_to_dd(*self)
    }

    pub fn to_dms(&self) -> PositionDms {
        conversion::ddm_to_dms(*self)
    }
}
