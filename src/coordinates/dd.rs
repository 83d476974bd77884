//! Decimal degrees

use crate::conversion;
use crate::coordinates::{PositionDdm, PositionDms};

/// A position in signed decimal degrees
///
/// The hemisphere is carried by the sign of each axis. No range checks are
/// applied: values outside ±90/±180 are stored and converted as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct PositionDd {
    pub lat: f64, // Latitude in degrees, positive north
    pub lon: f64, // Longitude in degrees, positive east
}

impl PositionDd {
    pub fn new(lat: f64, lon: f64) -> Self {
        PositionDd { lat, lon }
    }

    pub fn from_dms(dms: PositionDms) -> Self {
        conversion::dms_to_dd(dms)
    }

    pub fn from_ddm(ddm: PositionDdm) -> Self {
        conversion::ddm_to_dd(ddm)
    }

    pub fn to_dms(&self) -> PositionDms {
        conversion::dd_to_dms(*self)
    }

    pub fn to_ddm(&self) -> PositionDdm {
        conversion::dd_to_ddm(*self)
    }
}
