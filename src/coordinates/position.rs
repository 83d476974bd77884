//! The closed set of position notations
//!
//! [`Position`] is the tagged union the renderer matches over, and
//! [`Notation`] names a target for [`Position::convert`].

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::conversion;
use crate::coordinates::{PositionDd, PositionDdm, PositionDms};
use crate::formatting::{format_position, DisplayString, PositionFormat};
use crate::{PositionError, Result};

/// Tag naming one of the three position notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Decimal degrees
    Dd,
    /// Degrees, minutes, seconds
    Dms,
    /// Degrees, decimal minutes
    Ddm,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Dd, Notation::Ddm, Notation::Dms];

    pub fn name(&self) -> &'static str {
        match self {
            Notation::Dd => "dd",
            Notation::Dms => "dms",
            Notation::Ddm => "ddm",
        }
    }
}

impl FromStr for Notation {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dd" => Ok(Notation::Dd),
            "dms" => Ok(Notation::Dms),
            "ddm" => Ok(Notation::Ddm),
            _ => Err(PositionError::UnknownNotation(s.to_string())),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A position in any of the supported notations
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "notation", rename_all = "lowercase")]
pub enum Position {
    Dd(PositionDd),
    Dms(PositionDms),
    Ddm(PositionDdm),
}

impl Position {
    pub fn notation(&self) -> Notation {
        match self {
            Position::Dd(_) => Notation::Dd,
            Position::Dms(_) => Notation::Dms,
            Position::Ddm(_) => Notation::Ddm,
        }
    }

    /// Converts into the `target` notation along the direct edge
    ///
    /// Converting to the current notation returns the value unchanged.
    pub fn convert(self, target: Notation) -> Position {
        trace!("Converting position from {} to {}", self.notation(), target);
        match (self, target) {
            (Position::Dd(dd), Notation::Dms) => Position::Dms(conversion::dd_to_dms(dd)),
            (Position::Dd(dd), Notation::Ddm) => Position::Ddm(conversion::dd_to_ddm(dd)),
            (Position::Dms(dms), Notation::Dd) => Position::Dd(conversion::dms_to_dd(dms)),
            (Position::Dms(dms), Notation::Ddm) => Position::Ddm(conversion::dms_to_ddm(dms)),
            (Position::Ddm(ddm), Notation::Dd) => Position::Dd(conversion::ddm_to_dd(ddm)),
            (Position::Ddm(ddm), Notation::Dms) => Position::Dms(conversion::ddm_to_dms(ddm)),
            (Position::Dd(_), Notation::Dd)
            | (Position::Dms(_), Notation::Dms)
            | (Position::Ddm(_), Notation::Ddm) => self,
        }
    }

    /// Renders this position with the given format
    pub fn display(&self, format: &PositionFormat) -> DisplayString {
        format_position(self, format)
    }
}

impl From<PositionDd> for Position {
    fn from(dd: PositionDd) -> Self {
        Position::Dd(dd)
    }
}

impl From<PositionDms> for Position {
    fn from(dms: PositionDms) -> Self {
        Position::Dms(dms)
    }
}

impl From<PositionDdm> for Position {
    fn from(ddm: PositionDdm) -> Self {
        Position::Ddm(ddm)
    }
}
