//! Hemisphere direction letters
//!
//! DMS and DDM positions carry their hemisphere as a single letter instead
//! of a signed degree value. A missing letter is modelled as `None` on the
//! position fields and is treated as the positive hemisphere.

use std::fmt;
use std::str::FromStr;

use crate::{PositionError, Result};

/// Compass direction naming the hemisphere of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Hemisphere of a signed latitude
    ///
    /// Only strictly positive values are north; `0.0` is classified as south.
    pub fn from_latitude(lat: f64) -> Self {
        if lat > 0.0 {
            Direction::North
        } else {
            Direction::South
        }
    }

    /// Hemisphere of a signed longitude
    ///
    /// Only strictly positive values are east; `0.0` is classified as west.
    pub fn from_longitude(lon: f64) -> Self {
        if lon > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    }

    /// The single-letter abbreviation (`N`, `S`, `E` or `W`)
    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = PositionError;

    fn try_from(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Ok(Direction::North),
            'S' => Ok(Direction::South),
            'E' => Ok(Direction::East),
            'W' => Ok(Direction::West),
            _ => Err(PositionError::InvalidDirection(letter.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Direction::try_from(letter),
            _ => Err(PositionError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
