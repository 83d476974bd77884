//! Display format configuration and named presets
//!
//! Presets are plain `const` values; callers copy and tweak them rather than
//! mutating shared state.
//!
//! ```rust
//! use position::formatting::{PositionFormat, DMS_FORMAT};
//!
//! let spaced = PositionFormat {
//!     dm_separator: " ".into(),
//!     ..DMS_FORMAT
//! };
//! assert_eq!(spaced.sec_precision, 2);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEGREE_SYMBOL, MINUTE_SYMBOL, SECOND_SYMBOL};
use crate::coordinates::Notation;
use crate::{PositionError, Result};

/// Rules for rendering a position as text
///
/// Deserializing fills any missing field from [`DEFAULT_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PositionFormat {
    pub deg_symbol: Cow<'static, str>,
    pub min_symbol: Cow<'static, str>,
    pub sec_symbol: Cow<'static, str>,
    /// Append the hemisphere letter to DDM and DMS output
    pub dir_indicator: bool,
    /// Emitted between the last field and the hemisphere letter
    pub dir_indicator_spacer: Cow<'static, str>,
    /// Emitted between the degree symbol and the minute field
    pub dm_separator: Cow<'static, str>,
    /// Minute/second separator; the DMS renderer does not emit it
    pub ms_separator: Cow<'static, str>,
    pub lat_precision: u16,
    pub lon_precision: u16,
    pub min_precision: u16,
    pub sec_precision: u16,
}

/// Spaced symbols with hemisphere letters
pub const DEFAULT_FORMAT: PositionFormat = PositionFormat {
    deg_symbol: Cow::Borrowed(DEGREE_SYMBOL),
    min_symbol: Cow::Borrowed(MINUTE_SYMBOL),
    sec_symbol: Cow::Borrowed(SECOND_SYMBOL),
    dir_indicator: true,
    dir_indicator_spacer: Cow::Borrowed(" "),
    dm_separator: Cow::Borrowed(" "),
    ms_separator: Cow::Borrowed(" "),
    lat_precision: 6,
    lon_precision: 6,
    min_precision: 4,
    sec_precision: 2,
};

/// Bare signed decimal degrees, e.g. `-122.349300`
pub const DD_FORMAT: PositionFormat = PositionFormat {
    deg_symbol: Cow::Borrowed(""),
    min_symbol: Cow::Borrowed(MINUTE_SYMBOL),
    sec_symbol: Cow::Borrowed(SECOND_SYMBOL),
    dir_indicator: false,
    dir_indicator_spacer: Cow::Borrowed(" "),
    dm_separator: Cow::Borrowed(" "),
    ms_separator: Cow::Borrowed(" "),
    lat_precision: 6,
    lon_precision: 6,
    min_precision: 4,
    sec_precision: 2,
};

/// Compact degrees and decimal minutes, e.g. `47°37.230'N`
pub const DDM_FORMAT: PositionFormat = PositionFormat {
    deg_symbol: Cow::Borrowed(DEGREE_SYMBOL),
    min_symbol: Cow::Borrowed(MINUTE_SYMBOL),
    sec_symbol: Cow::Borrowed(SECOND_SYMBOL),
    dir_indicator: true,
    dir_indicator_spacer: Cow::Borrowed(""),
    dm_separator: Cow::Borrowed(""),
    ms_separator: Cow::Borrowed(" "),
    lat_precision: 6,
    lon_precision: 6,
    min_precision: 3,
    sec_precision: 2,
};

/// Symbol-free degrees and decimal minutes, e.g. `4851.51N`
pub const DDM_SHORT_FORMAT: PositionFormat = PositionFormat {
    deg_symbol: Cow::Borrowed(""),
    min_symbol: Cow::Borrowed(""),
    sec_symbol: Cow::Borrowed(SECOND_SYMBOL),
    dir_indicator: true,
    dir_indicator_spacer: Cow::Borrowed(""),
    dm_separator: Cow::Borrowed(""),
    ms_separator: Cow::Borrowed(" "),
    lat_precision: 6,
    lon_precision: 6,
    min_precision: 2,
    sec_precision: 2,
};

/// Compact degrees, minutes and seconds, e.g. `47°37'13.80"N`
pub const DMS_FORMAT: PositionFormat = PositionFormat {
    deg_symbol: Cow::Borrowed(DEGREE_SYMBOL),
    min_symbol: Cow::Borrowed(MINUTE_SYMBOL),
    sec_symbol: Cow::Borrowed(SECOND_SYMBOL),
    dir_indicator: true,
    dir_indicator_spacer: Cow::Borrowed(""),
    dm_separator: Cow::Borrowed(""),
    ms_separator: Cow::Borrowed(" "),
    lat_precision: 6,
    lon_precision: 6,
    min_precision: 4,
    sec_precision: 2,
};

impl Default for PositionFormat {
    fn default() -> Self {
        DEFAULT_FORMAT
    }
}

impl PositionFormat {
    /// Parses a JSON document; absent fields keep their default values
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Names for the built-in format presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Default,
    Dd,
    Ddm,
    DdmShort,
    Dms,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Default,
        Preset::Dd,
        Preset::Ddm,
        Preset::DdmShort,
        Preset::Dms,
    ];

    pub fn format(&self) -> PositionFormat {
        match self {
            Preset::Default => DEFAULT_FORMAT,
            Preset::Dd => DD_FORMAT,
            Preset::Ddm => DDM_FORMAT,
            Preset::DdmShort => DDM_SHORT_FORMAT,
            Preset::Dms => DMS_FORMAT,
        }
    }

    /// The notation this preset was designed for, if any
    pub fn notation(&self) -> Option<Notation> {
        match self {
            Preset::Default => None,
            Preset::Dd => Some(Notation::Dd),
            Preset::Ddm | Preset::DdmShort => Some(Notation::Ddm),
            Preset::Dms => Some(Notation::Dms),
        }
    }

    /// The compact preset for a notation
    pub fn for_notation(notation: Notation) -> Self {
        match notation {
            Notation::Dd => Preset::Dd,
            Notation::Ddm => Preset::Ddm,
            Notation::Dms => Preset::Dms,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Dd => "dd",
            Preset::Ddm => "ddm",
            Preset::DdmShort => "ddm-short",
            Preset::Dms => "dms",
        }
    }
}

impl FromStr for Preset {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| PositionError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let format = PositionFormat::default();
        assert_eq!(format.deg_symbol, "°");
        assert_eq!(format.min_symbol, "'");
        assert_eq!(format.sec_symbol, "\"");
        assert!(format.dir_indicator);
        assert_eq!(format.dir_indicator_spacer, " ");
        assert_eq!(format.dm_separator, " ");
        assert_eq!(format.ms_separator, " ");
        assert_eq!(
            (
                format.lat_precision,
                format.lon_precision,
                format.min_precision,
                format.sec_precision
            ),
            (6, 6, 4, 2)
        );
    }

    #[test]
    fn test_presets_differ_only_in_overrides() {
        let dd = PositionFormat {
            deg_symbol: "".into(),
            dir_indicator: false,
            ..PositionFormat::default()
        };
        assert_eq!(DD_FORMAT, dd);

        let ddm = PositionFormat {
            dir_indicator_spacer: "".into(),
            dm_separator: "".into(),
            min_precision: 3,
            ..PositionFormat::default()
        };
        assert_eq!(DDM_FORMAT, ddm);

        let ddm_short = PositionFormat {
            deg_symbol: "".into(),
            min_symbol: "".into(),
            dir_indicator_spacer: "".into(),
            dm_separator: "".into(),
            min_precision: 2,
            ..PositionFormat::default()
        };
        assert_eq!(DDM_SHORT_FORMAT, ddm_short);

        let dms = PositionFormat {
            dir_indicator_spacer: "".into(),
            dm_separator: "".into(),
            sec_precision: 2,
            ..PositionFormat::default()
        };
        assert_eq!(DMS_FORMAT, dms);
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
            assert_eq!(preset.to_string(), preset.name());
        }
        assert_eq!("DDM_SHORT".parse::<Preset>().unwrap(), Preset::DdmShort);
        assert!(matches!(
            "mgrs".parse::<Preset>(),
            Err(PositionError::UnknownPreset(name)) if name == "mgrs"
        ));
    }

    #[test]
    fn test_preset_notations() {
        for notation in Notation::ALL {
            assert_eq!(Preset::for_notation(notation).notation(), Some(notation));
        }
        assert_eq!(Preset::Default.notation(), None);
        assert_eq!(Preset::DdmShort.notation(), Some(Notation::Ddm));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let format = PositionFormat::from_json(r#"{ "sec_precision": 4, "dir_indicator": false }"#)
            .unwrap();
        assert_eq!(format.sec_precision, 4);
        assert!(!format.dir_indicator);
        assert_eq!(format.deg_symbol, "°");
        assert_eq!(format.min_precision, 4);
    }

    #[test]
    fn test_json_round_trip() {
        let json = DDM_SHORT_FORMAT.to_json().unwrap();
        assert_eq!(PositionFormat::from_json(&json).unwrap(), DDM_SHORT_FORMAT);
    }

    #[test]
    fn test_out_of_range_precision_is_config_error() {
        let result = PositionFormat::from_json(r#"{ "sec_precision": 70000 }"#);
        assert!(matches!(result, Err(PositionError::Config(_))));

        let widest = PositionFormat::from_json(r#"{ "sec_precision": 65535 }"#).unwrap();
        assert_eq!(widest.sec_precision, u16::MAX);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let result = PositionFormat::from_json(r#"{ "min_precision": -1 }"#);
        assert!(matches!(result, Err(PositionError::Config(_))));
    }
}
