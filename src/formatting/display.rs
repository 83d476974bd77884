//! Rendering positions as latitude/longitude display strings

use log::trace;

use crate::coordinates::{Direction, Position, PositionDd, PositionDdm, PositionDms};
use crate::formatting::{format_number_to_string, PositionFormat};

/// Rendered latitude and longitude text
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct DisplayString {
    pub lat: String,
    pub lon: String,
}

/// Renders `position` with the rules in `format`
///
/// DD output never carries a hemisphere letter; the sign is the only
/// indication. DMS minutes are printed as plain integers and never pass
/// through the precision formatter.
///
/// # Examples
///
/// ```rust
/// use position::{format_position, Position, PositionDd, DDM_FORMAT};
///
/// let needle = PositionDd::new(47.620500, -122.349300);
/// let text = format_position(&Position::Ddm(needle.to_ddm()), &DDM_FORMAT);
/// assert_eq!(text.lat, "47°37.230'N");
/// assert_eq!(text.lon, "122°20.958'W");
/// ```
pub fn format_position(position: &Position, format: &PositionFormat) -> DisplayString {
    trace!("Rendering {} position", position.notation());
    match position {
        Position::Dd(dd) => format_dd(dd, format),
        Position::Ddm(ddm) => format_ddm(ddm, format),
        Position::Dms(dms) => format_dms(dms, format),
    }
}

fn format_dd(dd: &PositionDd, format: &PositionFormat) -> DisplayString {
    let mut lat = format_number_to_string(dd.lat, usize::from(format.lat_precision));
    lat.push_str(&format.deg_symbol);
    let mut lon = format_number_to_string(dd.lon, usize::from(format.lon_precision));
    lon.push_str(&format.deg_symbol);
    DisplayString { lat, lon }
}

fn format_ddm(ddm: &PositionDdm, format: &PositionFormat) -> DisplayString {
    DisplayString {
        lat: ddm_axis(ddm.lat_d, ddm.lat_m, ddm.lat_dir, format),
        lon: ddm_axis(ddm.lon_d, ddm.lon_m, ddm.lon_dir, format),
    }
}

fn format_dms(dms: &PositionDms, format: &PositionFormat) -> DisplayString {
    DisplayString {
        lat: dms_axis(dms.lat_d, dms.lat_m, dms.lat_s, dms.lat_dir, format),
        lon: dms_axis(dms.lon_d, dms.lon_m, dms.lon_s, dms.lon_dir, format),
    }
}

fn ddm_axis(degree: i32, minute: f64, dir: Option<Direction>, format: &PositionFormat) -> String {
    let mut text = degree.to_string();
    text.push_str(&format.deg_symbol);
    text.push_str(&format.dm_separator);
    text.push_str(&format_number_to_string(minute, usize::from(format.min_precision)));
    text.push_str(&format.min_symbol);
    push_direction(&mut text, dir, format);
    text
}

fn dms_axis(
    degree: i32,
    minute: i32,
    second: f64,
    dir: Option<Direction>,
    format: &PositionFormat,
) -> String {
    let mut text = degree.to_string();
    text.push_str(&format.deg_symbol);
    text.push_str(&format.dm_separator);
    text.push_str(&minute.to_string());
    text.push_str(&format.min_symbol);
    text.push_str(&format_number_to_string(second, usize::from(format.sec_precision)));
    text.push_str(&format.sec_symbol);
    push_direction(&mut text, dir, format);
    text
}

// An unset letter still gets the spacer but contributes no character
fn push_direction(text: &mut String, dir: Option<Direction>, format: &PositionFormat) {
    if format.dir_indicator {
        text.push_str(&format.dir_indicator_spacer);
        if let Some(dir) = dir {
            text.push(dir.letter());
        }
    }
}
