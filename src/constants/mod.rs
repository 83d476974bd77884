//! Constants module for sexagesimal angle arithmetic

/// Minutes of arc in one degree
pub const MINUTES_PER_DEGREE: f64 = 60.0;
/// Seconds of arc in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Seconds of arc in one degree
pub const SECONDS_PER_DEGREE: f64 = MINUTES_PER_DEGREE * SECONDS_PER_MINUTE;

// Display symbols used by the default format
/// Degree sign
pub const DEGREE_SYMBOL: &str = "°";
/// Prime, used for minutes of arc
pub const MINUTE_SYMBOL: &str = "'";
/// Double prime, used for seconds of arc
pub const SECOND_SYMBOL: &str = "\"";
