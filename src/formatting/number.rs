//! Fixed-precision number formatting
//!
//! A precision of zero truncates toward zero, while any positive precision
//! rounds through the standard fixed-point formatter. Display fixtures
//! depend on this asymmetry.

/// Largest precision the standard formatter accepts
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// Formats `number` with exactly `precision` digits after the decimal point
///
/// With `precision == 0` the fractional part is discarded without rounding
/// and the result is a plain integer (`-0.7` renders as `"0"`). Non-finite
/// values render as `NaN`, `inf` and `-inf`. Precisions above
/// [`MAX_PRECISION`] are rendered at [`MAX_PRECISION`].
///
/// # Examples
///
/// ```rust
/// use position::format_number_to_string;
///
/// assert_eq!(format_number_to_string(12.3456789, 0), "12");
/// assert_eq!(format_number_to_string(12.3456789, 2), "12.35");
/// assert_eq!(format_number_to_string(12.3456789, 10), "12.3456789000");
/// ```
pub fn format_number_to_string(number: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    if precision == 0 {
        let whole = number.trunc();
        if whole == 0.0 {
            // Avoid "-0" for values in (-1, 0)
            "0".to_string()
        } else {
            format!("{:.0}", whole)
        }
    } else {
        format!("{:.*}", precision, number)
    }
}

/// Quantizes `number` to the value [`format_number_to_string`] would print
pub fn format_number(number: f64, precision: usize) -> f64 {
    let text = format_number_to_string(number, precision);
    // Every string produced above is valid `f64` syntax
    text.parse().unwrap_or(number)
}
