//! Unit conversions between the millimeter domain and display units
//!
//! All computation happens in millimeters; the UI stores distances in
//! inches and formats them per the active unit system. Everything here is
//! a pure, total function over finite input.

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Inches per meter
pub const INCHES_PER_METER: f64 = 39.3701;

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert inches to millimeters
#[inline]
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Convert millimeters to inches
#[inline]
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Convert meters to inches (scale mark positions only; display rounding
/// happens in the formatters)
#[inline]
pub fn meters_to_inches(meters: f64) -> f64 {
    meters * INCHES_PER_METER
}

/// Convert inches to meters
#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

/// Format inches as feet and inches, e.g. `5' 11.5"`.
///
/// Negative input is a caller error and is not validated here.
pub fn format_imperial(inches: f64, precision: usize) -> String {
    let feet = (inches / INCHES_PER_FOOT).floor() as i64;
    let remaining_inches = inches % INCHES_PER_FOOT;
    format!("{feet}' {remaining_inches:.precision$}\"")
}

/// Format inches as centimeters, e.g. `254.0 cm`
pub fn format_metric(inches: f64, precision: usize) -> String {
    let cm = inches * CM_PER_INCH;
    format!("{cm:.precision$} cm")
}
