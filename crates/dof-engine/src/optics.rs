//! Depth-of-field and field-of-view formulas
//!
//! The formulas are the standard thin-lens approximations:
//!
//! ```text
//! H    = f + f² / (N·c)
//! far  = H·s / (H − (s − f))
//! near = H·s / (H + (s − f))
//! vfov = 2·atan(h / 2 / f)
//! ```
//!
//! where `f` is focal length, `N` the f-number, `c` the circle of
//! confusion, `s` the subject distance and `h` the sensor height, all in
//! millimeters.

use crate::types::{CameraConfig, DofResult, FarLimit};

/// Focus distance beyond which everything up to infinity is acceptably
/// sharp (mm)
pub fn hyperfocal_distance_mm(config: &CameraConfig) -> f64 {
    let f = config.focal_length_mm;
    f + f * f / (config.aperture * config.circle_of_confusion_mm)
}

/// Near and far focus limits (mm) around the subject distance.
///
/// When `s − f >= H` the far denominator is non-positive: the depth of
/// field extends to infinity and the far limit is [`FarLimit::Infinite`]
/// rather than a negative distance.
pub fn depth_of_field(config: &CameraConfig) -> (f64, FarLimit) {
    let h = hyperfocal_distance_mm(config);
    let s = config.subject_distance_mm;
    let f = config.focal_length_mm;

    let near_mm = h * s / (h + (s - f));
    let far = if s - f >= h {
        FarLimit::Infinite
    } else {
        FarLimit::Finite(h * s / (h - (s - f)))
    };

    (near_mm, far)
}

/// Vertical field-of-view angle in degrees, in (0, 180) for positive
/// inputs
pub fn vertical_fov_degrees(sensor_height_mm: f64, focal_length_mm: f64) -> f64 {
    (2.0 * (sensor_height_mm / 2.0 / focal_length_mm).atan()).to_degrees()
}

/// Compute the full [`DofResult`] for one camera setup
pub fn evaluate(config: &CameraConfig, sensor_height_mm: f64) -> DofResult {
    let (near_limit_mm, far_limit) = depth_of_field(config);
    DofResult {
        hyperfocal_mm: hyperfocal_distance_mm(config),
        near_limit_mm,
        far_limit,
        vertical_fov_degrees: vertical_fov_degrees(sensor_height_mm, config.focal_length_mm),
    }
}
