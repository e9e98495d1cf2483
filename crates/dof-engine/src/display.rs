//! Bounding of near/far limits into the fixed display window

use crate::types::{DisplayBounds, DofResult, FarLimit, FocusWindow};
use crate::units::mm_to_inches;

/// Clamp near/far limits (inches) into the display window.
///
/// The far limit falls back to `max_inches` when it is infinite, or when
/// clamping would leave it below the near limit, so the output always
/// satisfies `min <= near <= far <= max`.
pub fn clamp_to_display(
    near_inches: f64,
    far_inches: FarLimit,
    bounds: &DisplayBounds,
) -> FocusWindow {
    let near = near_inches.clamp(bounds.min_inches, bounds.max_inches);
    let far = match far_inches {
        FarLimit::Infinite => bounds.max_inches,
        FarLimit::Finite(f) => {
            let clamped = f.clamp(bounds.min_inches, bounds.max_inches);
            if clamped < near {
                bounds.max_inches
            } else {
                clamped
            }
        }
    };
    FocusWindow {
        near_inches: near,
        far_inches: far,
    }
}

/// Convert a millimeter [`DofResult`] to its clamped on-screen window
pub fn focus_window(result: &DofResult, bounds: &DisplayBounds) -> FocusWindow {
    clamp_to_display(
        mm_to_inches(result.near_limit_mm),
        result.far_limit.map(mm_to_inches),
        bounds,
    )
}
