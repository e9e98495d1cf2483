//! Scale mark generation for the distance slider
//!
//! Tick density should stay roughly constant in the units the user is
//! thinking in, so each unit system gets its own strategy behind the one
//! [`generate_marks`] entry point: a 2-foot grid for imperial, a 1-meter
//! grid for metric. Adding a unit system means adding a strategy here,
//! not touching callers.

use crate::types::{DisplayBounds, ScaleMark, UnitSystem};
use crate::units::{INCHES_PER_FOOT, inches_to_meters, meters_to_inches};

/// Imperial tick spacing (2 feet)
const IMPERIAL_STEP_INCHES: f64 = 24.0;

/// Generate the ordered tick marks for the distance scale, ascending by
/// position. Pure function of its inputs; regenerated from scratch on
/// every unit-system or bounds change.
pub fn generate_marks(system: UnitSystem, bounds: &DisplayBounds) -> Vec<ScaleMark> {
    match system {
        UnitSystem::Imperial => imperial_marks(bounds.max_inches),
        UnitSystem::Metric => metric_marks(bounds.max_inches),
    }
}

/// Marks every 2 feet, labeled in whole feet. The final mark sits one
/// step past the display maximum so the scale closes on a labeled
/// boundary.
fn imperial_marks(max_inches: f64) -> Vec<ScaleMark> {
    let steps = (max_inches / IMPERIAL_STEP_INCHES).floor() as usize + 1;
    (1..=steps)
        .map(|i| {
            let position_inches = i as f64 * IMPERIAL_STEP_INCHES;
            ScaleMark {
                position_inches,
                label: format!("{}", (position_inches / INCHES_PER_FOOT) as i64),
            }
        })
        .collect()
}

/// One mark per whole meter, positions converted back to inches
fn metric_marks(max_inches: f64) -> Vec<ScaleMark> {
    let whole_meters = inches_to_meters(max_inches).floor() as usize + 1;
    (1..=whole_meters)
        .map(|n| ScaleMark {
            position_inches: meters_to_inches(n as f64),
            label: format!("{n}m"),
        })
        .collect()
}
