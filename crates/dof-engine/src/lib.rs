pub mod display;
pub mod dof;
pub mod marks;
pub mod optics;
mod presets;
mod types;
pub mod units;

pub use display::{clamp_to_display, focus_window};
pub use dof::{Evaluation, EvaluationInput, evaluate_display};
pub use marks::generate_marks;
pub use optics::{depth_of_field, evaluate, hyperfocal_distance_mm, vertical_fov_degrees};
pub use presets::*;
pub use types::*;
