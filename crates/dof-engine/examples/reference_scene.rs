use dof_engine::units::{format_imperial, mm_to_inches};
use dof_engine::*;

// Walk the default 50mm f/1.8 portrait scene through the whole pipeline
// and print what a frontend would render.
fn main() {
    let input = EvaluationInput::default();
    let evaluation = evaluate_display(&input);

    println!("Camera: {:?}", input.camera_config());
    println!(
        "Hyperfocal: {}",
        format_imperial(mm_to_inches(evaluation.dof.hyperfocal_mm), 1)
    );
    println!(
        "Near limit: {}",
        format_imperial(evaluation.window.near_inches, 1)
    );
    match evaluation.dof.far_limit {
        FarLimit::Finite(_) => println!(
            "Far limit:  {}",
            format_imperial(evaluation.window.far_inches, 1)
        ),
        FarLimit::Infinite => println!("Far limit:  infinity"),
    }
    println!(
        "Vertical FoV: {:.1}°",
        evaluation.dof.vertical_fov_degrees
    );

    println!("Scale marks:");
    for mark in &evaluation.marks {
        println!("  {:>5.0}in  {}", mark.position_inches, mark.label);
    }
}
