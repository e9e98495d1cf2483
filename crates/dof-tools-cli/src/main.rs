use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use dof_engine::units::{format_imperial, format_metric, mm_to_inches};
use dof_engine::{
    DisplayBounds, Evaluation, EvaluationInput, FarLimit, SensorFormat, UnitSystem,
    builtin_presets, evaluate_display,
};

#[derive(Parser)]
#[command(name = "doft", about = "Depth-of-field tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute depth-of-field limits for a camera setup
    Dof {
        /// Subject distance in inches
        #[arg(short, long, default_value = "72")]
        distance: f64,

        /// Focal length in millimeters
        #[arg(short, long, default_value = "50")]
        focal_length: f64,

        /// Aperture f-number
        #[arg(short, long, default_value = "1.8")]
        aperture: f64,

        /// Sensor format
        #[arg(long, default_value = "full-frame35", value_enum)]
        sensor: SensorArg,

        /// Unit system for formatted distances and scale marks
        #[arg(long, default_value = "imperial", value_enum)]
        units: UnitsArg,

        /// Display window maximum in inches
        #[arg(long, default_value = "360")]
        max_inches: f64,

        /// Load the full input from a JSON file instead of flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the resolved input to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Also print the scale marks for the distance slider
        #[arg(long)]
        marks: bool,
    },

    /// List built-in camera presets, or evaluate one
    Presets {
        /// Evaluate the named preset instead of listing
        #[arg(long)]
        apply: Option<String>,
    },

    /// List supported sensor formats and their constants
    Formats,
}

#[derive(Copy, Clone, ValueEnum)]
enum SensorArg {
    Webcam,
    Smartphone,
    FullFrame35,
    ApsC,
    MicroFourThirds,
    MediumFormat,
    LargeFormat,
}

impl From<SensorArg> for SensorFormat {
    fn from(arg: SensorArg) -> Self {
        match arg {
            SensorArg::Webcam => SensorFormat::Webcam,
            SensorArg::Smartphone => SensorFormat::Smartphone,
            SensorArg::FullFrame35 => SensorFormat::FullFrame35,
            SensorArg::ApsC => SensorFormat::ApsC,
            SensorArg::MicroFourThirds => SensorFormat::MicroFourThirds,
            SensorArg::MediumFormat => SensorFormat::MediumFormat,
            SensorArg::LargeFormat => SensorFormat::LargeFormat,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum UnitsArg {
    Imperial,
    Metric,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Imperial => UnitSystem::Imperial,
            UnitsArg::Metric => UnitSystem::Metric,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dof {
            distance,
            focal_length,
            aperture,
            sensor,
            units,
            max_inches,
            config,
            save_config,
            marks,
        } => {
            let input = match config {
                Some(path) => EvaluationInput::load(&path).await?,
                None => EvaluationInput {
                    subject_distance_inches: distance,
                    focal_length_mm: focal_length,
                    aperture,
                    sensor_format: sensor.into(),
                    unit_system: units.into(),
                    bounds: DisplayBounds {
                        min_inches: 0.0,
                        max_inches,
                    },
                },
            };
            input.validate()?;

            if let Some(path) = save_config {
                input.save(&path).await?;
                println!("Config → {}", path.display());
            }

            let evaluation = evaluate_display(&input);
            print_evaluation(&input, &evaluation, marks);
        }

        Commands::Presets { apply } => match apply {
            Some(name) => {
                let presets = builtin_presets();
                let preset = presets
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(&name))
                    .ok_or_else(|| anyhow::anyhow!("Unknown preset: {}", name))?;

                let input = EvaluationInput {
                    subject_distance_inches: preset.ideal_subject_distance_inches,
                    focal_length_mm: preset.focal_length_mm,
                    aperture: preset.aperture,
                    sensor_format: preset.sensor_format,
                    unit_system: UnitSystem::Imperial,
                    bounds: DisplayBounds::default(),
                };
                println!(
                    "{}: {}mm f/{} on {}",
                    preset.name,
                    preset.focal_length_mm,
                    preset.aperture,
                    preset.sensor_format.name()
                );
                let evaluation = evaluate_display(&input);
                print_evaluation(&input, &evaluation, false);
            }
            None => {
                println!("Built-in presets:");
                for preset in builtin_presets() {
                    println!(
                        "  {:<14} {}mm f/{} on {}, subject at {}in",
                        preset.name,
                        preset.focal_length_mm,
                        preset.aperture,
                        preset.sensor_format.name(),
                        preset.ideal_subject_distance_inches
                    );
                }
            }
        },

        Commands::Formats => {
            println!("Sensor formats:");
            for format in SensorFormat::ALL {
                println!(
                    "  {:<20} CoC {}mm, height {}mm",
                    format.name(),
                    format.circle_of_confusion_mm(),
                    format.sensor_height_mm()
                );
            }
        }
    }

    Ok(())
}

fn format_distance(inches: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Imperial => format_imperial(inches, 1),
        UnitSystem::Metric => format_metric(inches, 1),
    }
}

fn print_evaluation(input: &EvaluationInput, evaluation: &Evaluation, with_marks: bool) {
    let units = input.unit_system;

    println!(
        "Subject distance: {}",
        format_distance(input.subject_distance_inches, units)
    );
    println!(
        "Hyperfocal:       {}",
        format_distance(mm_to_inches(evaluation.dof.hyperfocal_mm), units)
    );
    println!(
        "Near limit:       {}",
        format_distance(mm_to_inches(evaluation.dof.near_limit_mm), units)
    );
    match evaluation.dof.far_limit {
        FarLimit::Finite(mm) => {
            println!("Far limit:        {}", format_distance(mm_to_inches(mm), units));
        }
        FarLimit::Infinite => {
            println!("Far limit:        infinity (everything past the near limit is sharp)");
        }
    }
    println!(
        "Display window:   {} .. {}",
        format_distance(evaluation.window.near_inches, units),
        format_distance(evaluation.window.far_inches, units)
    );
    println!(
        "Vertical FoV:     {:.1}°",
        evaluation.dof.vertical_fov_degrees
    );

    if with_marks {
        println!("Scale marks:");
        for mark in &evaluation.marks {
            println!("  {:>6.1}in  {}", mark.position_inches, mark.label);
        }
    }
}
