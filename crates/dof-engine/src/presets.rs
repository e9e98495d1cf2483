//! One-click camera presets
//!
//! A preset is configuration data, not behavior: lowering one to a
//! [`CameraConfig`] goes through the sensor catalog for the circle of
//! confusion, and from there the engine treats it like any other setup.

use crate::types::{CameraConfig, SensorFormat};
use crate::units::inches_to_mm;

#[cfg(feature = "serde")]
use crate::types::{DofError, Result};

/// A named shortcut for a complete camera setup
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preset {
    pub name: String,
    pub focal_length_mm: f64,
    pub aperture: f64,
    pub sensor_format: SensorFormat,
    pub ideal_subject_distance_inches: f64,
}

impl Preset {
    fn new(
        name: &str,
        focal_length_mm: f64,
        aperture: f64,
        sensor_format: SensorFormat,
        ideal_subject_distance_inches: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            focal_length_mm,
            aperture,
            sensor_format,
            ideal_subject_distance_inches,
        }
    }

    /// Lower the preset to a camera configuration
    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig {
            focal_length_mm: self.focal_length_mm,
            aperture: self.aperture,
            circle_of_confusion_mm: self.sensor_format.circle_of_confusion_mm(),
            subject_distance_mm: inches_to_mm(self.ideal_subject_distance_inches),
        }
    }
}

/// The built-in preset table
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Portrait", 85.0, 1.8, SensorFormat::FullFrame35, 72.0),
        Preset::new("Street", 35.0, 8.0, SensorFormat::ApsC, 120.0),
        Preset::new("Landscape", 24.0, 11.0, SensorFormat::FullFrame35, 360.0),
        Preset::new("Product table", 45.0, 5.6, SensorFormat::MicroFourThirds, 36.0),
        Preset::new("Video call", 4.0, 2.0, SensorFormat::Webcam, 30.0),
        Preset::new("Selfie", 4.25, 1.8, SensorFormat::Smartphone, 24.0),
    ]
}

/// Load a preset list from a JSON file
#[cfg(feature = "serde")]
pub async fn load_presets(path: impl AsRef<std::path::Path>) -> Result<Vec<Preset>> {
    let bytes = tokio::fs::read(path).await?;
    let presets = serde_json::from_slice(&bytes)
        .map_err(|e| DofError::Config(format!("Failed to parse presets: {}", e)))?;
    Ok(presets)
}

/// Save a preset list to a JSON file
#[cfg(feature = "serde")]
pub async fn save_presets(presets: &[Preset], path: impl AsRef<std::path::Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(presets)
        .map_err(|e| DofError::Config(format!("Failed to serialize presets: {}", e)))?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
