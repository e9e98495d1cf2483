//! Top-level evaluation: the in-process contract the UI layer calls
//!
//! The UI owns the raw slider/selector values and hands them over by value
//! on every change; [`evaluate_display`] returns everything a frontend
//! needs to redraw: the raw millimeter result, the clamped on-screen
//! window, and the tick marks for the active unit system.

use crate::display::focus_window;
use crate::marks::generate_marks;
use crate::optics;
use crate::types::*;
use crate::units::inches_to_mm;

/// Raw UI inputs for one evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationInput {
    pub subject_distance_inches: f64,
    pub focal_length_mm: f64,
    /// f-number
    pub aperture: f64,
    pub sensor_format: SensorFormat,
    pub unit_system: UnitSystem,
    pub bounds: DisplayBounds,
}

impl Default for EvaluationInput {
    fn default() -> Self {
        Self {
            subject_distance_inches: 72.0,
            focal_length_mm: 50.0,
            aperture: 1.8,
            sensor_format: SensorFormat::FullFrame35,
            unit_system: UnitSystem::Imperial,
            bounds: DisplayBounds::default(),
        }
    }
}

impl EvaluationInput {
    /// Load an input from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let input = serde_json::from_slice(&bytes)
            .map_err(|e| DofError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(input)
    }

    /// Save the input to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DofError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the input. The engine itself assumes well-formed values
    /// (slider ranges are the caller's responsibility); this is for
    /// consumers that accept input from outside those ranges.
    pub fn validate(&self) -> Result<()> {
        self.camera_config().validate()?;
        if self.bounds.max_inches <= self.bounds.min_inches {
            return Err(DofError::Config(
                "Display maximum must exceed the minimum".to_string(),
            ));
        }
        Ok(())
    }

    /// The millimeter-domain camera configuration for these inputs
    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig {
            focal_length_mm: self.focal_length_mm,
            aperture: self.aperture,
            circle_of_confusion_mm: self.sensor_format.circle_of_confusion_mm(),
            subject_distance_mm: inches_to_mm(self.subject_distance_inches),
        }
    }
}

/// Everything a frontend needs to redraw after one input change
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Raw millimeter quantities
    pub dof: DofResult,
    /// Near/far limits clamped into the display window (inches)
    pub window: FocusWindow,
    /// Tick marks for the active unit system
    pub marks: Vec<ScaleMark>,
}

/// Evaluate one set of UI inputs. Synchronous and pure; recomputed from
/// scratch on every call.
pub fn evaluate_display(input: &EvaluationInput) -> Evaluation {
    let config = input.camera_config();
    let dof = optics::evaluate(&config, input.sensor_format.sensor_height_mm());
    Evaluation {
        window: focus_window(&dof, &input.bounds),
        marks: generate_marks(input.unit_system, &input.bounds),
        dof,
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // SensorFormat serializes as its display name, or as a map of the two
    // constants for the Custom escape hatch
    impl Serialize for SensorFormat {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                SensorFormat::Custom {
                    circle_of_confusion_mm,
                    sensor_height_mm,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("circle_of_confusion_mm", circle_of_confusion_mm)?;
                    s.serialize_field("sensor_height_mm", sensor_height_mm)?;
                    s.end()
                }
                named => serializer.serialize_str(named.name()),
            }
        }
    }

    impl<'de> Deserialize<'de> for SensorFormat {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct SensorFormatVisitor;

            impl<'de> Visitor<'de> for SensorFormatVisitor {
                type Value = SensorFormat;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a sensor format name or custom constants")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<SensorFormat, E>
                where
                    E: de::Error,
                {
                    SensorFormat::from_name(value).ok_or_else(|| {
                        de::Error::unknown_variant(
                            value,
                            &[
                                "Webcam",
                                "Smartphone",
                                "35mm (full frame)",
                                "APS-C",
                                "Micro Four Thirds",
                                "Medium Format",
                                "Large Format",
                                "Custom",
                            ],
                        )
                    })
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<SensorFormat, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut circle_of_confusion_mm = None;
                    let mut sensor_height_mm = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "circle_of_confusion_mm" => {
                                circle_of_confusion_mm = Some(map.next_value()?);
                            }
                            "sensor_height_mm" => {
                                sensor_height_mm = Some(map.next_value()?);
                            }
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (circle_of_confusion_mm, sensor_height_mm) {
                        (Some(c), Some(h)) => Ok(SensorFormat::Custom {
                            circle_of_confusion_mm: c,
                            sensor_height_mm: h,
                        }),
                        _ => Err(de::Error::missing_field(
                            "circle_of_confusion_mm or sensor_height_mm",
                        )),
                    }
                }
            }

            deserializer.deserialize_any(SensorFormatVisitor)
        }
    }
}
