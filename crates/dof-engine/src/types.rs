use thiserror::Error;

#[derive(Error, Debug)]
pub enum DofError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DofError>;

/// Measurement system for on-screen formatting and scale marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    /// Feet and inches
    #[default]
    Imperial,
    /// Meters and centimeters
    Metric,
}

/// Sensor formats and their depth-of-field constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorFormat {
    Webcam,
    Smartphone,
    /// 35mm full frame (24×36mm)
    FullFrame35,
    ApsC,
    MicroFourThirds,
    MediumFormat,
    LargeFormat,
    Custom {
        circle_of_confusion_mm: f64,
        sensor_height_mm: f64,
    },
}

impl SensorFormat {
    /// Every named format, in picker order
    pub const ALL: [SensorFormat; 7] = [
        SensorFormat::Webcam,
        SensorFormat::Smartphone,
        SensorFormat::FullFrame35,
        SensorFormat::ApsC,
        SensorFormat::MicroFourThirds,
        SensorFormat::MediumFormat,
        SensorFormat::LargeFormat,
    ];

    /// Largest blur spot still perceived as a point (mm)
    pub fn circle_of_confusion_mm(self) -> f64 {
        match self {
            SensorFormat::Webcam => 0.002,
            SensorFormat::Smartphone => 0.002,
            SensorFormat::FullFrame35 => 0.029,
            SensorFormat::ApsC => 0.019,
            SensorFormat::MicroFourThirds => 0.015,
            SensorFormat::MediumFormat => 0.043,
            SensorFormat::LargeFormat => 0.1,
            SensorFormat::Custom {
                circle_of_confusion_mm,
                ..
            } => circle_of_confusion_mm,
        }
    }

    /// Vertical sensor dimension (mm), used for the field-of-view angle
    pub fn sensor_height_mm(self) -> f64 {
        match self {
            SensorFormat::Webcam => 3.6,
            SensorFormat::Smartphone => 7.3,
            SensorFormat::FullFrame35 => 24.0,
            SensorFormat::ApsC => 15.6,
            SensorFormat::MicroFourThirds => 13.0,
            SensorFormat::MediumFormat => 33.0,
            SensorFormat::LargeFormat => 102.0,
            SensorFormat::Custom {
                sensor_height_mm, ..
            } => sensor_height_mm,
        }
    }

    /// Display name, also the lookup key for [`SensorFormat::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            SensorFormat::Webcam => "Webcam",
            SensorFormat::Smartphone => "Smartphone",
            SensorFormat::FullFrame35 => "35mm (full frame)",
            SensorFormat::ApsC => "APS-C",
            SensorFormat::MicroFourThirds => "Micro Four Thirds",
            SensorFormat::MediumFormat => "Medium Format",
            SensorFormat::LargeFormat => "Large Format",
            SensorFormat::Custom { .. } => "Custom",
        }
    }

    /// Look up a named format; `None` for unknown names (a configuration
    /// error on the caller's side, not a condition the engine recovers from)
    pub fn from_name(name: &str) -> Option<Self> {
        SensorFormat::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Camera setup for one depth-of-field computation. All distances are
/// millimeters; all fields must be positive (aperture and circle of
/// confusion are divisors).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    pub focal_length_mm: f64,
    pub aperture: f64,
    pub circle_of_confusion_mm: f64,
    pub subject_distance_mm: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        // 50mm f/1.8 on full frame, subject 72in away
        Self {
            focal_length_mm: 50.0,
            aperture: 1.8,
            circle_of_confusion_mm: 0.029,
            subject_distance_mm: 1828.8,
        }
    }
}

impl CameraConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.focal_length_mm <= 0.0 {
            return Err(DofError::Config(
                "Focal length must be positive".to_string(),
            ));
        }
        if self.aperture <= 0.0 {
            return Err(DofError::Config("Aperture must be positive".to_string()));
        }
        if self.circle_of_confusion_mm <= 0.0 {
            return Err(DofError::Config(
                "Circle of confusion must be positive".to_string(),
            ));
        }
        if self.subject_distance_mm <= 0.0 {
            return Err(DofError::Config(
                "Subject distance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Far focus limit. Once the subject sits at or beyond the hyperfocal
/// distance the far denominator goes non-positive, which means everything
/// past the near limit is acceptably sharp; that outcome is a distinct
/// variant rather than a negative or divergent number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FarLimit {
    /// Far limit at a concrete distance
    Finite(f64),
    /// Everything beyond the near limit is in focus
    Infinite,
}

impl FarLimit {
    pub fn is_infinite(self) -> bool {
        matches!(self, FarLimit::Infinite)
    }

    /// The distance when finite
    pub fn finite(self) -> Option<f64> {
        match self {
            FarLimit::Finite(d) => Some(d),
            FarLimit::Infinite => None,
        }
    }

    /// Apply a unit conversion to the finite case
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> FarLimit {
        match self {
            FarLimit::Finite(d) => FarLimit::Finite(f(d)),
            FarLimit::Infinite => FarLimit::Infinite,
        }
    }
}

/// Computed depth-of-field quantities, in millimeters. Derived from a
/// [`CameraConfig`] on every input change and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DofResult {
    /// Focus distance beyond which everything up to infinity is sharp
    pub hyperfocal_mm: f64,
    pub near_limit_mm: f64,
    pub far_limit: FarLimit,
    /// Vertical field of view, degrees in (0, 180)
    pub vertical_fov_degrees: f64,
}

/// Fixed display window for the distance scale, in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayBounds {
    pub min_inches: f64,
    pub max_inches: f64,
}

impl Default for DisplayBounds {
    fn default() -> Self {
        // 0 to 30 feet
        Self {
            min_inches: 0.0,
            max_inches: 360.0,
        }
    }
}

/// Near/far focus limits bounded into the display window. Always satisfies
/// `min_inches <= near_inches <= far_inches <= max_inches`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusWindow {
    pub near_inches: f64,
    pub far_inches: f64,
}

/// One labeled tick on the distance scale
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMark {
    pub position_inches: f64,
    pub label: String,
}
