use dof_engine::*;

#[test]
fn test_sensor_format_constants() {
    assert_eq!(SensorFormat::Webcam.circle_of_confusion_mm(), 0.002);
    assert_eq!(SensorFormat::Webcam.sensor_height_mm(), 3.6);

    assert_eq!(SensorFormat::Smartphone.circle_of_confusion_mm(), 0.002);
    assert_eq!(SensorFormat::Smartphone.sensor_height_mm(), 7.3);

    assert_eq!(SensorFormat::FullFrame35.circle_of_confusion_mm(), 0.029);
    assert_eq!(SensorFormat::FullFrame35.sensor_height_mm(), 24.0);

    assert_eq!(SensorFormat::ApsC.circle_of_confusion_mm(), 0.019);
    assert_eq!(SensorFormat::ApsC.sensor_height_mm(), 15.6);

    assert_eq!(SensorFormat::MicroFourThirds.circle_of_confusion_mm(), 0.015);
    assert_eq!(SensorFormat::MicroFourThirds.sensor_height_mm(), 13.0);

    assert_eq!(SensorFormat::MediumFormat.circle_of_confusion_mm(), 0.043);
    assert_eq!(SensorFormat::LargeFormat.circle_of_confusion_mm(), 0.1);

    let custom = SensorFormat::Custom {
        circle_of_confusion_mm: 0.05,
        sensor_height_mm: 40.0,
    };
    assert_eq!(custom.circle_of_confusion_mm(), 0.05);
    assert_eq!(custom.sensor_height_mm(), 40.0);
}

#[test]
fn test_sensor_format_lookup_by_name() {
    for format in SensorFormat::ALL {
        assert_eq!(SensorFormat::from_name(format.name()), Some(format));
    }

    assert_eq!(
        SensorFormat::from_name("35mm (full frame)"),
        Some(SensorFormat::FullFrame35)
    );
    assert_eq!(SensorFormat::from_name("APS-C"), Some(SensorFormat::ApsC));
    assert_eq!(SensorFormat::from_name("Daguerreotype"), None);
}

#[test]
fn test_camera_config_default() {
    let config = CameraConfig::default();
    assert_eq!(config.focal_length_mm, 50.0);
    assert_eq!(config.aperture, 1.8);
    assert_eq!(config.circle_of_confusion_mm, 0.029);
    // 72 inches
    assert_eq!(config.subject_distance_mm, 1828.8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_camera_config_validation() {
    let mut config = CameraConfig::default();
    config.aperture = 0.0;
    match config.validate() {
        Err(DofError::Config(msg)) => assert!(msg.contains("Aperture")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let mut config = CameraConfig::default();
    config.circle_of_confusion_mm = -0.029;
    assert!(config.validate().is_err());

    let mut config = CameraConfig::default();
    config.focal_length_mm = 0.0;
    assert!(config.validate().is_err());

    let mut config = CameraConfig::default();
    config.subject_distance_mm = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_far_limit_helpers() {
    let finite = FarLimit::Finite(1899.0);
    assert!(!finite.is_infinite());
    assert_eq!(finite.finite(), Some(1899.0));
    assert_eq!(finite.map(|mm| mm / 25.4), FarLimit::Finite(1899.0 / 25.4));

    let infinite = FarLimit::Infinite;
    assert!(infinite.is_infinite());
    assert_eq!(infinite.finite(), None);
    assert_eq!(infinite.map(|mm| mm / 25.4), FarLimit::Infinite);
}

#[test]
fn test_display_bounds_default() {
    let bounds = DisplayBounds::default();
    assert_eq!(bounds.min_inches, 0.0);
    // 30 feet
    assert_eq!(bounds.max_inches, 360.0);
}

#[test]
fn test_unit_system_default() {
    assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
}
