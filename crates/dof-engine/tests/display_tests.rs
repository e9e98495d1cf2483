use dof_engine::*;

fn bounds() -> DisplayBounds {
    DisplayBounds::default() // 0..360 inches
}

#[test]
fn test_clamp_in_range_passthrough() {
    let window = clamp_to_display(69.4, FarLimit::Finite(74.8), &bounds());
    assert_eq!(window.near_inches, 69.4);
    assert_eq!(window.far_inches, 74.8);
}

#[test]
fn test_clamp_bounds_out_of_range_limits() {
    let window = clamp_to_display(-5.0, FarLimit::Finite(1000.0), &bounds());
    assert_eq!(window.near_inches, 0.0);
    assert_eq!(window.far_inches, 360.0);

    let window = clamp_to_display(500.0, FarLimit::Finite(1000.0), &bounds());
    assert_eq!(window.near_inches, 360.0);
    assert_eq!(window.far_inches, 360.0);
}

#[test]
fn test_infinite_far_limit_extends_to_display_edge() {
    let window = clamp_to_display(100.0, FarLimit::Infinite, &bounds());
    assert_eq!(window.near_inches, 100.0);
    assert_eq!(window.far_inches, 360.0);
}

#[test]
fn test_inverted_far_limit_resolves_to_display_edge() {
    // a far limit that clamps below the near limit degrades to the edge
    // instead of producing an inverted range
    let window = clamp_to_display(100.0, FarLimit::Finite(-20.0), &bounds());
    assert_eq!(window.near_inches, 100.0);
    assert_eq!(window.far_inches, 360.0);
}

#[test]
fn test_window_ordering_invariant() {
    let bounds = bounds();
    let cases = [
        (-100.0, FarLimit::Finite(-50.0)),
        (0.0, FarLimit::Finite(0.0)),
        (69.4, FarLimit::Finite(74.8)),
        (200.0, FarLimit::Finite(100.0)),
        (400.0, FarLimit::Finite(500.0)),
        (50.0, FarLimit::Infinite),
        (400.0, FarLimit::Infinite),
    ];

    for (near, far) in cases {
        let window = clamp_to_display(near, far, &bounds);
        assert!(
            bounds.min_inches <= window.near_inches
                && window.near_inches <= window.far_inches
                && window.far_inches <= bounds.max_inches,
            "invariant violated for near {:?} far {:?}: {:?}",
            near,
            far,
            window
        );
    }
}

#[test]
fn test_focus_window_from_millimeter_result() {
    // reference scene: near ≈ 1763mm (69.4in), far ≈ 1899mm (74.8in)
    let config = CameraConfig::default();
    let result = evaluate(&config, 24.0);
    let window = focus_window(&result, &bounds());

    assert!((window.near_inches - result.near_limit_mm / 25.4).abs() < 1e-12);
    assert!((window.near_inches - 69.424).abs() < 0.001);
    assert!((window.far_inches - 74.774).abs() < 0.001);
}

#[test]
fn test_focus_window_clamps_infinite_result() {
    // subject far past the hyperfocal distance
    let mut config = CameraConfig::default();
    config.subject_distance_mm = 100_000.0;
    let result = evaluate(&config, 24.0);
    assert!(result.far_limit.is_infinite());

    let window = focus_window(&result, &bounds());
    assert_eq!(window.far_inches, 360.0);
}
