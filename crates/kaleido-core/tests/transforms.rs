// File: crates/kaleido-core/tests/transforms.rs
// Purpose: Coordinate transform round trips and frame conventions.

use kaleido_core::geometry::{
    canvas_to_centered, cartesian_to_polar, centered_to_canvas, polar_to_cartesian, rotate_about,
    side_length_for, viewport_to_canvas,
};
use kaleido_core::{Padding, Point2D};

const EPS: f64 = 1e-9;

fn sample_points() -> Vec<(f64, f64)> {
    vec![
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, -1.0),
        (123.456, -78.9),
        (-1e6, 3.25),
        (-0.001, -0.002),
        (640.0, 640.0),
    ]
}

#[test]
fn centered_round_trip() {
    for c in [0.0, 100.0, 320.5] {
        for (x, y) in sample_points() {
            let p = Point2D::new(x, y);
            let back = centered_to_canvas(canvas_to_centered(p, c), c);
            assert!((back.x - x).abs() < EPS, "x drift for ({x},{y}) c={c}");
            assert!((back.y - y).abs() < EPS, "y drift for ({x},{y}) c={c}");
        }
    }
}

#[test]
fn centered_frame_is_y_up() {
    // Above the center on screen means positive Y in the centered frame.
    let p = canvas_to_centered(Point2D::new(100.0, 90.0), 100.0);
    assert_eq!(p, Point2D::new(0.0, 10.0));
    let q = canvas_to_centered(Point2D::new(110.0, 100.0), 100.0);
    assert_eq!(q, Point2D::new(10.0, 0.0));
}

#[test]
fn polar_round_trip() {
    for (x, y) in sample_points() {
        let polar = cartesian_to_polar(x, y);
        assert!(polar.radius >= 0.0);
        let back = polar_to_cartesian(polar.radius, polar.angle);
        let tol = EPS * (1.0 + polar.radius);
        assert!((back.x - x).abs() < tol, "x drift for ({x},{y})");
        assert!((back.y - y).abs() < tol, "y drift for ({x},{y})");
    }
}

#[test]
fn origin_has_zero_radius_and_angle() {
    let polar = cartesian_to_polar(0.0, 0.0);
    assert_eq!(polar.radius, 0.0);
    assert_eq!(polar.angle, 0.0);
}

#[test]
fn polar_angle_range() {
    let left = cartesian_to_polar(-1.0, 0.0);
    assert!((left.angle - std::f64::consts::PI).abs() < EPS);
    let down = cartesian_to_polar(0.0, -2.0);
    assert!((down.angle + std::f64::consts::FRAC_PI_2).abs() < EPS);
    assert!((down.radius - 2.0).abs() < EPS);
}

#[test]
fn viewport_offsets_and_padding_are_removed() {
    let p = viewport_to_canvas(
        Point2D::new(250.0, 130.0),
        Point2D::new(100.0, 20.0),
        Padding::new(10, 5),
    );
    assert_eq!(p, Point2D::new(140.0, 105.0));
}

#[test]
fn non_finite_input_propagates() {
    let p = canvas_to_centered(Point2D::new(f64::NAN, 1.0), 10.0);
    assert!(p.x.is_nan());
    let polar = cartesian_to_polar(f64::INFINITY, 0.0);
    assert!(polar.radius.is_infinite());
}

#[test]
fn rotate_quarter_turn() {
    let p = rotate_about(Point2D::new(110.0, 100.0), 100.0, std::f64::consts::FRAC_PI_2);
    assert!((p.x - 100.0).abs() < EPS);
    assert!((p.y - 90.0).abs() < EPS);
}

#[test]
fn side_length_uses_smaller_dimension() {
    assert_eq!(side_length_for(1024, 640), 640);
    assert_eq!(side_length_for(480, 800), 480);
}
