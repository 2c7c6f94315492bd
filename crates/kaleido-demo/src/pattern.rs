// File: crates/kaleido-demo/src/pattern.rs
// Summary: Generated pointer strokes (canvas-local points) standing in for a user's hand.

use clap::ValueEnum;
use kaleido_core::geometry::{centered_to_canvas, polar_to_cartesian};
use kaleido_core::Point2D;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Outward spiral from near the center.
    Spiral,
    /// Three-petal rose curve.
    Rose,
    /// 3:2 Lissajous figure.
    Lissajous,
}

/// `points` samples of the pattern, scaled to stay inside a stage of `side_length`.
pub fn stroke(pattern: Pattern, side_length: f64, points: usize) -> Vec<Point2D> {
    let center = side_length / 2.0;
    let reach = center * 0.9;
    let n = points.max(2);
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            let centered = match pattern {
                Pattern::Spiral => {
                    let angle = t * 6.0 * std::f64::consts::PI;
                    polar_to_cartesian(reach * (0.05 + 0.95 * t), angle)
                }
                Pattern::Rose => {
                    let angle = t * std::f64::consts::PI;
                    polar_to_cartesian(reach * (3.0 * angle).cos(), angle)
                }
                Pattern::Lissajous => {
                    let a = t * std::f64::consts::TAU;
                    Point2D::new(reach * 0.7 * (3.0 * a).sin(), reach * 0.7 * (2.0 * a).sin())
                }
            };
            centered_to_canvas(centered, center)
        })
        .collect()
}
