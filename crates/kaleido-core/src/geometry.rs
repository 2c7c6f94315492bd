// File: crates/kaleido-core/src/geometry.rs
// Summary: Coordinate transforms between viewport, canvas-local, centered and polar frames.
//
// Frames:
// - viewport: window/page pixels, origin top-left, Y down.
// - canvas-local: stage pixels, origin at the top-left content corner, Y down.
// - centered: origin at the stage center, Y up.
//
// None of these functions validate their input; NaN and infinities pass through.

use crate::types::{Padding, Point2D, PolarPoint};

/// Side length of the square stage for a viewport: the smaller dimension.
#[inline]
pub fn side_length_for(width: u32, height: u32) -> u32 {
    width.min(height)
}

/// Center offset of a square stage with the given side length.
#[inline]
pub fn center_for(side_length: i32) -> f64 {
    side_length as f64 / 2.0
}

/// Map a viewport point into canvas-local pixels by removing the canvas origin
/// (its bounding-box top-left in the viewport) and the canvas padding.
#[inline]
pub fn viewport_to_canvas(viewport: Point2D, canvas_origin: Point2D, padding: Padding) -> Point2D {
    Point2D {
        x: viewport.x - canvas_origin.x - padding.left as f64,
        y: viewport.y - canvas_origin.y - padding.top as f64,
    }
}

#[inline]
pub fn canvas_to_centered(canvas: Point2D, center: f64) -> Point2D {
    Point2D {
        x: canvas.x - center,
        y: -(canvas.y - center),
    }
}

#[inline]
pub fn centered_to_canvas(centered: Point2D, center: f64) -> Point2D {
    Point2D {
        x: centered.x + center,
        y: -centered.y + center,
    }
}

/// `atan2(0, 0)` is 0, so the origin maps to radius 0, angle 0.
#[inline]
pub fn cartesian_to_polar(x: f64, y: f64) -> PolarPoint {
    PolarPoint {
        radius: (x * x + y * y).sqrt(),
        angle: y.atan2(x),
    }
}

#[inline]
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point2D {
    Point2D {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
    }
}

/// Rotate a canvas-local point about the stage center by `step` radians
/// (counter-clockwise on screen, since the centered frame is Y up).
pub fn rotate_about(canvas: Point2D, center: f64, step: f64) -> Point2D {
    let centered = canvas_to_centered(canvas, center);
    let polar = cartesian_to_polar(centered.x, centered.y);
    let rotated = polar_to_cartesian(polar.radius, polar.angle + step);
    centered_to_canvas(rotated, center)
}
