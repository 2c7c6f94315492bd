// File: crates/kaleido-core/src/types.rs
// Summary: Shared value types and constants (points, padding, stage sizes).

/// Default stage side length in pixels when no viewport is known.
pub const SIDE_LENGTH: i32 = 640;
/// Edge length of gallery snapshots in pixels.
pub const SNAPSHOT_SIZE: u32 = 200;
/// Key the gallery lives under in the key-value store.
pub const GALLERY_KEY: &str = "gallery";

/// A point in one coordinate frame (viewport, canvas-local or centered).
/// The frame is implied by the function that produced it; never feed a point
/// into a function that expects a different frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`, both in the same frame.
    pub fn distance_to(&self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Polar coordinates; `angle` is in radians and is not normalised.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PolarPoint {
    pub radius: f64,
    pub angle: f64,
}

/// Canvas padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
}

impl Padding {
    pub const fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }
}
