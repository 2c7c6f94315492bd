// File: crates/kaleido-core/src/rotation.rs
// Summary: Display rotation driven once per animation frame by the rotation velocity.

/// Accumulated display rotation, in degrees.
///
/// Each frame with a non-zero velocity `v` adds `2 * sqrt(v * v)`; the sign
/// of `v` only picks the displayed direction. Flipping the sign therefore
/// mirrors the accumulated angle instead of reversing smoothly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    current: f64,
    velocity: f64,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Accumulated magnitude; survives a velocity of 0.
    pub fn accumulated(&self) -> f64 {
        self.current
    }

    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// One animation frame.
    pub fn advance(&mut self) {
        if self.velocity != 0.0 {
            self.current += 2.0 * (self.velocity * self.velocity).sqrt();
        }
    }

    /// Rotation to display, in degrees clockwise; `None` while stopped.
    pub fn transform(&self) -> Option<f64> {
        if self.velocity < 0.0 {
            Some(-self.current)
        } else if self.velocity > 0.0 {
            Some(self.current)
        } else {
            None
        }
    }
}
