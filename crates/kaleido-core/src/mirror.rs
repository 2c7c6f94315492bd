// File: crates/kaleido-core/src/mirror.rs
// Summary: Radial mirroring of a seed point around the stage center, and the mark surface seam.

use crate::geometry::rotate_about;
use crate::settings::{DrawSettings, Rgb};
use crate::types::Point2D;

/// Anything that can paint filled discs in canvas-local pixels.
///
/// `begin_mark`/`end_mark` bracket one whole mirrored batch; implementations
/// must undo any paint state changes made inside the bracket.
pub trait MarkSurface {
    fn begin_mark(&mut self);
    fn end_mark(&mut self);
    fn fill_disc(&mut self, at: Point2D, radius: f32, color: Rgb);
}

/// The mirrored points of one seed, starting with the seed itself.
///
/// Each point is produced by rotating the previous one by `step`, not by
/// rotating the seed by a multiple of `step`, so rounding error accumulates
/// along the sequence.
#[derive(Clone, Debug)]
pub struct MirrorPoints {
    next: Point2D,
    center: f64,
    step: f64,
    remaining: u32,
}

impl MirrorPoints {
    pub fn new(seed: Point2D, center: f64, sector_count: u32) -> Self {
        Self {
            next: seed,
            center,
            step: std::f64::consts::TAU / sector_count as f64,
            remaining: sector_count,
        }
    }
}

impl Iterator for MirrorPoints {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = rotate_about(current, self.center, self.step);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MirrorPoints {}

/// Paint `settings.sector_count` marks for one canvas-local seed point.
pub fn mirror<S: MarkSurface + ?Sized>(
    seed: Point2D,
    center: f64,
    settings: &DrawSettings,
    surface: &mut S,
) {
    surface.begin_mark();
    for p in MirrorPoints::new(seed, center, settings.sector_count) {
        surface.fill_disc(p, settings.mark_radius, settings.color);
    }
    surface.end_mark();
}
