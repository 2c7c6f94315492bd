// File: crates/kaleido-core/src/session.rs
// Summary: Session controller: owns settings, stage, rotation and gallery, and handles input events.

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::gallery::{Gallery, KeyValueStore};
use crate::geometry::viewport_to_canvas;
use crate::mirror::mirror;
use crate::rotation::Rotation;
use crate::settings::{DrawSettings, SettingUpdate};
use crate::stage::Stage;
use crate::types::{Padding, Point2D, SNAPSHOT_SIZE};

/// Button-style controls, as opposed to value settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Export a snapshot and put it at the front of the gallery.
    Snapshot,
    EraseGallery,
    /// Clear the stage and stop the rotation.
    Reset,
}

/// One drawing session. Every handler runs to completion before returning,
/// so a mirrored batch is never half-drawn when control goes back to the caller.
pub struct Session<S> {
    settings: DrawSettings,
    stage: Stage,
    rotation: Rotation,
    gallery: Gallery<S>,
    canvas_origin: Point2D,
    padding: Padding,
    snapshot_size: u32,
    drawing: bool,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(settings: DrawSettings, stage: Stage, gallery: Gallery<S>) -> Self {
        let mut rotation = Rotation::new();
        rotation.set_velocity(settings.rotation_velocity);
        Self {
            settings,
            stage,
            rotation,
            gallery,
            canvas_origin: Point2D::origin(),
            padding: Padding::default(),
            snapshot_size: SNAPSHOT_SIZE,
            drawing: false,
        }
    }

    /// Where the stage's bounding box sits in the viewport, and its padding.
    pub fn with_layout(mut self, canvas_origin: Point2D, padding: Padding) -> Self {
        self.canvas_origin = canvas_origin;
        self.padding = padding;
        self
    }

    pub fn with_snapshot_size(mut self, size: u32) -> Self {
        self.snapshot_size = size;
        self
    }

    pub fn set_canvas_origin(&mut self, canvas_origin: Point2D) {
        self.canvas_origin = canvas_origin;
    }

    pub fn canvas_origin(&self) -> Point2D {
        self.canvas_origin
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn gallery(&self) -> &Gallery<S> {
        &self.gallery
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn pointer_down(&mut self, viewport: Point2D) {
        self.drawing = true;
        self.draw_at_viewport(viewport);
    }

    /// Draws only while a stroke is in progress. Returns whether it drew.
    pub fn pointer_move(&mut self, viewport: Point2D) -> bool {
        if !self.drawing {
            return false;
        }
        self.draw_at_viewport(viewport);
        true
    }

    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    pub fn draw_at_viewport(&mut self, viewport: Point2D) {
        let canvas = viewport_to_canvas(viewport, self.canvas_origin, self.padding);
        self.draw_at_canvas(canvas);
    }

    /// Mirror one canvas-local seed with the current settings.
    pub fn draw_at_canvas(&mut self, seed: Point2D) {
        trace!(x = seed.x, y = seed.y, sectors = self.settings.sector_count, "mirror");
        let center = self.stage.center();
        mirror(seed, center, &self.settings, &mut self.stage);
    }

    pub fn update_setting(&mut self, update: SettingUpdate) {
        debug!(?update, "setting changed");
        self.settings.apply(update);
        if let SettingUpdate::RotationVelocity(v) = update {
            self.rotation.set_velocity(v);
        }
    }

    pub fn control(&mut self, control: Control) -> Result<()> {
        match control {
            Control::Snapshot => {
                self.snapshot()?;
            }
            Control::EraseGallery => {
                self.gallery.erase()?;
                info!(key = self.gallery.key(), "gallery erased");
            }
            Control::Reset => {
                self.stage.reset();
                self.update_setting(SettingUpdate::RotationVelocity(0.0));
                info!("stage reset");
            }
        }
        Ok(())
    }

    /// Export a snapshot, save it to the front of the gallery and return it.
    pub fn snapshot(&mut self) -> Result<String> {
        let url = self.stage.export_snapshot(self.snapshot_size)?;
        let count = self.gallery.save(url.clone())?;
        info!(count, bytes = url.len(), "snapshot saved");
        Ok(url)
    }

    /// One animation frame. Returns the rotation to display, in degrees.
    pub fn tick(&mut self) -> Option<f64> {
        self.rotation.advance();
        self.rotation.transform()
    }
}
