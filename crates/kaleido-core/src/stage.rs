// File: crates/kaleido-core/src/stage.rs
// Summary: Stage struct: the square Skia CPU raster surface that marks accumulate on, plus export paths.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use skia_safe as skia;

use crate::error::{KaleidoError, Result};
use crate::gallery::encode_data_url;
use crate::geometry::center_for;
use crate::mirror::MarkSurface;
use crate::settings::Rgb;
use crate::theme::Theme;
use crate::types::{Point2D, SIDE_LENGTH};

#[derive(Clone, Copy, Debug)]
pub struct StageOptions {
    pub side_length: i32,
    pub theme: Theme,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            side_length: SIDE_LENGTH,
            theme: Theme::classic(),
        }
    }
}

pub struct Stage {
    surface: skia::Surface,
    side_length: i32,
    theme: Theme,
}

impl Stage {
    /// Allocate the raster surface and paint the initial stage: background
    /// square, drawing disc, and a clip to that disc for everything after.
    pub fn new(opts: &StageOptions) -> Result<Self> {
        if opts.side_length <= 0 {
            return Err(KaleidoError::SideLength(opts.side_length));
        }
        let surface = skia::surfaces::raster_n32_premul((opts.side_length, opts.side_length))
            .ok_or(KaleidoError::Surface {
                width: opts.side_length,
                height: opts.side_length,
            })?;
        let mut stage = Self {
            surface,
            side_length: opts.side_length,
            theme: opts.theme,
        };
        stage.initialise();
        Ok(stage)
    }

    pub fn side_length(&self) -> i32 {
        self.side_length
    }

    pub fn center(&self) -> f64 {
        center_for(self.side_length)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn bounds(&self) -> skia::Rect {
        let side = self.side_length as f32;
        skia::Rect::from_wh(side, side)
    }

    fn initialise(&mut self) {
        let bounds = self.bounds();
        let c = self.center() as f32;
        let theme = self.theme;
        let canvas = self.surface.canvas();

        canvas.save();
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(theme.background);
        canvas.draw_rect(bounds, &paint);
        paint.set_color(theme.disc);
        canvas.draw_circle((c, c), c, &paint);
        canvas.restore();

        // Left in place for the life of the surface.
        canvas.clip_rrect(skia::RRect::new_oval(bounds), skia::ClipOp::Intersect, true);
    }

    /// Wipe all marks: fill the square with the reset color, confined to the disc by the clip.
    pub fn reset(&mut self) {
        let bounds = self.bounds();
        let fill = self.theme.reset_fill;
        let canvas = self.surface.canvas();
        canvas.save();
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(fill);
        canvas.draw_rect(bounds, &paint);
        canvas.restore();
    }

    /// Read the stage back as unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let side = self.side_length;
        let pixels = read_rgba(&mut self.surface, side, side)?;
        Ok((pixels, side, side, side as usize * 4))
    }

    pub fn render_to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let img = self.to_rgba_image()?;
        encode_png(&img)
    }

    /// Write the stage as a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&mut self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let data = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Scale the stage to `size`x`size` and encode it as a PNG data URL.
    /// The display rotation is not applied.
    pub fn export_snapshot(&mut self, size: u32) -> Result<String> {
        let img = self.to_rgba_image()?;
        let scaled = image::imageops::resize(&img, size, size, FilterType::Triangle);
        let png = encode_png(&scaled)?;
        Ok(encode_data_url(&png))
    }

    /// Draw the stage into a `width`x`height` frame with its top-left at
    /// `origin`, rotated about its center by `rotation_degrees` (clockwise on
    /// screen). The stage's own pixels are left untouched.
    pub fn compose_rgba8(
        &mut self,
        width: i32,
        height: i32,
        origin: Point2D,
        rotation_degrees: Option<f64>,
    ) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        let c = self.center() as f32;
        let mut frame = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(KaleidoError::Surface { width, height })?;
        let canvas = frame.canvas();
        canvas.clear(self.theme.page);
        canvas.save();
        canvas.translate((origin.x as f32, origin.y as f32));
        if let Some(deg) = rotation_degrees {
            canvas.rotate(deg as f32, Some(skia::Point::new(c, c)));
        }
        canvas.draw_image(&image, (0.0, 0.0), None);
        canvas.restore();
        read_rgba(&mut frame, width, height)
    }

    fn to_rgba_image(&mut self) -> Result<RgbaImage> {
        let (pixels, w, h, _) = self.render_to_rgba8()?;
        RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or(KaleidoError::ReadPixels)
    }
}

impl MarkSurface for Stage {
    fn begin_mark(&mut self) {
        self.surface.canvas().save();
    }

    fn end_mark(&mut self) {
        self.surface.canvas().restore();
    }

    fn fill_disc(&mut self, at: Point2D, radius: f32, color: Rgb) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color.to_skia());
        self.surface
            .canvas()
            .draw_circle((at.x as f32, at.y as f32), radius, &paint);
    }
}

// ---- helpers ----------------------------------------------------------------

fn read_rgba(surface: &mut skia::Surface, width: i32, height: i32) -> Result<Vec<u8>> {
    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(KaleidoError::ReadPixels);
    }
    Ok(pixels)
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
