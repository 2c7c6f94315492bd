// File: crates/kaleido-core/src/theme.rs
// Summary: Stage color presets (background, disc, reset fill, surrounding page).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Square behind the disc; stays visible in the corners.
    pub background: skia::Color,
    /// Drawing disc painted at stage initialisation.
    pub disc: skia::Color,
    /// Fill used when the stage is reset; clipped to the disc.
    pub reset_fill: skia::Color,
    /// Window area around the (possibly rotated) stage.
    pub page: skia::Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 0, 0, 0),
            disc: skia::Color::from_argb(255, 255, 255, 255),
            reset_fill: skia::Color::from_argb(255, 255, 255, 255),
            page: skia::Color::from_argb(255, 18, 18, 20),
        }
    }

    pub fn night() -> Self {
        Self {
            name: "night",
            background: skia::Color::from_argb(255, 18, 18, 20),
            disc: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            reset_fill: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            page: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::from_argb(255, 230, 230, 235),
            disc: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            reset_fill: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            page: skia::Color::from_argb(255, 250, 250, 252),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::night(), Theme::paper()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
