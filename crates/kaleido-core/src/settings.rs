// File: crates/kaleido-core/src/settings.rs
// Summary: Draw settings (color, mark size, sector count, rotation velocity) and their updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::KaleidoError;

/// 8-bit RGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = KaleidoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| KaleidoError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub const DEFAULT_COLOR: Rgb = Rgb::new(0x86, 0x80, 0x1d);
pub const DEFAULT_MARK_RADIUS: f32 = 5.0;
pub const DEFAULT_SECTOR_COUNT: u32 = 4;
pub const DEFAULT_ROTATION_VELOCITY: f64 = 0.0;

/// Settings read by the mirror engine on every mark.
///
/// Range limits (for example `sector_count >= 2`) belong to whatever UI edits
/// these values; nothing here validates them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    pub color: Rgb,
    pub mark_radius: f32,
    pub sector_count: u32,
    pub rotation_velocity: f64,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            mark_radius: DEFAULT_MARK_RADIUS,
            sector_count: DEFAULT_SECTOR_COUNT,
            rotation_velocity: DEFAULT_ROTATION_VELOCITY,
        }
    }
}

/// One settings-change event; exactly one field changes per event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingUpdate {
    Color(Rgb),
    MarkRadius(f32),
    SectorCount(u32),
    RotationVelocity(f64),
}

impl DrawSettings {
    pub fn apply(&mut self, update: SettingUpdate) {
        match update {
            SettingUpdate::Color(c) => self.color = c,
            SettingUpdate::MarkRadius(r) => self.mark_radius = r,
            SettingUpdate::SectorCount(n) => self.sector_count = n,
            SettingUpdate::RotationVelocity(v) => self.rotation_velocity = v,
        }
    }
}
