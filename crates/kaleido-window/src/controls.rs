// File: crates/kaleido-window/src/controls.rs
// Summary: Keyboard bindings for settings and controls, with the range limits a settings panel would enforce.

use kaleido_core::{Control, DrawSettings, Rgb, SettingUpdate};
use winit::event::VirtualKeyCode;

pub const SECTOR_RANGE: (u32, u32) = (2, 24);
pub const MARK_RADIUS_RANGE: (f32, f32) = (1.0, 40.0);
pub const ROTATION_RANGE: (f64, f64) = (-10.0, 10.0);

/// Colors cycled with `C`; the first is the startup default.
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0x86, 0x80, 0x1d),
    Rgb::new(0x26, 0x8b, 0xd2),
    Rgb::new(0xdc, 0x32, 0x2f),
    Rgb::new(0x2a, 0xa1, 0x98),
    Rgb::new(0xb5, 0x89, 0x00),
    Rgb::new(0x6c, 0x71, 0xc4),
    Rgb::new(0x00, 0x00, 0x00),
];

pub const HELP: &str = "\
keys:
  Up / Down      sectors +/-
  Right / Left   mark size +/-
  ] / [          rotation velocity +/-
  0              stop rotation
  C              next color
  S              snapshot to gallery
  E              erase gallery
  Backspace      reset stage
  H              this help
  Esc            quit";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Setting(SettingUpdate),
    Control(Control),
    Help,
    Quit,
}

/// Map a key press to an action given the current settings.
/// Returns `None` for unbound keys and for presses that would leave a range.
pub fn action_for_key(key: VirtualKeyCode, settings: &DrawSettings) -> Option<Action> {
    use winit::event::VirtualKeyCode as K;
    let action = match key {
        K::Up => step_sectors(settings.sector_count, 1)?,
        K::Down => step_sectors(settings.sector_count, -1)?,
        K::Right => step_radius(settings.mark_radius, 1.0)?,
        K::Left => step_radius(settings.mark_radius, -1.0)?,
        K::RBracket => step_rotation(settings.rotation_velocity, 1.0)?,
        K::LBracket => step_rotation(settings.rotation_velocity, -1.0)?,
        K::Key0 | K::Numpad0 => Action::Setting(SettingUpdate::RotationVelocity(0.0)),
        K::C => Action::Setting(SettingUpdate::Color(next_color(settings.color))),
        K::S => Action::Control(Control::Snapshot),
        K::E => Action::Control(Control::EraseGallery),
        K::Back | K::Delete => Action::Control(Control::Reset),
        K::H => Action::Help,
        K::Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn step_sectors(current: u32, delta: i64) -> Option<Action> {
    let next = (current as i64 + delta).clamp(SECTOR_RANGE.0 as i64, SECTOR_RANGE.1 as i64) as u32;
    (next != current).then_some(Action::Setting(SettingUpdate::SectorCount(next)))
}

fn step_radius(current: f32, delta: f32) -> Option<Action> {
    let next = (current + delta).clamp(MARK_RADIUS_RANGE.0, MARK_RADIUS_RANGE.1);
    (next != current).then_some(Action::Setting(SettingUpdate::MarkRadius(next)))
}

fn step_rotation(current: f64, delta: f64) -> Option<Action> {
    let next = (current + delta).clamp(ROTATION_RANGE.0, ROTATION_RANGE.1);
    (next != current).then_some(Action::Setting(SettingUpdate::RotationVelocity(next)))
}

/// Next palette entry; colors outside the palette restart at the first.
fn next_color(current: Rgb) -> Rgb {
    match PALETTE.iter().position(|c| *c == current) {
        Some(i) => PALETTE[(i + 1) % PALETTE.len()],
        None => PALETTE[0],
    }
}
