// File: crates/kaleido-core/src/lib.rs
// Summary: Core library entry point; exports the mirroring engine, stage, gallery and session API.

pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod mirror;
pub mod rotation;
pub mod session;
pub mod settings;
pub mod stage;
pub mod theme;
pub mod types;

pub use config::Config;
pub use error::{KaleidoError, Result};
pub use gallery::{decode_data_url, encode_data_url, FileStore, Gallery, KeyValueStore, MemoryStore};
pub use mirror::{mirror, MarkSurface, MirrorPoints};
pub use rotation::Rotation;
pub use session::{Control, Session};
pub use settings::{DrawSettings, Rgb, SettingUpdate};
pub use stage::{Stage, StageOptions};
pub use theme::Theme;
pub use types::{Padding, Point2D, PolarPoint};
