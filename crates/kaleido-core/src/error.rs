// File: crates/kaleido-core/src/error.rs
// Summary: Error type for the stage, gallery and configuration layers.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KaleidoError {
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("stage side length must be positive, got {0}")]
    SideLength(i32),

    #[error("failed to read back stage pixels")]
    ReadPixels,

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid data url: {0}")]
    DataUrl(String),

    #[error("gallery entry under '{key}' is not a JSON string list: {source}")]
    GalleryFormat {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store file {path} is corrupt: {source}")]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KaleidoError>;
