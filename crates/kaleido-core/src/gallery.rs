// File: crates/kaleido-core/src/gallery.rs
// Summary: Snapshot gallery persisted as a JSON string list under one key of a key-value store.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use tracing::debug;

use crate::error::{KaleidoError, Result};
use crate::types::GALLERY_KEY;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Wrap PNG bytes in a `data:image/png;base64,` URL.
pub fn encode_data_url(png: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    format!("{PNG_DATA_URL_PREFIX}{b64}")
}

/// Recover the PNG bytes from a URL produced by [`encode_data_url`].
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let payload = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| KaleidoError::DataUrl("missing data:image/png;base64, prefix".into()))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| KaleidoError::DataUrl(e.to_string()))
}

/// String-valued key-value store, in the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by one JSON object file; every `set` rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|source| KaleidoError::StoreFormat {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = items.len(), "opened file store");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let body =
            serde_json::to_string_pretty(items).map_err(|source| KaleidoError::StoreFormat {
                path: self.path.clone(),
                source,
            })?;
        // Readers only ever see a complete file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    /// Memory is updated only once the file write succeeds.
    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value);
        self.flush(&items)?;
        self.items = items;
        Ok(())
    }
}

/// Ordered snapshot list, newest first, stored as a JSON array of strings.
pub struct Gallery<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Gallery<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, GALLERY_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All snapshots, newest first; empty when nothing was ever saved or the
    /// stored value is JSON `null`.
    pub fn entries(&self) -> Result<Vec<String>> {
        match self.store.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str::<Option<Vec<String>>>(&raw)
                .map(Option::unwrap_or_default)
                .map_err(|source| KaleidoError::GalleryFormat {
                    key: self.key.clone(),
                    source,
                }),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Put `snapshot` at the front and persist. Returns the new entry count.
    pub fn save(&mut self, snapshot: String) -> Result<usize> {
        let mut items = self.entries()?;
        items.insert(0, snapshot);
        self.write(&items)?;
        Ok(items.len())
    }

    pub fn erase(&mut self) -> Result<()> {
        self.write(&[])
    }

    fn write(&mut self, items: &[String]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(|source| KaleidoError::GalleryFormat {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, raw)
    }
}
