//! Asset Manager - loading and caching of sprite images
//!
//! Images are decoded once at start-up and kept by name. Loading never
//! fails from the caller's point of view: a bad path produces a placeholder
//! and a warning. Only lookups of names that were never loaded are errors.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::sprite::SpriteImage;

/// Placeholder size used when a sprite has no better hint
pub const DEFAULT_FALLBACK_SIZE: (u32, u32) = (16, 16);

#[derive(Debug, Error)]
pub enum AssetError {
    /// Lookup of a sprite that was never passed to `load`
    #[error("sprite '{0}' was never loaded")]
    NotLoaded(String),
}

/// Name → sprite cache
#[derive(Debug, Default)]
pub struct AssetManager {
    images: HashMap<String, SpriteImage>,
}

impl AssetManager {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    /// Load `path`, scale it, and register it under `name`.
    ///
    /// On any decode or I/O failure a placeholder of `fallback_size × scale`
    /// is registered instead. Re-loading a name replaces the previous image.
    pub fn load(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
        scale: f32,
        fallback_size: (u32, u32),
    ) -> &SpriteImage {
        let path = path.as_ref();
        let image = match SpriteImage::open(path, scale) {
            Ok(image) => {
                log::debug!(
                    "Loaded sprite '{}' from {} ({}x{})",
                    name,
                    path.display(),
                    image.width(),
                    image.height()
                );
                image
            }
            Err(e) => {
                log::warn!(
                    "Failed to load {}: {}. Using placeholder for '{}'",
                    path.display(),
                    e,
                    name
                );
                SpriteImage::placeholder(fallback_size, scale)
            }
        };
        self.images.insert(name.to_string(), image);
        &self.images[name]
    }

    /// Get a previously loaded sprite
    pub fn get(&self, name: &str) -> Result<&SpriteImage, AssetError> {
        self.images
            .get(name)
            .ok_or_else(|| AssetError::NotLoaded(name.to_string()))
    }

    /// Iterate over (name, image) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpriteImage)> {
        self.images.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::sprite::{PLACEHOLDER_FILL, PLACEHOLDER_OUTLINE};
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_missing_file_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetManager::new();

        let img = assets.load("enemy", dir.path().join("missing.png"), 2.0, (16, 12));
        assert_eq!((img.width(), img.height()), (32, 24));
        assert_eq!(img.pixel(0, 0), PLACEHOLDER_OUTLINE);

        let fetched = assets.get("enemy").unwrap();
        assert_eq!(fetched.pixel(16, 12), PLACEHOLDER_FILL);
    }

    #[test]
    fn test_corrupt_file_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let mut assets = AssetManager::new();
        let img = assets.load("bullet", &path, 1.0, DEFAULT_FALLBACK_SIZE);
        assert_eq!(img.size(), (16.0, 16.0));
        assert_eq!(img.pixel(8, 8), PLACEHOLDER_FILL);
    }

    #[test]
    fn test_load_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.png");
        RgbaImage::from_pixel(10, 8, Rgba([0, 128, 0, 255])).save(&path).unwrap();

        let mut assets = AssetManager::new();
        assets.load("player", &path, 2.0, DEFAULT_FALLBACK_SIZE);
        let img = assets.get("player").unwrap();
        assert_eq!(img.size(), (20.0, 16.0));
        assert_eq!(img.pixel(0, 0), Rgba([0, 128, 0, 255]));
        assert_eq!(assets.iter().count(), 1);
    }

    #[test]
    fn test_unregistered_name_is_error() {
        let assets = AssetManager::new();
        match assets.get("ghost") {
            Err(AssetError::NotLoaded(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected NotLoaded, got {:?}", other),
        }
    }
}
