//! Decoded textures shared between the loader and whatever draws them.

use super::AssetKey;
use image::RgbaImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Decoded RGBA textures keyed by asset.
///
/// Clones share the same storage, so the loader can fill a cache that the
/// widget already holds. Capacity defaults to one slot per [`AssetKey`]; a
/// smaller cache evicts the least recently drawn texture.
#[derive(Debug, Clone)]
pub struct TextureCache {
    textures: Arc<Mutex<LruCache<AssetKey, Arc<RgbaImage>>>>,
}

impl TextureCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            textures: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn get(&self, key: AssetKey) -> Option<Arc<RgbaImage>> {
        self.textures.lock().ok()?.get(&key).cloned()
    }

    pub fn insert(&self, key: AssetKey, texture: RgbaImage) {
        if let Ok(mut textures) = self.textures.lock() {
            if let Some(evicted) = textures.push(key, Arc::new(texture)) {
                if evicted.0 != key {
                    log::debug!("texture {} evicted for {}", evicted.0, key);
                }
            }
        }
    }

    pub fn contains(&self, key: AssetKey) -> bool {
        self.textures
            .lock()
            .map(|textures| textures.contains(&key))
            .unwrap_or(false)
    }

    /// True when every one of `keys` has a decoded texture
    pub fn contains_all(&self, keys: &[AssetKey]) -> bool {
        keys.iter().all(|&key| self.contains(key))
    }

    /// Pixel size of a texture without touching its recency
    pub fn dimensions(&self, key: AssetKey) -> Option<(u32, u32)> {
        self.textures
            .lock()
            .ok()?
            .peek(&key)
            .map(|texture| texture.dimensions())
    }

    /// Cached keys in declaration order
    pub fn keys(&self) -> Vec<AssetKey> {
        AssetKey::ALL
            .into_iter()
            .filter(|&key| self.contains(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.textures.lock().map(|textures| textures.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new(AssetKey::ALL.len())
    }
}
