//! Named image assets: where they live, how they are fetched, and a cache
//! of the decoded results.

pub mod cache;
pub mod loader;
pub mod source;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use cache::TextureCache;
pub use loader::{AssetCollection, AssetFetcher, AssetLoader, HttpFetcher, LoadedAsset};

#[cfg(feature = "tokio-runtime")]
pub use loader::FileFetcher;
pub use source::{AssetSource, DirectorySource};

/// Every asset the scene knows how to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetKey {
    Cat,
    ZoomIn,
    ZoomOut,
    DirtTile,
}

impl AssetKey {
    pub const ALL: [AssetKey; 4] = [
        AssetKey::Cat,
        AssetKey::ZoomIn,
        AssetKey::ZoomOut,
        AssetKey::DirtTile,
    ];

    /// Name used as the cache key and the file stem
    pub fn name(&self) -> &'static str {
        match self {
            AssetKey::Cat => "cat",
            AssetKey::ZoomIn => "zoom-in",
            AssetKey::ZoomOut => "zoom-out",
            AssetKey::DirtTile => "dirt_tile",
        }
    }

    /// Assets the scene puts on screen; hosts preload these
    pub const DRAWN: [AssetKey; 3] = [AssetKey::Cat, AssetKey::ZoomIn, AssetKey::ZoomOut];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
