use super::cache::TextureCache;
use super::source::AssetSource;
use super::AssetKey;
use crate::{IsoError, Result};
use async_trait::async_trait;
use fxhash::FxHashMap;
use futures::future::join_all;
use image::RgbaImage;
use once_cell::sync::Lazy;
#[cfg(feature = "tokio-runtime")]
use std::io::ErrorKind;
#[cfg(feature = "tokio-runtime")]
use std::path::PathBuf;
use std::sync::Arc;

/// Shared async HTTP client for asset fetching
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("isotile/0.1.0")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Fetches the raw bytes behind an asset location
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>>;
}

/// Fetches assets over HTTP(S)
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

#[async_trait]
impl AssetFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let response = HTTP_CLIENT.get(location).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IsoError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: location.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Reads assets from the local filesystem on tokio's blocking pool. A
/// missing file is reported the same way a web server would report it.
#[cfg(feature = "tokio-runtime")]
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    root: Option<PathBuf>,
}

#[cfg(feature = "tokio-runtime")]
impl FileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(location),
            None => PathBuf::from(location),
        }
    }
}

#[cfg(feature = "tokio-runtime")]
#[async_trait]
impl AssetFetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let path = self.resolve(location);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(IsoError::Http {
                status: 404,
                reason: "Asset not found".to_string(),
                url: path.display().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Raw bytes of one fetched asset
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub key: AssetKey,
    pub url: String,
    pub data: Arc<Vec<u8>>,
}

impl LoadedAsset {
    pub fn decode(&self) -> Result<RgbaImage> {
        Ok(image::load_from_memory(&self.data)?.to_rgba8())
    }
}

/// Everything that loaded, keyed by asset
#[derive(Debug, Clone, Default)]
pub struct AssetCollection {
    assets: FxHashMap<AssetKey, LoadedAsset>,
}

impl AssetCollection {
    pub fn get(&self, key: AssetKey) -> Option<&LoadedAsset> {
        self.assets.get(&key)
    }

    pub fn contains(&self, key: AssetKey) -> bool {
        self.assets.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn insert(&mut self, asset: LoadedAsset) {
        self.assets.insert(asset.key, asset);
    }

    /// Decodes every asset into `cache`. Assets that fail to decode are
    /// logged and left out; returns how many made it in.
    pub fn decode_into(&self, cache: &TextureCache) -> usize {
        let mut decoded = 0;
        for asset in self.assets.values() {
            match asset.decode() {
                Ok(texture) => {
                    cache.insert(asset.key, texture);
                    decoded += 1;
                }
                Err(e) => log::warn!("could not decode {} ({}): {}", asset.key, asset.url, e),
            }
        }
        decoded
    }
}

/// Fetches a set of assets concurrently
pub struct AssetLoader {
    source: Box<dyn AssetSource>,
    fetcher: Box<dyn AssetFetcher>,
}

impl AssetLoader {
    pub fn new(source: impl AssetSource + 'static, fetcher: impl AssetFetcher + 'static) -> Self {
        Self {
            source: Box::new(source),
            fetcher: Box::new(fetcher),
        }
    }

    async fn fetch_one(&self, key: AssetKey) -> (AssetKey, Result<LoadedAsset>) {
        let url = self.source.locate(key);
        log::debug!("fetching asset {} from {}", key, url);
        let result = self.fetcher.fetch(&url).await.map(|data| LoadedAsset {
            key,
            url,
            data: Arc::new(data),
        });
        (key, result)
    }

    /// Loads every key, failing with the first error in key order
    pub async fn load(&self, keys: &[AssetKey]) -> Result<AssetCollection> {
        let results = join_all(keys.iter().map(|&key| self.fetch_one(key))).await;

        let mut collection = AssetCollection::default();
        for (_, result) in results {
            collection.insert(result?);
        }

        log::info!("loaded {} assets", collection.len());
        Ok(collection)
    }

    /// Loads what it can. Failures are logged and skipped.
    pub async fn load_partial(&self, keys: &[AssetKey]) -> AssetCollection {
        let results = join_all(keys.iter().map(|&key| self.fetch_one(key))).await;

        let mut collection = AssetCollection::default();
        for (key, result) in results {
            match result {
                Ok(asset) => collection.insert(asset),
                Err(e) => log::warn!("asset {} failed to load: {}", key, e),
            }
        }

        log::info!("loaded {}/{} assets", collection.len(), keys.len());
        collection
    }
}
