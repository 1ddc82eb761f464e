use super::AssetKey;

/// Anything that can say where an asset lives.
pub trait AssetSource: Send + Sync {
    /// URL or filesystem path for `key`
    fn locate(&self, key: AssetKey) -> String;
}

/// Assets stored as `{base}/{name}.png`, either on disk or under a URL prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    base: String,
}

impl DirectorySource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for DirectorySource {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl AssetSource for DirectorySource {
    fn locate(&self, key: AssetKey) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            return format!("{}.png", key.name());
        }
        format!("{}/{}.png", base, key.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_source_paths() {
        let source = DirectorySource::new("https://example.com/static/");
        assert_eq!(
            source.locate(AssetKey::DirtTile),
            "https://example.com/static/dirt_tile.png"
        );

        assert_eq!(DirectorySource::default().locate(AssetKey::Cat), "assets/cat.png");
        assert_eq!(DirectorySource::new("").locate(AssetKey::ZoomOut), "zoom-out.png");
    }
}
