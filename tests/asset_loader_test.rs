use anyhow::Context;
use async_trait::async_trait;
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use isotile::assets::{AssetFetcher, AssetKey, AssetLoader, DirectorySource};
use isotile::{IsoError, TextureCache};
use std::collections::HashMap;
use std::io::Cursor;

/// Serves assets from memory and answers 404 for everything else
struct MemoryFetcher {
    files: HashMap<String, Vec<u8>>,
}

#[async_trait]
impl AssetFetcher for MemoryFetcher {
    async fn fetch(&self, location: &str) -> isotile::Result<Vec<u8>> {
        self.files.get(location).cloned().ok_or_else(|| IsoError::Http {
            status: 404,
            reason: "Not Found".to_string(),
            url: location.to_string(),
        })
    }
}

fn png(shade: u8) -> anyhow::Result<Vec<u8>> {
    let image = RgbaImage::from_pixel(3, 2, Rgba([shade, 0, 0, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

fn loader(files: Vec<(&str, Vec<u8>)>) -> AssetLoader {
    let files = files
        .into_iter()
        .map(|(name, data)| (name.to_string(), data))
        .collect();
    AssetLoader::new(DirectorySource::new("static"), MemoryFetcher { files })
}

#[tokio::test]
async fn test_load_rejects_on_missing_asset() -> anyhow::Result<()> {
    let loader = loader(vec![("static/cat.png", png(1)?)]);

    let err = loader
        .load(&[AssetKey::Cat, AssetKey::ZoomIn])
        .await
        .err()
        .context("zoom-in is missing, the load should fail")?;

    assert_eq!(err.to_string(), "[404] Not Found: static/zoom-in.png");
    Ok(())
}

#[tokio::test]
async fn test_load_all_present() -> anyhow::Result<()> {
    let loader = loader(vec![
        ("static/zoom-in.png", png(10)?),
        ("static/zoom-out.png", png(20)?),
    ]);

    let assets = loader.load(&[AssetKey::ZoomIn, AssetKey::ZoomOut]).await?;

    assert_eq!(assets.len(), 2);
    let zoom_out = assets.get(AssetKey::ZoomOut).context("zoom-out loaded")?;
    assert_eq!(zoom_out.url, "static/zoom-out.png");
    Ok(())
}

#[tokio::test]
async fn test_partial_load_and_decode() -> anyhow::Result<()> {
    let loader = loader(vec![
        ("static/cat.png", png(50)?),
        ("static/dirt_tile.png", b"not a png".to_vec()),
    ]);

    let assets = loader.load_partial(&AssetKey::ALL).await;
    assert_eq!(assets.len(), 2);
    assert!(assets.contains(AssetKey::Cat));
    assert!(!assets.contains(AssetKey::ZoomIn));

    // The broken file fetched fine but does not decode
    let cache = TextureCache::default();
    assert_eq!(assets.decode_into(&cache), 1);

    let cat = cache.get(AssetKey::Cat).context("cat decoded")?;
    assert_eq!(cat.dimensions(), (3, 2));
    assert_eq!(cat.get_pixel(2, 1).0, [50, 0, 0, 255]);
    assert!(!cache.contains(AssetKey::DirtTile));
    assert_eq!(cache.keys(), vec![AssetKey::Cat]);
    Ok(())
}

#[tokio::test]
async fn test_drawn_assets_feed_the_scene() -> anyhow::Result<()> {
    let loader = loader(vec![
        ("static/cat.png", png(1)?),
        ("static/zoom-in.png", png(2)?),
        ("static/zoom-out.png", png(3)?),
    ]);

    let assets = loader.load(&AssetKey::DRAWN).await?;
    let cache = TextureCache::default();
    assets.decode_into(&cache);

    let mut scene = isotile::Scene::new(isotile::GameConfig::default(), isotile::HeadlessSurface::new())?;
    scene.use_textures(&cache);
    assert!(scene.zoom_controls().is_some());
    assert_eq!(scene.sprites().len(), 1);
    Ok(())
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test]
async fn test_file_fetcher() -> anyhow::Result<()> {
    use isotile::assets::FileFetcher;

    let root = std::env::temp_dir().join(format!("isotile-assets-{}", std::process::id()));
    tokio::fs::create_dir_all(&root).await?;
    tokio::fs::write(root.join("cat.png"), png(7)?).await?;

    let fetcher = FileFetcher::with_root(&root);
    assert_eq!(fetcher.fetch("cat.png").await?, png(7)?);

    let err = fetcher
        .fetch("zoom-in.png")
        .await
        .err()
        .context("zoom-in.png does not exist")?;
    match err {
        IsoError::Http { status, reason, .. } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Asset not found");
        }
        other => panic!("expected a 404, got {other:?}"),
    }

    tokio::fs::remove_dir_all(&root).await?;
    Ok(())
}
