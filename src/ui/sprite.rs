//! Images pinned to the canvas above the map.

use crate::assets::{AssetKey, TextureCache};
use crate::core::constants::CAT_SPRITE_POSITION;
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// A texture drawn at a fixed canvas position, unaffected by dragging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub key: AssetKey,
    /// Top-left corner in canvas pixels
    pub position: Point,
    /// Width and height in canvas pixels
    pub size: Point,
    pub z: u8,
}

impl Sprite {
    /// Sized from the decoded texture; `None` when it never loaded
    pub fn from_texture(key: AssetKey, position: Point, textures: &TextureCache) -> Option<Self> {
        let (width, height) = textures.dimensions(key)?;
        Some(Self {
            key,
            position,
            size: Point::new(width as f64, height as f64),
            z: 1,
        })
    }

    pub fn cat(textures: &TextureCache) -> Option<Self> {
        let (x, y) = CAT_SPRITE_POSITION;
        Self::from_texture(AssetKey::Cat, Point::new(x, y), textures)
    }

    pub fn max(&self) -> Point {
        self.position.add(&self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_cat_sprite_uses_texture_size() {
        let textures = TextureCache::default();
        assert!(Sprite::cat(&textures).is_none());

        textures.insert(AssetKey::Cat, RgbaImage::new(64, 48));
        let cat = Sprite::cat(&textures).unwrap();

        assert_eq!(cat.key, AssetKey::Cat);
        assert_eq!(cat.position, Point::new(150.0, 150.0));
        assert_eq!(cat.size, Point::new(64.0, 48.0));
        assert_eq!(cat.max(), Point::new(214.0, 198.0));
    }
}
