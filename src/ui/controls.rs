use crate::assets::{AssetKey, TextureCache};
use crate::core::constants::{
    ZOOM_BUTTON_BOTTOM_OFFSET, ZOOM_BUTTON_SIZE, ZOOM_IN_RIGHT_OFFSET, ZOOM_OUT_RIGHT_OFFSET,
};
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomAction {
    In,
    Out,
}

impl ZoomAction {
    pub fn texture(&self) -> AssetKey {
        match self {
            ZoomAction::In => AssetKey::ZoomIn,
            ZoomAction::Out => AssetKey::ZoomOut,
        }
    }
}

/// A square button anchored at its centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomButton {
    pub action: ZoomAction,
    pub center: Point,
    pub size: f64,
    pub z: u8,
}

impl ZoomButton {
    fn new(action: ZoomAction, center: Point) -> Self {
        Self {
            action,
            center,
            size: ZOOM_BUTTON_SIZE,
            z: 2,
        }
    }

    /// Top-left corner
    pub fn min(&self) -> Point {
        Point::new(self.center.x - self.size / 2.0, self.center.y - self.size / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        let half = self.size / 2.0;
        (point.x - self.center.x).abs() <= half && (point.y - self.center.y).abs() <= half
    }
}

/// Zoom in / zoom out buttons in the bottom-right area of the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomControls {
    pub zoom_in: ZoomButton,
    pub zoom_out: ZoomButton,
}

impl ZoomControls {
    /// Lays the buttons out for a canvas, ignoring whether textures exist
    pub fn layout(canvas_width: f64, canvas_height: f64) -> Self {
        let y = canvas_height - ZOOM_BUTTON_BOTTOM_OFFSET;
        Self {
            zoom_in: ZoomButton::new(
                ZoomAction::In,
                Point::new(canvas_width - ZOOM_IN_RIGHT_OFFSET, y),
            ),
            zoom_out: ZoomButton::new(
                ZoomAction::Out,
                Point::new(canvas_width - ZOOM_OUT_RIGHT_OFFSET, y),
            ),
        }
    }

    /// Controls for a canvas, or `None` unless both button textures loaded
    pub fn from_textures(
        canvas_width: f64,
        canvas_height: f64,
        textures: &TextureCache,
    ) -> Option<Self> {
        if !textures.contains_all(&[AssetKey::ZoomIn, AssetKey::ZoomOut]) {
            log::info!("zoom textures missing, zoom controls disabled");
            return None;
        }
        Some(Self::layout(canvas_width, canvas_height))
    }

    pub fn buttons(&self) -> [&ZoomButton; 2] {
        [&self.zoom_in, &self.zoom_out]
    }

    /// Which button, if any, sits under a canvas point
    pub fn hit_test(&self, point: Point) -> Option<ZoomAction> {
        self.buttons()
            .into_iter()
            .find(|button| button.contains(point))
            .map(|button| button.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_layout() {
        let controls = ZoomControls::layout(600.0, 380.0);

        assert_eq!(controls.zoom_in.center, Point::new(325.0, 340.0));
        assert_eq!(controls.zoom_out.center, Point::new(400.0, 340.0));
        assert_eq!(controls.zoom_in.size, 45.0);
        assert_eq!(controls.zoom_in.z, 2);
        assert_eq!(controls.zoom_in.min(), Point::new(302.5, 317.5));
    }

    #[test]
    fn test_hit_test() {
        let controls = ZoomControls::layout(600.0, 380.0);

        assert_eq!(controls.hit_test(Point::new(325.0, 340.0)), Some(ZoomAction::In));
        assert_eq!(controls.hit_test(Point::new(420.0, 360.0)), Some(ZoomAction::Out));
        assert_eq!(controls.hit_test(Point::new(360.0, 340.0)), None);
        assert_eq!(controls.hit_test(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_requires_both_textures() {
        let cache = TextureCache::default();
        cache.insert(AssetKey::ZoomIn, RgbaImage::new(1, 1));
        assert!(ZoomControls::from_textures(600.0, 380.0, &cache).is_none());

        cache.insert(AssetKey::ZoomOut, RgbaImage::new(1, 1));
        assert!(ZoomControls::from_textures(600.0, 380.0, &cache).is_some());
    }
}
