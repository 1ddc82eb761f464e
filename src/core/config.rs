//! Configuration system for the isometric scene
//!
//! [`MapPreset`] names common grid shapes and resolves to [`MapOptions`].
//! [`GameConfig`] combines those options with the canvas size and the
//! current zoom scale. [`SceneSettings`] is the bundle an application loads
//! from JSON.

use crate::core::constants::{
    DEFAULT_ANISOTROPY, DEFAULT_MAP_RADIUS, DEFAULT_ROTATION, DEFAULT_SCALE, DEFAULT_TILE_GAP,
    DEFAULT_TILE_WIDTH, INITIAL_CONTAINER_POSITION, MAX_SCALE, MIN_SCALE,
};
use crate::core::geo::Point;
use crate::{IsoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapPreset {
    Standard,
    LargeTiles,
    Custom(MapOptions),
}

impl MapPreset {
    pub fn resolve(&self) -> MapOptions {
        match self {
            Self::Standard => MapOptions {
                map_radius: DEFAULT_MAP_RADIUS,
                tile_width: DEFAULT_TILE_WIDTH,
                tile_gap: DEFAULT_TILE_GAP,
            },
            Self::LargeTiles => MapOptions {
                map_radius: 12,
                tile_width: 64.0,
                tile_gap: 0.01,
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for MapPreset {
    fn default() -> Self {
        Self::Standard
    }
}

/// Shape of the tile grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub map_radius: i32,
    pub tile_width: f64,
    pub tile_gap: f64,
}

impl MapOptions {
    /// Number of tiles along one edge of the square grid
    pub fn edge_len(&self) -> usize {
        (2 * self.map_radius.max(0) + 1) as usize
    }

    pub fn tile_count(&self) -> usize {
        self.edge_len() * self.edge_len()
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        MapPreset::default().resolve()
    }
}

/// Per-session scene configuration.
///
/// Only primitive fields are stored. Offsets, borders and the texture size
/// are recomputed on every call so they can never drift from `scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub map_radius: i32,
    pub tile_width: f64,
    pub tile_gap: f64,
    scale: f64,
    /// 1 gives the classic 45 degree rotation
    pub rotation: f64,
    /// 2 gives the isometric view
    pub ai: f64,
}

impl GameConfig {
    pub fn new(canvas_width: f64, canvas_height: f64, options: MapOptions) -> Self {
        Self {
            canvas_width,
            canvas_height,
            map_radius: options.map_radius,
            tile_width: options.tile_width,
            tile_gap: options.tile_gap,
            scale: DEFAULT_SCALE,
            rotation: DEFAULT_ROTATION,
            ai: DEFAULT_ANISOTROPY,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn options(&self) -> MapOptions {
        MapOptions {
            map_radius: self.map_radius,
            tile_width: self.tile_width,
            tile_gap: self.tile_gap,
        }
    }

    /// Rejects configurations the transform cannot invert
    pub fn validate(&self) -> Result<()> {
        if self.map_radius < 0 {
            return Err(IsoError::InvalidConfig(format!(
                "map radius must not be negative, got {}",
                self.map_radius
            )));
        }
        if self.tile_width <= 0.0 || !self.tile_width.is_finite() {
            return Err(IsoError::InvalidConfig(format!(
                "tile width must be positive, got {}",
                self.tile_width
            )));
        }
        if self.scale <= 0.0 || !self.scale.is_finite() {
            return Err(IsoError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if self.ai == 0.0 || !self.ai.is_finite() {
            return Err(IsoError::InvalidConfig(format!(
                "anisotropy must be non-zero, got {}",
                self.ai
            )));
        }
        Ok(())
    }

    /// Steps the scale up (`0.5 → 1 → 2 → 3`). Returns whether it changed.
    pub fn increase_scale(&mut self) -> bool {
        if self.scale >= MAX_SCALE {
            return false;
        }
        self.scale = if self.scale == MIN_SCALE {
            1.0
        } else {
            self.scale + 1.0
        };
        true
    }

    /// Steps the scale down (`3 → 2 → 1 → 0.5`). Returns whether it changed.
    pub fn decrease_scale(&mut self) -> bool {
        if self.scale <= MIN_SCALE {
            return false;
        }
        self.scale = if self.scale == 1.0 {
            MIN_SCALE
        } else {
            self.scale - 1.0
        };
        true
    }

    /// Tiles along one edge of the grid, as a float for the layout math
    fn edge_tiles(&self) -> f64 {
        (self.map_radius * 2 + 1) as f64
    }

    pub fn offset_x(&self) -> f64 {
        self.edge_tiles() * self.tile_width * self.scale
    }

    pub fn offset_y(&self) -> f64 {
        ((self.edge_tiles() * self.tile_width - self.tile_width) * self.scale) / self.ai
    }

    /// Lowest x the container may be dragged to
    pub fn border_l(&self) -> f64 {
        -self.offset_x() * 2.0 + self.canvas_width
    }

    pub fn border_r(&self) -> f64 {
        0.0
    }

    /// Lowest y the container may be dragged to
    pub fn border_d(&self) -> f64 {
        -(self.offset_y() + (self.tile_width * self.scale) / self.ai) * 2.0 + self.canvas_height
    }

    pub fn border_u(&self) -> f64 {
        0.0
    }

    /// Size of the off-screen surface holding the whole grid
    pub fn texture_size(&self) -> (f64, f64) {
        (
            self.offset_x() * 2.0,
            (self.offset_y() + (self.tile_width * self.scale) / self.ai) * 2.0,
        )
    }

    pub fn is_portrait(&self) -> bool {
        self.canvas_height > self.canvas_width
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(600.0, 380.0, MapOptions::default())
    }
}

fn default_canvas_width() -> f64 {
    600.0
}

fn default_canvas_height() -> f64 {
    380.0
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

fn default_asset_base() -> String {
    "assets".to_string()
}

fn default_initial_position() -> Point {
    Point::new(INITIAL_CONTAINER_POSITION.0, INITIAL_CONTAINER_POSITION.1)
}

/// Everything an application needs to stand up a scene, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default)]
    pub preset: MapPreset,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    #[serde(default = "default_initial_position")]
    pub initial_position: Point,
}

impl SceneSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Builds and validates the game config these settings describe
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig::new(self.canvas_width, self.canvas_height, self.preset.resolve())
            .with_scale(self.scale);
        config.validate()?;
        Ok(config)
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            preset: MapPreset::default(),
            scale: default_scale(),
            asset_base: default_asset_base(),
            initial_position: default_initial_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig::new(
            100.0,
            100.0,
            MapOptions {
                map_radius: 5,
                tile_width: 1.0,
                tile_gap: 0.0,
            },
        )
    }

    #[test]
    fn test_presets() {
        let standard = MapPreset::Standard.resolve();
        assert_eq!(standard.map_radius, 18);
        assert_eq!(standard.tile_width, 16.0);
        assert_eq!(standard.tile_gap, 0.02);

        let large = MapPreset::LargeTiles.resolve();
        assert!(large.tile_width > standard.tile_width);
        assert_eq!(large.tile_count(), 25 * 25);

        let custom = MapOptions {
            map_radius: 2,
            tile_width: 8.0,
            tile_gap: 0.0,
        };
        assert_eq!(MapPreset::Custom(custom.clone()).resolve(), custom);
    }

    #[test]
    fn test_derived_fields() {
        let config = small_config();

        assert_eq!(config.scale(), 2.0);
        assert_eq!(config.offset_x(), 22.0);
        assert_eq!(config.offset_y(), 10.0);
        assert_eq!(config.border_l(), 56.0);
        assert_eq!(config.border_d(), 78.0);
        assert_eq!(config.texture_size(), (44.0, 22.0));
    }

    #[test]
    fn test_derived_fields_follow_scale() {
        let mut config = small_config();
        let before = config.offset_x();

        assert!(config.increase_scale());
        assert_eq!(config.scale(), 3.0);
        assert_eq!(config.offset_x(), before / 2.0 * 3.0);
    }

    #[test]
    fn test_scale_steps() {
        let mut config = small_config();

        assert!(config.increase_scale());
        assert!(!config.increase_scale());
        assert_eq!(config.scale(), 3.0);

        let steps: Vec<f64> = std::iter::from_fn(|| config.decrease_scale().then(|| config.scale()))
            .collect();
        assert_eq!(steps, vec![2.0, 1.0, 0.5]);
        assert!(!config.decrease_scale());

        assert!(config.increase_scale());
        assert_eq!(config.scale(), 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(small_config().validate().is_ok());

        let mut bad = small_config();
        bad.map_radius = -1;
        assert!(matches!(bad.validate(), Err(IsoError::InvalidConfig(_))));

        let bad = small_config().with_scale(0.0);
        assert!(bad.validate().is_err());

        let mut bad = small_config();
        bad.ai = 0.0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_scene_settings_from_json() {
        let settings = SceneSettings::from_json(
            r#"{ "canvas_width": 800, "preset": { "Custom": { "map_radius": 3, "tile_width": 10, "tile_gap": 0 } } }"#,
        )
        .unwrap();

        assert_eq!(settings.canvas_width, 800.0);
        assert_eq!(settings.canvas_height, 380.0);
        assert_eq!(settings.scale, 2.0);

        let config = settings.game_config().unwrap();
        assert_eq!(config.map_radius, 3);
        assert_eq!(config.tile_width, 10.0);
    }

    #[test]
    fn test_scene_settings_rejects_garbage() {
        assert!(matches!(
            SceneSettings::from_json("not json"),
            Err(IsoError::Serialization(_))
        ));
    }
}
