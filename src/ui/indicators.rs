//! On-canvas debug readouts.

use crate::core::config::GameConfig;
use crate::core::geo::Point;
use crate::core::viewport::Viewport;
use crate::input::interaction::InteractionUpdate;
use crate::tiles::palette::TileColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Text style shared by every indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPreset {
    pub font_family: String,
    pub font_size: f32,
    pub fill: TileColor,
    pub align: TextAlign,
}

impl Default for IndicatorPreset {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 18.0,
            fill: TileColor(0xFFFFFF),
            align: TextAlign::Center,
        }
    }
}

/// A single line of text pinned to the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub position: Point,
    pub z: u8,
    pub text: String,
}

impl Indicator {
    fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            z: 2,
            text: String::new(),
        }
    }
}

/// The fixed set of readouts drawn over the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub preset: IndicatorPreset,
    pub cartesian: Indicator,
    pub tile: Indicator,
    pub drag: Indicator,
    pub camera: [Indicator; 4],
    pub orientation: Indicator,
}

impl Indicators {
    pub fn new(config: &GameConfig) -> Self {
        let mut indicators = Self {
            preset: IndicatorPreset::default(),
            cartesian: Indicator::at(10.0, 0.0),
            tile: Indicator::at(10.0, 30.0),
            drag: Indicator::at(10.0, 60.0),
            camera: [
                Indicator::at(10.0, 90.0),
                Indicator::at(10.0, 120.0),
                Indicator::at(10.0, 150.0),
                Indicator::at(10.0, 180.0),
            ],
            orientation: Indicator::at(10.0, config.canvas_height - 30.0),
        };
        indicators.resize(config);
        indicators
    }

    /// Re-pins the orientation readout to the bottom and refreshes its text
    pub fn resize(&mut self, config: &GameConfig) {
        self.orientation.position.y = config.canvas_height - 30.0;
        self.orientation.text = if config.is_portrait() {
            "portrait".to_string()
        } else {
            "landscape".to_string()
        };
    }

    pub fn apply(&mut self, update: &InteractionUpdate) {
        match update {
            InteractionUpdate::DragStarted { .. } => {
                self.drag.text = "dragging".to_string();
            }
            InteractionUpdate::Coords(coords) => {
                self.cartesian.text = coords.cartesian.to_string();
                self.tile.text = coords.tile.to_string();
            }
            InteractionUpdate::Reposition(position) => {
                self.camera[0].text = format!(
                    "dragged: {{ x: {:.2}, y: {:.2} }}",
                    position.dragged.x, position.dragged.y
                );
                self.camera[1].text = format!(
                    "container: {{ x: {:.2}, y: {:.2} }}",
                    position.new_position.x, position.new_position.y
                );
                self.camera[2].text = format!(
                    "parent: {{ x: {:.2}, y: {:.2} }}",
                    position.parent.x, position.parent.y
                );
            }
            InteractionUpdate::Click(change) => {
                self.drag.text = "not dragging".to_string();
                self.camera[0].text.clear();
                self.camera[3].text = match change.selected {
                    Some(tile) => format!("selected: {}", tile),
                    None => String::new(),
                };
            }
            InteractionUpdate::Release { velocity } => {
                self.drag.text = "not dragging".to_string();
                self.camera[0].text.clear();
                self.camera[3].text = format!("velocity: {}, {}", velocity.x, velocity.y);
            }
            InteractionUpdate::Ignored => {}
        }
    }

    /// Per-frame refresh. While a drag is in progress the drag readout counts
    /// frames instead.
    pub fn tick(&mut self, drag_frames: Option<u64>, viewport: &Viewport) {
        if let Some(frames) = drag_frames {
            self.drag.text = frames.to_string();
        } else if !viewport.velocity.is_zero() {
            self.camera[3].text = format!(
                "velocity: {}, {}",
                viewport.velocity.x, viewport.velocity.y
            );
        }
    }

    /// Non-empty indicators in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        [&self.cartesian, &self.tile, &self.drag]
            .into_iter()
            .chain(self.camera.iter())
            .chain(std::iter::once(&self.orientation))
            .filter(|indicator| !indicator.text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::TileIndex;
    use crate::core::viewport::Velocity;
    use crate::input::interaction::{CoordsUpdate, SelectionChange};

    #[test]
    fn test_layout() {
        let indicators = Indicators::new(&GameConfig::default());

        assert_eq!(indicators.cartesian.position, Point::new(10.0, 0.0));
        assert_eq!(indicators.drag.position, Point::new(10.0, 60.0));
        assert_eq!(indicators.camera[3].position, Point::new(10.0, 180.0));
        assert_eq!(indicators.orientation.position, Point::new(10.0, 350.0));
        assert_eq!(indicators.orientation.text, "landscape");
        assert_eq!(indicators.preset.font_family, "Arial");
        assert_eq!(indicators.preset.fill, TileColor(0xFFFFFF));
    }

    #[test]
    fn test_orientation_follows_resize() {
        let mut indicators = Indicators::new(&GameConfig::default());
        let mut config = GameConfig::default();
        config.canvas_width = 380.0;
        config.canvas_height = 600.0;
        indicators.resize(&config);

        assert_eq!(indicators.orientation.text, "portrait");
        assert_eq!(indicators.orientation.position.y, 570.0);
    }

    #[test]
    fn test_apply_updates() {
        let mut indicators = Indicators::new(&GameConfig::default());

        indicators.apply(&InteractionUpdate::Coords(CoordsUpdate {
            cartesian: Point::new(12.346, 6.0),
            tile: TileIndex::new(-3, 4),
            hover: None,
        }));
        assert_eq!(indicators.cartesian.text, "12.35, 6.00");
        assert_eq!(indicators.tile.text, "-3,4");

        indicators.apply(&InteractionUpdate::Click(SelectionChange {
            deselected: None,
            selected: Some(TileIndex::new(1, 1)),
        }));
        assert_eq!(indicators.drag.text, "not dragging");
        assert_eq!(indicators.camera[3].text, "selected: 1,1");

        indicators.apply(&InteractionUpdate::Release {
            velocity: Velocity::new(4, -2),
        });
        assert_eq!(indicators.camera[3].text, "velocity: 4, -2");
    }

    #[test]
    fn test_tick_counts_drag_frames() {
        let mut indicators = Indicators::new(&GameConfig::default());
        indicators.tick(Some(7), &Viewport::default());
        assert_eq!(indicators.drag.text, "7");

        // Empty readouts are skipped
        assert_eq!(indicators.iter().count(), 2);
    }
}
