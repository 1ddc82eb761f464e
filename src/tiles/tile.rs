use crate::core::geo::{Point, TileIndex};
use crate::tiles::palette::TileColor;
use crate::traits::CoordinateTransform;
use serde::{Deserialize, Serialize};

/// One diamond on the grid.
///
/// Corners are computed once at build time, inset by the tile gap, and
/// listed in drawing order: `c1` (right), `c2` (bottom), `c3` (left),
/// `c4` (top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub index: TileIndex,
    pub corners: [Point; 4],
    /// Surface position of the tile's top vertex, without the gap inset
    pub anchor: Point,
    /// Painter's-order hint; larger values sit in front
    pub z: i32,
    pub color: TileColor,
    pub alpha: f32,
    pub outlined: bool,
}

impl Tile {
    pub fn new(
        index: TileIndex,
        tile_gap: f64,
        transform: &impl CoordinateTransform,
        color: TileColor,
    ) -> Self {
        let (i, j) = (index.i as f64, index.j as f64);
        let g = tile_gap;

        let corners = [
            transform.to_surface(i + 1.0 - g, j + g),
            transform.to_surface(i + 1.0 - g, j + 1.0 - g),
            transform.to_surface(i + g, j + 1.0 - g),
            transform.to_surface(i + g, j + g),
        ];

        Self {
            index,
            corners,
            anchor: transform.to_surface(i, j),
            z: index.i + index.j,
            color,
            alpha: 1.0,
            outlined: false,
        }
    }

    /// Replaces the fill; the surface must redraw the tile afterwards
    pub fn set_color(&mut self, color: TileColor, alpha: f32) {
        self.color = color;
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn set_outlined(&mut self, outlined: bool) {
        self.outlined = outlined;
    }

    /// Fill polygon in winding order `c1 → c2 → c3 → c4`
    pub fn polygon(&self) -> [Point; 4] {
        self.corners
    }

    /// Hit test against the diamond using edge cross products
    pub fn contains(&self, point: Point) -> bool {
        let mut sign = 0.0_f64;
        for k in 0..4 {
            let a = self.corners[k];
            let b = self.corners[(k + 1) % 4];
            let cross = (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
            if cross != 0.0 {
                if sign != 0.0 && cross.signum() != sign {
                    return false;
                }
                sign = cross.signum();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GameConfig, MapOptions};

    fn unit_config() -> GameConfig {
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
    fn test_corner_coords() {
        let config = unit_config();
        let tile = Tile::new(TileIndex::new(0, 1), config.tile_gap, &config, TileColor::GREEN);

        assert_eq!(
            tile.corners,
            [
                Point::new(22.0, 12.0),
                Point::new(20.0, 13.0),
                Point::new(18.0, 12.0),
                Point::new(20.0, 11.0),
            ]
        );
        assert_eq!(tile.anchor, Point::new(20.0, 11.0));
        assert_eq!(tile.z, 1);
    }

    #[test]
    fn test_gap_insets_corners() {
        let mut config = unit_config();
        config.tile_gap = 0.25;
        let tile = Tile::new(TileIndex::new(0, 0), config.tile_gap, &config, TileColor::GREEN);

        // Right corner pulled in toward the centre
        assert!(tile.corners[0].x < config.to_surface(1.0, 0.0).x);
        // Top corner pushed down toward the centre
        assert!(tile.corners[3].y > config.to_surface(0.0, 0.0).y);
    }

    #[test]
    fn test_set_color() {
        let config = unit_config();
        let mut tile = Tile::new(TileIndex::new(0, 0), 0.0, &config, TileColor::GREEN);

        tile.set_color(TileColor::SELECTED, 2.0);
        assert_eq!(tile.color, TileColor::SELECTED);
        assert_eq!(tile.alpha, 1.0);
        assert_eq!(tile.polygon(), tile.corners);
    }

    #[test]
    fn test_contains() {
        let config = unit_config();
        let tile = Tile::new(TileIndex::new(0, 1), 0.0, &config, TileColor::GREEN);

        assert!(tile.contains(Point::new(20.0, 12.0)));
        assert!(!tile.contains(Point::new(22.0, 13.0)));
        assert!(!tile.contains(Point::new(0.0, 0.0)));
    }
}
