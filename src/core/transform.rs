//! Isometric projection between tile indices and surface pixels.
//!
//! `i` and `j` are rotated by `rotation` and squashed vertically by the
//! anisotropy factor `ai`. With the defaults (`rotation = 1`, `ai = 2`) a
//! unit tile becomes a 2:1 diamond.

use crate::core::config::GameConfig;
use crate::core::geo::{Point, TileIndex};
use crate::traits::CoordinateTransform;

/// Projects a (possibly fractional) tile index to surface pixels.
///
/// Fractional indices are used for tile corners and gaps.
pub fn index_to_iso(i: f64, j: f64, config: &GameConfig) -> Point {
    let x = config.offset_x() + (i - j * config.rotation) * config.scale() * config.tile_width;
    let y = config.offset_y()
        + ((j + i * config.rotation) * config.scale() * config.tile_width) / config.ai;
    Point::new(x, y)
}

/// Inverts [`index_to_iso`] and floors both axes, keeping NaN as NaN.
pub fn iso_to_index_raw(x: f64, y: f64, config: &GameConfig) -> (f64, f64) {
    let b = config.scale() * config.tile_width;
    let rotation = config.rotation;

    let s = x - config.offset_x();
    let t = y - config.offset_y();

    let j = (((t - (s * rotation) / config.ai) / (1.0 + rotation * rotation)) * config.ai) / b;
    let i = (s + j * b * rotation) / b;

    (i.floor(), j.floor())
}

/// Resolves surface pixels to the tile underneath them.
///
/// Returns `None` when the input is not finite or lands beyond the `i32`
/// index range; the result is not checked against the map radius.
pub fn iso_to_index(x: f64, y: f64, config: &GameConfig) -> Option<TileIndex> {
    let (i, j) = iso_to_index_raw(x, y, config);
    let index_range = (i32::MIN as f64)..=(i32::MAX as f64);
    if !index_range.contains(&i) || !index_range.contains(&j) {
        return None;
    }
    Some(TileIndex::new(i as i32, j as i32))
}

impl CoordinateTransform for GameConfig {
    fn to_surface(&self, i: f64, j: f64) -> Point {
        index_to_iso(i, j, self)
    }

    fn to_index(&self, point: Point) -> Option<TileIndex> {
        iso_to_index(point.x, point.y, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MapOptions;

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
    fn test_index_to_iso_origin() {
        let config = unit_config();
        let origin = index_to_iso(0.0, 0.0, &config);

        assert_eq!(origin, Point::new(config.offset_x(), config.offset_y()));
    }

    #[test]
    fn test_index_to_iso_axes() {
        let config = unit_config();

        // +i moves right and down, +j moves left and down
        assert_eq!(index_to_iso(1.0, 0.0, &config), Point::new(24.0, 11.0));
        assert_eq!(index_to_iso(0.0, 1.0, &config), Point::new(20.0, 11.0));
    }

    #[test]
    fn test_round_trip_every_tile() {
        for scale in [0.5, 1.0, 2.0, 3.0] {
            let config = GameConfig::default().with_scale(scale);
            let r = config.map_radius;

            for i in -r..=r {
                for j in -r..=r {
                    let point = index_to_iso(i as f64, j as f64, &config);
                    assert_eq!(
                        iso_to_index(point.x, point.y, &config),
                        Some(TileIndex::new(i, j)),
                        "scale {scale}, tile ({i}, {j})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_tile_centre_resolves_to_tile() {
        let config = GameConfig::default();
        let centre = index_to_iso(3.5, -1.5, &config);

        assert_eq!(config.to_index(centre), Some(TileIndex::new(3, -2)));
    }

    #[test]
    fn test_nan_propagates() {
        let config = unit_config();
        let (i, j) = iso_to_index_raw(f64::NAN, 1.0, &config);

        assert!(i.is_nan());
        assert!(j.is_nan());
        assert_eq!(iso_to_index(f64::NAN, 1.0, &config), None);
    }

    #[test]
    fn test_far_points_have_no_index() {
        let config = GameConfig::default();

        assert_eq!(iso_to_index(-1.0e15, -1.0e15, &config), None);
        assert_eq!(iso_to_index(1.0e15, 0.0, &config), None);
        assert_eq!(iso_to_index(f64::MAX, f64::MIN, &config), None);

        // Large but representable indices still resolve
        let far = index_to_iso(1.0e6, -1.0e6, &config);
        assert_eq!(
            iso_to_index(far.x, far.y, &config),
            Some(TileIndex::new(1_000_000, -1_000_000))
        );
    }
}
