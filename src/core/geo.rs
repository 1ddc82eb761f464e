use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a point in screen, canvas or surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn divide(&self, scalar: f64) -> Point {
        Point::new(self.x / scalar, self.y / scalar)
    }

    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }

    /// False when either component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}, {:.2}", self.x, self.y)
    }
}

/// Signed grid coordinate of a tile.
///
/// `i` runs along the screen's down-right diagonal and `j` along the
/// down-left diagonal; `(0, 0)` sits in the middle of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    pub i: i32,
    pub j: i32,
}

impl TileIndex {
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Checks if the index lies inside a map of the given radius
    pub fn is_within(&self, map_radius: i32) -> bool {
        let axis = -map_radius..=map_radius;
        axis.contains(&self.i) && axis.contains(&self.j)
    }
}

impl From<(i32, i32)> for TileIndex {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.0);

        assert_eq!(a.add(&b), Point::new(4.0, 5.0));
        assert_eq!(a.subtract(&b), Point::new(2.0, 3.0));
        assert_eq!(a.divide(2.0), Point::new(1.5, 2.0));
        assert_eq!(Point::new(-0.5, 1.5).floor(), Point::new(-1.0, 1.0));
    }

    #[test]
    fn test_point_finiteness() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_tile_index_display_and_bounds() {
        let index = TileIndex::new(-5, 3);
        assert_eq!(index.to_string(), "-5,3");
        assert!(index.is_within(5));
        assert!(!index.is_within(4));
        assert_eq!(TileIndex::from((1, 2)), TileIndex::new(1, 2));
    }

    #[test]
    fn test_extreme_indices_are_outside() {
        assert!(!TileIndex::new(i32::MIN, 0).is_within(18));
        assert!(!TileIndex::new(0, i32::MIN).is_within(18));
        assert!(!TileIndex::new(i32::MAX, i32::MIN).is_within(i32::MAX));
        assert!(TileIndex::new(-18, 18).is_within(18));
    }
}
