//! Tile colours and the per-cell colouring policy used when a grid is built.

use crate::core::geo::TileIndex;
use crate::{IsoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB fill colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileColor(pub u32);

impl TileColor {
    pub const GREEN: TileColor = TileColor(0x009900);
    pub const RED: TileColor = TileColor(0x990000);
    pub const BLUE: TileColor = TileColor(0x000099);
    pub const SELECTED: TileColor = TileColor(0xFF0000);
    pub const OUTLINE: TileColor = TileColor(0xFFFFFF);

    /// Parses `"0x009900"`, `"#009900"` or a bare `"009900"`
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value
            .trim()
            .trim_start_matches("0x")
            .trim_start_matches("0X")
            .trim_start_matches('#');

        if digits.is_empty() || digits.len() > 6 {
            return Err(IsoError::InvalidConfig(format!("bad colour '{value}'")));
        }

        u32::from_str_radix(digits, 16)
            .map(TileColor)
            .map_err(|_| IsoError::InvalidConfig(format!("bad colour '{value}'")))
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0)
    }
}

/// Chooses the base colour of every cell when the grid is built
pub trait ColorPolicy {
    fn color_for(&self, index: TileIndex) -> TileColor;
}

impl<F> ColorPolicy for F
where
    F: Fn(TileIndex) -> TileColor,
{
    fn color_for(&self, index: TileIndex) -> TileColor {
        self(index)
    }
}

/// Green field, red warning band past `band` on either axis, and one blue
/// landmark column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultPalette {
    pub band: i32,
    pub marker_column: i32,
    pub base: TileColor,
    pub border: TileColor,
    pub marker: TileColor,
}

impl Default for DefaultPalette {
    fn default() -> Self {
        Self {
            band: 7,
            marker_column: -5,
            base: TileColor::GREEN,
            border: TileColor::RED,
            marker: TileColor::BLUE,
        }
    }
}

impl ColorPolicy for DefaultPalette {
    fn color_for(&self, index: TileIndex) -> TileColor {
        if index.i == self.marker_column {
            self.marker
        } else if index.i.abs() > self.band || index.j.abs() > self.band {
            self.border
        } else {
            self.base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = DefaultPalette::default();

        assert_eq!(palette.color_for(TileIndex::new(0, 0)), TileColor::GREEN);
        assert_eq!(palette.color_for(TileIndex::new(7, -7)), TileColor::GREEN);
        assert_eq!(palette.color_for(TileIndex::new(8, 0)), TileColor::RED);
        assert_eq!(palette.color_for(TileIndex::new(0, -8)), TileColor::RED);
        assert_eq!(palette.color_for(TileIndex::new(-5, 3)), TileColor::BLUE);
        // The marker column wins over the warning band
        assert_eq!(palette.color_for(TileIndex::new(-5, 12)), TileColor::BLUE);
    }

    #[test]
    fn test_closure_policy() {
        let checker = |index: TileIndex| {
            if (index.i + index.j) % 2 == 0 {
                TileColor(0x000000)
            } else {
                TileColor(0xFFFFFF)
            }
        };

        assert_eq!(checker.color_for(TileIndex::new(1, 1)), TileColor(0x000000));
        assert_eq!(checker.color_for(TileIndex::new(1, 2)), TileColor(0xFFFFFF));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(TileColor::from_hex("0x009900").unwrap(), TileColor::GREEN);
        assert_eq!(TileColor::from_hex("#990000").unwrap(), TileColor::RED);
        assert_eq!(TileColor::from_hex("000099").unwrap(), TileColor::BLUE);
        assert!(TileColor::from_hex("0x").is_err());
        assert!(TileColor::from_hex("zzzzzz").is_err());
        assert!(TileColor::from_hex("0x1234567").is_err());

        assert_eq!(TileColor::RED.to_string(), "0x990000");
        assert_eq!(TileColor(0x123456).rgb(), (0x12, 0x34, 0x56));
    }
}
