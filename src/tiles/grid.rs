//! Flat, row-major storage for the tile grid.
//!
//! A map of radius `r` holds `(2r + 1)²` tiles. Tile `(i, j)` lives at slot
//! `(i + r)·(2r + 1) + (j + r)`, so `(-r, -r)` is slot 0 and `(r, r)` is the
//! last slot. The slot is also the tile's child index on the render surface.

use crate::core::config::GameConfig;
use crate::core::geo::TileIndex;
use crate::tiles::palette::{ColorPolicy, TileColor};
use crate::tiles::tile::Tile;
use crate::traits::RenderSurface;
use crate::{IsoError, Result};

/// Slot of `(i, j)` without any range check; may be negative or past the end
pub fn raw_slot(i: i32, j: i32, map_radius: i32) -> i64 {
    let (i, j, r) = (i as i64, j as i64, map_radius as i64);
    (i + r) * (2 * r + 1) + (j + r)
}

/// Tile side table indexed by slot
#[derive(Debug, Clone)]
pub struct TileGrid {
    map_radius: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Builds every tile of the map, coloured by `policy`
    pub fn build(config: &GameConfig, policy: &dyn ColorPolicy) -> Self {
        let r = config.map_radius.max(0);
        let mut tiles = Vec::with_capacity(config.options().tile_count());

        for i in -r..=r {
            for j in -r..=r {
                let index = TileIndex::new(i, j);
                tiles.push(Tile::new(
                    index,
                    config.tile_gap,
                    config,
                    policy.color_for(index),
                ));
            }
        }

        log::debug!("built {} tiles for radius {}", tiles.len(), r);
        Self {
            map_radius: r,
            tiles,
        }
    }

    pub fn map_radius(&self) -> i32 {
        self.map_radius
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Slot of `(i, j)`, or `TileNotFound` if it lies outside the map
    pub fn slot(&self, index: TileIndex) -> Result<usize> {
        if !index.is_within(self.map_radius) {
            return Err(IsoError::TileNotFound {
                i: index.i,
                j: index.j,
            });
        }
        Ok(raw_slot(index.i, index.j, self.map_radius) as usize)
    }

    /// Inverse of [`TileGrid::slot`]
    pub fn index_of(&self, slot: usize) -> Option<TileIndex> {
        if slot >= self.tiles.len() {
            return None;
        }
        let edge = (2 * self.map_radius + 1) as usize;
        let i = (slot / edge) as i32 - self.map_radius;
        let j = (slot % edge) as i32 - self.map_radius;
        Some(TileIndex::new(i, j))
    }

    pub fn get(&self, index: TileIndex) -> Result<&Tile> {
        let slot = self.slot(index)?;
        self.tiles.get(slot).ok_or(IsoError::TileNotFound {
            i: index.i,
            j: index.j,
        })
    }

    pub fn get_mut(&mut self, index: TileIndex) -> Result<&mut Tile> {
        let slot = self.slot(index)?;
        self.tiles.get_mut(slot).ok_or(IsoError::TileNotFound {
            i: index.i,
            j: index.j,
        })
    }

    /// Iterates `(slot, tile)` in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Tile)> {
        self.tiles.iter().enumerate()
    }

    /// Adds every tile to `surface` in slot order
    pub fn attach(&self, surface: &mut dyn RenderSurface) {
        for (slot, tile) in self.iter() {
            surface.add_tile(slot, tile);
        }
    }

    /// Recolours a tile and redraws it on `surface`
    pub fn set_tile_color(
        &mut self,
        index: TileIndex,
        color: TileColor,
        alpha: f32,
        surface: &mut dyn RenderSurface,
    ) -> Result<()> {
        let slot = self.slot(index)?;
        let tile = &mut self.tiles[slot];
        tile.set_color(color, alpha);
        surface.redraw_tile(slot, tile);
        Ok(())
    }

    /// Toggles the hover outline of a tile and redraws it on `surface`
    pub fn set_tile_outline(
        &mut self,
        index: TileIndex,
        outlined: bool,
        surface: &mut dyn RenderSurface,
    ) -> Result<()> {
        let slot = self.slot(index)?;
        let tile = &mut self.tiles[slot];
        if tile.outlined != outlined {
            tile.set_outlined(outlined);
            surface.redraw_tile(slot, tile);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MapOptions;
    use crate::scene::surface::HeadlessSurface;
    use crate::tiles::palette::DefaultPalette;
    use std::collections::HashSet;

    fn grid(radius: i32) -> TileGrid {
        let config = GameConfig::new(
            100.0,
            100.0,
            MapOptions {
                map_radius: radius,
                tile_width: 1.0,
                tile_gap: 0.0,
            },
        );
        TileGrid::build(&config, &DefaultPalette::default())
    }

    #[test]
    fn test_slot_endpoints() {
        let grid = grid(5);

        assert_eq!(grid.len(), 121);
        assert_eq!(grid.slot(TileIndex::new(-5, -5)).unwrap(), 0);
        assert_eq!(grid.slot(TileIndex::new(5, 5)).unwrap(), 120);
        assert_eq!(grid.slot(TileIndex::new(0, 0)).unwrap(), 60);
    }

    #[test]
    fn test_slot_is_injective_and_invertible() {
        let grid = grid(4);
        let mut seen = HashSet::new();

        for i in -4..=4 {
            for j in -4..=4 {
                let index = TileIndex::new(i, j);
                let slot = grid.slot(index).unwrap();
                assert!(seen.insert(slot), "slot {slot} reused");
                assert_eq!(grid.index_of(slot), Some(index));
                assert_eq!(grid.get(index).unwrap().index, index);
            }
        }
        assert_eq!(seen.len(), grid.len());
        assert_eq!(grid.index_of(grid.len()), None);
    }

    #[test]
    fn test_out_of_range_lookup_fails() {
        let grid = grid(5);

        for (i, j) in [(6, 0), (0, 6), (-6, -6), (0, -6), (100, 100)] {
            let err = grid.get(TileIndex::new(i, j)).unwrap_err();
            assert!(err.is_tile_not_found(), "({i}, {j}) should miss");
        }

        // (0, 6) would alias slot (1, -5) without the per-axis check
        assert!(raw_slot(0, 6, 5) >= 0);
        assert!((raw_slot(0, 6, 5) as usize) < grid.len());
    }

    #[test]
    fn test_build_applies_policy() {
        let grid = grid(9);

        assert_eq!(grid.get(TileIndex::new(0, 0)).unwrap().color, TileColor::GREEN);
        assert_eq!(grid.get(TileIndex::new(9, 0)).unwrap().color, TileColor::RED);
        assert_eq!(grid.get(TileIndex::new(-5, 0)).unwrap().color, TileColor::BLUE);
    }

    #[test]
    fn test_set_tile_color_redraws() {
        let mut grid = grid(2);
        let mut surface = HeadlessSurface::new();
        grid.attach(&mut surface);

        grid.set_tile_color(TileIndex::new(1, -1), TileColor::SELECTED, 0.5, &mut surface)
            .unwrap();

        let slot = grid.slot(TileIndex::new(1, -1)).unwrap();
        assert_eq!(surface.redraws(), &[slot]);
        assert_eq!(surface.tile(slot).unwrap().color, TileColor::SELECTED);
        assert_eq!(surface.tile(slot).unwrap().alpha, 0.5);

        let err = grid
            .set_tile_color(TileIndex::new(3, 0), TileColor::SELECTED, 1.0, &mut surface)
            .unwrap_err();
        assert!(err.is_tile_not_found());
        assert_eq!(surface.redraws().len(), 1);
    }

    #[test]
    fn test_outline_redraws_only_on_change() {
        let mut grid = grid(2);
        let mut surface = HeadlessSurface::new();
        grid.attach(&mut surface);

        let index = TileIndex::new(0, 0);
        grid.set_tile_outline(index, true, &mut surface).unwrap();
        grid.set_tile_outline(index, true, &mut surface).unwrap();
        assert_eq!(surface.redraws().len(), 1);
        assert!(grid.get(index).unwrap().outlined);
    }
}
