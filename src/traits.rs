//! Shared trait abstractions for the seams between the engine and its host
//!
//! The engine never draws anything itself. It computes tile geometry and
//! colours and hands finished [`Tile`]s to a [`RenderSurface`], which may be
//! an egui shape cache, a browser canvas, or a recording stub in tests.

use crate::core::geo::{Point, TileIndex};
use crate::tiles::tile::Tile;

/// Trait for coordinate transformation operations between tile space and
/// surface pixels
pub trait CoordinateTransform {
    /// Project a (possibly fractional) tile index onto the surface
    fn to_surface(&self, i: f64, j: f64) -> Point;

    /// Resolve a surface point to the tile index underneath it
    fn to_index(&self, point: Point) -> Option<TileIndex>;
}

/// Off-screen target the tile grid is drawn into.
///
/// Children are addressed by the tile's slot; `render_to_texture` bakes the
/// current children into the single texture the container displays.
pub trait RenderSurface {
    /// Add a newly built tile as the next child
    fn add_tile(&mut self, slot: usize, tile: &Tile);

    /// Clear and redraw an existing child after its colour or outline changed
    fn redraw_tile(&mut self, slot: usize, tile: &Tile);

    /// Remove every child
    fn clear(&mut self);

    /// Bake the children into the off-screen texture
    fn render_to_texture(&mut self, width: f64, height: f64);

    /// Number of children currently on the surface
    fn child_count(&self) -> usize;
}
