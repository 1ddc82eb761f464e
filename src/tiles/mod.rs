pub mod grid;
pub mod palette;
pub mod tile;

// Re-exports for convenience
pub use grid::TileGrid;
pub use palette::{ColorPolicy, DefaultPalette, TileColor};
pub use tile::Tile;
