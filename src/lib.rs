//! # isotile
//!
//! An isometric tile-map engine.
//!
//! A square grid of diamond tiles is laid out once into an off-screen
//! surface and composited as a single draggable container. The crate owns
//! the coordinate math, the tile addressing scheme and the pointer/keyboard
//! interaction state; drawing is delegated to a [`RenderSurface`].

pub mod assets;
pub mod core;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod tiles;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{GameConfig, MapOptions, MapPreset, SceneSettings},
    geo::{Point, TileIndex},
    transform::{index_to_iso, iso_to_index},
    viewport::{Velocity, Viewport},
};

pub use tiles::{
    grid::TileGrid,
    palette::{ColorPolicy, DefaultPalette, TileColor},
    tile::Tile,
};

pub use input::{
    events::{KeyCode, PointerEvent, PointerKind},
    interaction::{InteractionState, InteractionUpdate},
    keyboard::{KeyBinder, VelocityChange},
};

pub use assets::{
    cache::TextureCache,
    loader::{AssetCollection, AssetLoader},
    AssetKey,
};

pub use scene::{surface::HeadlessSurface, Scene};
pub use traits::{CoordinateTransform, RenderSurface};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, IsoError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum IsoError {
    #[error("no tile at ({i}, {j})")]
    TileNotFound { i: i32, j: i32 },

    #[error("[{status}] {reason}: {url}")]
    Http {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Web error: {0}")]
    Web(String),
}

impl IsoError {
    /// True for lookups that missed the grid; callers treat these as "nothing there".
    pub fn is_tile_not_found(&self) -> bool {
        matches!(self, IsoError::TileNotFound { .. })
    }
}

/// Error type alias for convenience
pub type Error = IsoError;
