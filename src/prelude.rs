//! Prelude module for common isotile types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use isotile::prelude::*;`

pub use crate::core::{
    config::{GameConfig, MapOptions, MapPreset, SceneSettings},
    geo::{Point, TileIndex},
    transform::{index_to_iso, iso_to_index},
    viewport::{Velocity, Viewport},
};

pub use crate::tiles::{ColorPolicy, DefaultPalette, Tile, TileColor, TileGrid};

pub use crate::input::{
    InputEvent, InteractionState, InteractionUpdate, KeyBinder, KeyCode, PointerEvent,
    PointerKind, VelocityChange,
};

pub use crate::assets::{AssetKey, AssetLoader, DirectorySource, HttpFetcher, TextureCache};

#[cfg(feature = "tokio-runtime")]
pub use crate::assets::FileFetcher;

pub use crate::scene::{HeadlessSurface, Scene};

pub use crate::ui::{Indicators, Sprite, ZoomAction, ZoomControls};

#[cfg(feature = "egui")]
pub use crate::ui::{IsoMapWidget, ShapeSurface, UiIsoMapExt};

pub use crate::traits::{CoordinateTransform, RenderSurface};

pub use crate::{Error as IsoMapError, Result};

pub use instant::Instant;
pub use std::time::Duration;
