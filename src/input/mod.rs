pub mod events;
pub mod interaction;
pub mod keyboard;

#[cfg(feature = "wasm")]
pub mod web;

// Re-export the essential types
pub use events::{InputEvent, KeyCode, PointerEvent, PointerKind, PointerSource};
pub use interaction::{
    CoordsUpdate, DragPhase, HoverChange, InteractionState, InteractionUpdate, PositionalUpdate,
    SelectionChange,
};
pub use keyboard::{KeyBinder, KeyBinding, VelocityChange};
