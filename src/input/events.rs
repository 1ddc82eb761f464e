use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Phase of a pointer gesture. Mouse and touch events alias onto the same
/// three phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// A pointer event as seen by the tile container.
///
/// `local` is the pointer in the container's own (tile surface) coordinates,
/// `parent` is the same pointer in the coordinates of the container's
/// parent, i.e. the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub local: Point,
    pub parent: Point,
    #[serde(default)]
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, local: Point, parent: Point) -> Self {
        Self {
            kind,
            local,
            parent,
            source: PointerSource::Mouse,
        }
    }

    /// Builds an event from a canvas position, deriving the local position
    /// from the container's top-left corner.
    pub fn from_canvas(kind: PointerKind, canvas: Point, container_position: Point) -> Self {
        Self::new(kind, canvas.subtract(&container_position), canvas)
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    /// Maps DOM-style event names (`mousedown`, `touchmove`, `pointerup`, ...)
    /// onto a pointer phase.
    pub fn kind_from_name(name: &str) -> Option<(PointerKind, PointerSource)> {
        let kind = match name {
            "mousedown" | "touchstart" | "pointerdown" => PointerKind::Down,
            "mousemove" | "touchmove" | "pointermove" => PointerKind::Move,
            "mouseup" | "touchend" | "pointerup" | "mouseupoutside" | "touchendoutside" => {
                PointerKind::Up
            }
            _ => return None,
        };
        let source = if name.starts_with("touch") {
            PointerSource::Touch
        } else {
            PointerSource::Mouse
        };
        Some((kind, source))
    }
}

/// Keyboard key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Plus,
    Minus,
    Escape,
    Other(u32),
}

impl KeyCode {
    /// Parses a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "+" => KeyCode::Plus,
            "-" => KeyCode::Minus,
            "Escape" => KeyCode::Escape,
            other => KeyCode::Other(other.chars().next().map(|c| c as u32).unwrap_or(0)),
        }
    }

    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            KeyCode::ArrowUp | KeyCode::ArrowDown | KeyCode::ArrowLeft | KeyCode::ArrowRight
        )
    }
}

/// Input events the scene consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    /// Canvas resize
    Resize { size: Point },
}

impl InputEvent {
    /// Gets the canvas position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::Pointer(event) => Some(event.parent),
            _ => None,
        }
    }

    pub fn is_pointer_event(&self) -> bool {
        matches!(self, InputEvent::Pointer(_))
    }

    pub fn is_keyboard_event(&self) -> bool {
        matches!(self, InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. })
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}
