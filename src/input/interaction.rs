//! Pointer drag / click / hover state machine.
//!
//! The state only changes inside [`InteractionState::handle`]; everything it
//! needs from the scene (container position, config) is passed in, and
//! everything the scene must do in response comes back as an
//! [`InteractionUpdate`].

use crate::core::config::GameConfig;
use crate::core::constants::{CLICK_THRESHOLD, DRAG_ACCUMULATOR_DIVISOR};
use crate::core::geo::{Point, TileIndex};
use crate::core::transform::iso_to_index;
use crate::core::viewport::Velocity;
use crate::input::events::{PointerEvent, PointerKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Hovered tile moved from `previous` to `current`. `current` is `None` when
/// the pointer moved onto the selected tile, which never gets an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverChange {
    pub previous: Option<TileIndex>,
    pub current: Option<TileIndex>,
}

/// Read-only pointer readout produced while not dragging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordsUpdate {
    /// Pointer in tile surface pixels
    pub cartesian: Point,
    pub tile: TileIndex,
    pub hover: Option<HoverChange>,
}

/// New container placement produced while dragging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionalUpdate {
    /// Container position before this move
    pub previous_position: Point,
    pub new_position: Point,
    /// Drag accumulator after this move
    pub dragged: Point,
    /// Pointer relative to the drag anchor, in surface pixels
    pub local_offset: Point,
    /// Pointer in canvas pixels
    pub parent: Point,
}

/// Selection edit produced by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub deselected: Option<TileIndex>,
    pub selected: Option<TileIndex>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionUpdate {
    DragStarted {
        anchor: Point,
        tile: Option<TileIndex>,
    },
    Coords(CoordsUpdate),
    Reposition(PositionalUpdate),
    Click(SelectionChange),
    Release {
        velocity: Velocity,
    },
    /// Nothing to do: stray pointer-up, or a position with no tile index
    Ignored,
}

/// Transient drag state plus the current selection and hover
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    phase: DragPhase,
    /// Pointer position inside the container when the drag began
    anchor: Point,
    /// Scaled running sum used to tell clicks from drags
    dragged: Point,
    /// Container position before the latest drag move
    previous_position: Point,
    /// Tile under the anchor, selected if the gesture ends up a click
    pending: Option<TileIndex>,
    selected: Option<TileIndex>,
    hovered: Option<TileIndex>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn dragged(&self) -> Point {
        self.dragged
    }

    pub fn selected(&self) -> Option<TileIndex> {
        self.selected
    }

    pub fn hovered(&self) -> Option<TileIndex> {
        self.hovered
    }

    /// Feeds one pointer event through the state machine
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        container_position: Point,
        config: &GameConfig,
    ) -> InteractionUpdate {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.local, config),
            PointerKind::Move => self.pointer_move(event, container_position, config),
            PointerKind::Up => self.pointer_up(container_position),
        }
    }

    fn pointer_down(&mut self, local: Point, config: &GameConfig) -> InteractionUpdate {
        self.phase = DragPhase::Dragging;
        self.anchor = local;
        self.dragged = Point::default();
        self.previous_position = Point::default();
        self.pending = iso_to_index(local.x, local.y, config)
            .filter(|tile| tile.is_within(config.map_radius));

        InteractionUpdate::DragStarted {
            anchor: self.anchor,
            tile: self.pending,
        }
    }

    fn pointer_move(
        &mut self,
        event: &PointerEvent,
        container_position: Point,
        config: &GameConfig,
    ) -> InteractionUpdate {
        match self.phase {
            DragPhase::Idle => self.hover(event.local, config),
            DragPhase::Dragging => {
                if !event.parent.is_finite() {
                    return InteractionUpdate::Ignored;
                }

                self.previous_position = container_position;
                self.dragged = self
                    .dragged
                    .add(&container_position.divide(DRAG_ACCUMULATOR_DIVISOR));

                InteractionUpdate::Reposition(PositionalUpdate {
                    previous_position: container_position,
                    new_position: event.parent.subtract(&self.anchor),
                    dragged: self.dragged,
                    local_offset: event.local.subtract(&self.anchor),
                    parent: event.parent,
                })
            }
        }
    }

    fn hover(&mut self, local: Point, config: &GameConfig) -> InteractionUpdate {
        let Some(tile) = iso_to_index(local.x, local.y, config) else {
            return InteractionUpdate::Ignored;
        };

        let hover = if Some(tile) == self.selected {
            log::debug!("hovering selected tile {}, outline left alone", tile);
            self.hovered.take().map(|previous| HoverChange {
                previous: Some(previous),
                current: None,
            })
        } else if Some(tile) != self.hovered {
            let change = HoverChange {
                previous: self.hovered,
                current: Some(tile),
            };
            self.hovered = Some(tile);
            Some(change)
        } else {
            None
        };

        InteractionUpdate::Coords(CoordsUpdate {
            cartesian: local,
            tile,
            hover,
        })
    }

    fn pointer_up(&mut self, container_position: Point) -> InteractionUpdate {
        if self.phase == DragPhase::Idle {
            return InteractionUpdate::Ignored;
        }
        self.phase = DragPhase::Idle;

        if self.is_click() {
            let clicked = self.pending.take();
            let deselected = self.selected;
            let selected = if clicked == self.selected {
                None
            } else {
                clicked
            };
            self.selected = selected;
            if selected.is_some() && selected == self.hovered {
                self.hovered = None;
            }

            log::debug!("click: {:?} -> {:?}", deselected, selected);
            return InteractionUpdate::Click(SelectionChange {
                deselected,
                selected,
            });
        }

        let velocity = Velocity::between(self.previous_position, container_position);
        self.previous_position = Point::default();
        self.pending = None;

        log::debug!("drag released at {} with {:?}", container_position, velocity);
        InteractionUpdate::Release { velocity }
    }

    /// Both axes of the drag accumulator stayed inside the click band
    pub fn is_click(&self) -> bool {
        self.dragged.x.abs() < CLICK_THRESHOLD && self.dragged.y.abs() < CLICK_THRESHOLD
    }

    /// Forgets any gesture in flight; the selection survives
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.anchor = Point::default();
        self.dragged = Point::default();
        self.previous_position = Point::default();
        self.pending = None;
        self.hovered = None;
    }
}
