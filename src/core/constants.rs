//! Engine-wide constants for layout, input tuning and zoom controls.

/// Default map radius: tiles span `[-18, 18]` on both axes.
pub const DEFAULT_MAP_RADIUS: i32 = 18;

/// Default tile width in surface pixels (before scaling).
pub const DEFAULT_TILE_WIDTH: f64 = 16.0;

/// Default gap between neighbouring tiles, in tile units.
pub const DEFAULT_TILE_GAP: f64 = 0.02;

/// Scale a freshly built config starts at.
pub const DEFAULT_SCALE: f64 = 2.0;

/// Smallest and largest scale reachable through the zoom buttons.
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;

/// Rotation factor; 1 gives the classic 45 degree diamond.
pub const DEFAULT_ROTATION: f64 = 1.0;

/// Anisotropy factor; 2 squashes the diamond into the isometric 2:1 view.
pub const DEFAULT_ANISOTROPY: f64 = 2.0;

/// A pointer-up whose accumulated drag stays below this on both axes is a click.
/// Tuned by hand against [`DRAG_ACCUMULATOR_DIVISOR`].
pub const CLICK_THRESHOLD: f64 = 1.0;

/// Container position is divided by this before being added to the drag accumulator.
pub const DRAG_ACCUMULATOR_DIVISOR: f64 = 1000.0;

/// Velocity units removed per frame while the container coasts.
pub const VELOCITY_DECAY_PER_FRAME: i32 = 1;

/// Velocity applied by an arrow key press.
pub const KEY_VELOCITY_STEP: i32 = 5;

/// Interval between hold-down callbacks while a key stays pressed.
pub const KEY_HOLD_INTERVAL_MS: u64 = 17;

/// Container position right after a scene build, before clamping.
pub const INITIAL_CONTAINER_POSITION: (f64, f64) = (-400.0, -400.0);

/// Side length of the zoom buttons, in canvas pixels.
pub const ZOOM_BUTTON_SIZE: f64 = 45.0;

/// Horizontal distance from the right canvas edge to each zoom button centre.
pub const ZOOM_IN_RIGHT_OFFSET: f64 = 275.0;
pub const ZOOM_OUT_RIGHT_OFFSET: f64 = 200.0;

/// Vertical distance from the bottom canvas edge to the zoom button centres.
pub const ZOOM_BUTTON_BOTTOM_OFFSET: f64 = 40.0;

/// Top-left canvas position of the cat sprite.
pub const CAT_SPRITE_POSITION: (f64, f64) = (150.0, 150.0);
