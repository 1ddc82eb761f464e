use crate::core::config::GameConfig;
use crate::core::constants::VELOCITY_DECAY_PER_FRAME;
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Coasting speed of the container, in whole pixels per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Velocity needed to go from `previous` to `current` in one frame, floored
    pub fn between(previous: Point, current: Point) -> Self {
        let delta = current.subtract(&previous).floor();
        Self::new(delta.x as i32, delta.y as i32)
    }
}

/// A keyboard-driven velocity adjustment.
///
/// Deltas are added first, then any hard set overrides its axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocityChange {
    pub dvelx: i32,
    pub dvely: i32,
    pub hard_set_x: Option<i32>,
    pub hard_set_y: Option<i32>,
}

impl VelocityChange {
    pub fn delta(dvelx: i32, dvely: i32) -> Self {
        Self {
            dvelx,
            dvely,
            ..Default::default()
        }
    }

    pub fn hard_set_x(x: i32) -> Self {
        Self {
            hard_set_x: Some(x),
            ..Default::default()
        }
    }

    pub fn hard_set_y(y: i32) -> Self {
        Self {
            hard_set_y: Some(y),
            ..Default::default()
        }
    }

    pub fn apply(&self, velocity: Velocity) -> Velocity {
        Velocity {
            x: self.hard_set_x.unwrap_or(velocity.x + self.dvelx),
            y: self.hard_set_y.unwrap_or(velocity.y + self.dvely),
        }
    }
}

/// Position of the tile container inside the canvas plus its momentum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left of the container in canvas pixels
    pub position: Point,
    pub velocity: Velocity,
}

impl Viewport {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            velocity: Velocity::default(),
        }
    }

    /// Advances one frame: coast by the current velocity, decay it toward
    /// zero, then keep the container inside the configured borders.
    pub fn tick(&mut self, config: &GameConfig) {
        self.position.x += self.velocity.x as f64;
        self.velocity.x = decay(self.velocity.x);

        self.position.y += self.velocity.y as f64;
        self.velocity.y = decay(self.velocity.y);

        self.clamp_to_borders(config);
    }

    /// Lower bounds are applied before upper bounds so an inverted range
    /// settles on the upper one instead of panicking.
    pub fn clamp_to_borders(&mut self, config: &GameConfig) {
        if self.position.x < config.border_l() {
            self.position.x = config.border_l();
        }
        if self.position.x > config.border_r() {
            self.position.x = config.border_r();
        }
        if self.position.y < config.border_d() {
            self.position.y = config.border_d();
        }
        if self.position.y > config.border_u() {
            self.position.y = config.border_u();
        }
    }

    pub fn apply_velocity_change(&mut self, change: VelocityChange) {
        self.velocity = change.apply(self.velocity);
    }

    /// Converts a canvas-space point into container-local coordinates
    pub fn to_local(&self, canvas_point: Point) -> Point {
        canvas_point.subtract(&self.position)
    }

    pub fn stop(&mut self) {
        self.velocity = Velocity::default();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Point::default())
    }
}

fn decay(v: i32) -> i32 {
    if v > 0 {
        (v - VELOCITY_DECAY_PER_FRAME).max(0)
    } else if v < 0 {
        (v + VELOCITY_DECAY_PER_FRAME).min(0)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MapOptions;

    fn roomy_config() -> GameConfig {
        // Large map on a small canvas so the borders leave plenty of travel
        GameConfig::new(100.0, 100.0, MapOptions::default())
    }

    #[test]
    fn test_velocity_decays_by_one_per_tick() {
        let config = roomy_config();
        let mut viewport = Viewport::new(Point::new(-500.0, -300.0));
        viewport.velocity = Velocity::new(3, 0);

        let mut xs = Vec::new();
        for _ in 0..5 {
            viewport.tick(&config);
            xs.push((viewport.position.x, viewport.velocity.x));
        }

        assert_eq!(
            xs,
            vec![
                (-497.0, 2),
                (-495.0, 1),
                (-494.0, 0),
                (-494.0, 0),
                (-494.0, 0)
            ]
        );
        assert_eq!(viewport.position.y, -300.0);
    }

    #[test]
    fn test_negative_velocity_decays_toward_zero() {
        let config = roomy_config();
        let mut viewport = Viewport::new(Point::new(-500.0, -300.0));
        viewport.velocity = Velocity::new(0, -2);

        viewport.tick(&config);
        assert_eq!(viewport.velocity, Velocity::new(0, -1));
        assert_eq!(viewport.position.y, -302.0);

        viewport.tick(&config);
        viewport.tick(&config);
        assert!(viewport.velocity.is_zero());
        assert_eq!(viewport.position.y, -303.0);
    }

    #[test]
    fn test_tick_clamps_to_borders() {
        let config = roomy_config();
        let mut viewport = Viewport::new(Point::new(-5.0, -5.0));
        viewport.velocity = Velocity::new(20, 20);

        viewport.tick(&config);
        assert_eq!(viewport.position, Point::new(0.0, 0.0));
        assert_eq!(viewport.velocity, Velocity::new(19, 19));

        viewport.position = Point::new(-1.0e6, -1.0e6);
        viewport.stop();
        viewport.tick(&config);
        assert_eq!(
            viewport.position,
            Point::new(config.border_l(), config.border_d())
        );
    }

    #[test]
    fn test_inverted_borders_do_not_panic() {
        // Canvas wider than the map puts border_l above border_r
        let config = GameConfig::new(
            10_000.0,
            10_000.0,
            MapOptions {
                map_radius: 1,
                tile_width: 4.0,
                tile_gap: 0.0,
            },
        );
        assert!(config.border_l() > config.border_r());

        let mut viewport = Viewport::new(Point::new(-50.0, -50.0));
        viewport.tick(&config);
        assert_eq!(viewport.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_velocity_change() {
        let mut viewport = Viewport::default();

        viewport.apply_velocity_change(VelocityChange::delta(0, 5));
        viewport.apply_velocity_change(VelocityChange::delta(0, 5));
        assert_eq!(viewport.velocity, Velocity::new(0, 10));

        viewport.apply_velocity_change(VelocityChange::hard_set_y(0));
        assert!(viewport.velocity.is_zero());
    }

    #[test]
    fn test_velocity_between_floors() {
        let v = Velocity::between(Point::new(10.0, 10.0), Point::new(12.5, 7.5));
        assert_eq!(v, Velocity::new(2, -3));
    }
}
