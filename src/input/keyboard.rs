//! Arrow-key panning.
//!
//! A [`KeyBinder`] turns key transitions into [`VelocityChange`]s for the
//! viewport. Hold repeat is polled from the frame tick, so dropping or
//! clearing the binder leaves nothing running behind it.

use crate::core::constants::{KEY_HOLD_INTERVAL_MS, KEY_VELOCITY_STEP};
use crate::input::events::KeyCode;
use fxhash::FxHashMap;
use instant::Instant;
use std::time::Duration;

pub use crate::core::viewport::VelocityChange;

/// What a single key does to the viewport velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub press: VelocityChange,
    pub release: VelocityChange,
    /// Repeated every hold interval while the key stays down
    pub hold: Option<VelocityChange>,
}

impl KeyBinding {
    /// Binding that nudges the y axis by `step` and sustains it while held
    pub fn vertical(key: KeyCode, step: i32) -> Self {
        Self {
            key,
            press: VelocityChange::delta(0, step),
            release: VelocityChange::hard_set_y(0),
            hold: Some(VelocityChange::hard_set_y(step)),
        }
    }

    /// Binding that nudges the x axis by `step` and sustains it while held
    pub fn horizontal(key: KeyCode, step: i32) -> Self {
        Self {
            key,
            press: VelocityChange::delta(step, 0),
            release: VelocityChange::hard_set_x(0),
            hold: Some(VelocityChange::hard_set_x(step)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct HoldState {
    /// Time of the last emitted hold repeat (or the press)
    last_repeat: Instant,
}

/// Tracks bound keys and which of them are currently down
#[derive(Debug, Clone)]
pub struct KeyBinder {
    bindings: FxHashMap<KeyCode, KeyBinding>,
    held: FxHashMap<KeyCode, HoldState>,
    hold_interval: Duration,
}

impl Default for KeyBinder {
    fn default() -> Self {
        Self {
            bindings: FxHashMap::default(),
            held: FxHashMap::default(),
            hold_interval: Duration::from_millis(KEY_HOLD_INTERVAL_MS),
        }
    }
}

impl KeyBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up/down pan vertically, left/right pan horizontally
    pub fn with_arrow_keys() -> Self {
        let mut binder = Self::new();
        binder.bind(KeyBinding::vertical(KeyCode::ArrowUp, KEY_VELOCITY_STEP));
        binder.bind(KeyBinding::vertical(KeyCode::ArrowDown, -KEY_VELOCITY_STEP));
        binder.bind(KeyBinding::horizontal(KeyCode::ArrowLeft, KEY_VELOCITY_STEP));
        binder.bind(KeyBinding::horizontal(KeyCode::ArrowRight, -KEY_VELOCITY_STEP));
        binder
    }

    pub fn with_hold_interval(mut self, interval: Duration) -> Self {
        self.hold_interval = interval;
        self
    }

    pub fn bind(&mut self, binding: KeyBinding) {
        self.bindings.insert(binding.key, binding);
    }

    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains_key(&key)
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Key went down. Returns the press change the first time only; OS
    /// auto-repeat while the key is held is swallowed.
    pub fn key_down(&mut self, key: KeyCode, now: Instant) -> Option<VelocityChange> {
        let binding = self.bindings.get(&key)?;
        if self.held.contains_key(&key) {
            return None;
        }

        self.held.insert(key, HoldState { last_repeat: now });
        log::debug!("{:?} pressed", key);
        Some(binding.press)
    }

    /// Key went up. Returns the release change if the key was down.
    pub fn key_up(&mut self, key: KeyCode) -> Option<VelocityChange> {
        let binding = self.bindings.get(&key)?;
        self.held.remove(&key)?;

        log::debug!("{:?} released", key);
        Some(binding.release)
    }

    /// Emits one hold change per full interval elapsed since the last repeat
    /// of every held key.
    pub fn poll(&mut self, now: Instant) -> Vec<VelocityChange> {
        let mut changes = Vec::new();
        if self.hold_interval.is_zero() {
            return changes;
        }

        for (key, state) in self.held.iter_mut() {
            let Some(hold) = self.bindings.get(key).and_then(|b| b.hold) else {
                continue;
            };

            let elapsed = now.saturating_duration_since(state.last_repeat);
            let repeats = (elapsed.as_nanos() / self.hold_interval.as_nanos()) as u32;
            if repeats == 0 {
                continue;
            }

            log::trace!("{:?} held down, {} repeats", key, repeats);
            changes.extend(std::iter::repeat(hold).take(repeats as usize));
            state.last_repeat += self.hold_interval * repeats;
        }

        changes
    }

    /// Forgets every held key without emitting releases. Used on scene
    /// teardown so no repeat survives a rebuild.
    pub fn clear_holds(&mut self) -> usize {
        let cleared = self.held.len();
        self.held.clear();
        if cleared > 0 {
            log::debug!("cleared {} held keys", cleared);
        }
        cleared
    }
}
