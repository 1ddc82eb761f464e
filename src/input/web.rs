//! Browser keyboard listeners.
//!
//! Attaches `keydown` / `keyup` handlers to the window and forwards them as
//! [`InputEvent`]s. Dropping [`KeyboardListeners`] detaches both handlers, so
//! a torn-down scene never receives another key.

use crate::input::events::{InputEvent, KeyCode};
use crate::{IsoError, Result};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

type KeyCallback = Closure<dyn FnMut(KeyboardEvent)>;

pub struct KeyboardListeners {
    window: Window,
    down: KeyCallback,
    up: KeyCallback,
}

impl KeyboardListeners {
    /// Subscribes `sink` to window key events. Arrow keys have their default
    /// scrolling behaviour suppressed.
    pub fn attach<F>(sink: F) -> Result<Self>
    where
        F: Fn(InputEvent) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| IsoError::Web("no window".into()))?;
        let sink = Rc::new(sink);

        let down_sink = Rc::clone(&sink);
        let down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = KeyCode::from_key_name(&event.key());
            if key.is_arrow() {
                event.prevent_default();
            }
            down_sink(InputEvent::KeyDown { key });
        });

        let up_sink = Rc::clone(&sink);
        let up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = KeyCode::from_key_name(&event.key());
            if key.is_arrow() {
                event.prevent_default();
            }
            up_sink(InputEvent::KeyUp { key });
        });

        window
            .add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())
            .map_err(|e| IsoError::Web(format!("keydown listener: {:?}", e)))?;
        window
            .add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())
            .map_err(|e| IsoError::Web(format!("keyup listener: {:?}", e)))?;

        log::debug!("keyboard listeners attached");
        Ok(Self { window, down, up })
    }
}

impl Drop for KeyboardListeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.down.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.up.as_ref().unchecked_ref());
        log::debug!("keyboard listeners detached");
    }
}

