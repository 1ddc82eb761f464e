//! Browser build of the tile map without a renderer: the page forwards
//! pointer events and calls `animate` from `requestAnimationFrame`, while
//! arrow keys reach the scene through window listeners.

use isotile::input::web::KeyboardListeners;
use isotile::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A scene plus the key listeners feeding it. Dropping it detaches them.
#[wasm_bindgen]
pub struct WasmScene {
    scene: Rc<RefCell<Scene<HeadlessSurface>>>,
    _keys: KeyboardListeners,
}

#[wasm_bindgen]
impl WasmScene {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<WasmScene, JsValue> {
        let config = GameConfig::new(width, height, MapOptions::default());
        let scene = Rc::new(RefCell::new(
            Scene::new(config, HeadlessSurface::new()).map_err(js_error)?,
        ));

        let sink = Rc::clone(&scene);
        let keys = KeyboardListeners::attach(move |event| {
            // A key event can arrive while the page holds the scene mutably
            if let Ok(mut scene) = sink.try_borrow_mut() {
                scene.handle_input(&event, Instant::now());
            }
        })
        .map_err(js_error)?;

        Ok(WasmScene { scene, _keys: keys })
    }

    /// `kind` is a DOM pointer event name such as `pointerdown`
    pub fn pointer(&self, kind: &str, x: f64, y: f64) {
        let Some((kind, source)) = PointerEvent::kind_from_name(kind) else {
            return;
        };
        let mut scene = self.scene.borrow_mut();
        let event = PointerEvent::from_canvas(kind, Point::new(x, y), scene.viewport().position)
            .with_source(source);
        scene.handle_pointer(&event);
    }

    pub fn animate(&self) {
        self.scene.borrow_mut().animate(Instant::now());
    }

    pub fn zoom_in(&self) -> bool {
        self.scene.borrow_mut().zoom_in()
    }

    pub fn zoom_out(&self) -> bool {
        self.scene.borrow_mut().zoom_out()
    }

    pub fn container_x(&self) -> f64 {
        self.scene.borrow().viewport().position.x
    }

    pub fn container_y(&self) -> f64 {
        self.scene.borrow().viewport().position.y
    }

    /// Selected tile as `"i,j"`
    pub fn selected(&self) -> Option<String> {
        self.scene.borrow().selected().map(|tile| tile.to_string())
    }

    /// Indicator lines, one per row
    pub fn indicators(&self) -> String {
        let scene = self.scene.borrow();
        scene
            .indicators()
            .iter()
            .map(|indicator| indicator.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    log::info!("isotile wasm demo loaded");
}
