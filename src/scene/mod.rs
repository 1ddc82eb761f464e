//! Scene orchestration: one grid, one container, and the input state that
//! moves it.
//!
//! A [`Scene`] is driven from the outside. The host forwards pointer and key
//! events as they arrive and calls [`Scene::animate`] once per frame; all
//! mutation happens inside those calls.

pub mod surface;

use crate::assets::TextureCache;
use crate::core::config::{GameConfig, SceneSettings};
use crate::core::constants::INITIAL_CONTAINER_POSITION;
use crate::core::geo::{Point, TileIndex};
use crate::core::viewport::Viewport;
use crate::input::events::{InputEvent, KeyCode, PointerEvent, PointerKind};
use crate::input::interaction::{InteractionState, InteractionUpdate};
use crate::input::keyboard::KeyBinder;
use crate::tiles::grid::TileGrid;
use crate::tiles::palette::{ColorPolicy, DefaultPalette, TileColor};
use crate::traits::RenderSurface;
use crate::ui::controls::{ZoomAction, ZoomControls};
use crate::ui::indicators::Indicators;
use crate::ui::sprite::Sprite;
use crate::Result;
use instant::Instant;

pub use surface::HeadlessSurface;

/// Treats a missed tile lookup as "nothing there"
fn skip_missing(result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) if e.is_tile_not_found() => {
            log::trace!("{}", e);
            false
        }
        Err(e) => {
            log::warn!("tile update failed: {}", e);
            false
        }
    }
}

pub struct Scene<S: RenderSurface> {
    config: GameConfig,
    grid: TileGrid,
    surface: S,
    viewport: Viewport,
    interaction: InteractionState,
    keyboard: KeyBinder,
    indicators: Indicators,
    zoom: Option<ZoomControls>,
    sprites: Vec<Sprite>,
    palette: Box<dyn ColorPolicy>,
    drag_frames: u64,
    builds: u64,
}

impl<S: RenderSurface> Scene<S> {
    /// Builds a scene with the default palette and arrow-key panning
    pub fn new(config: GameConfig, surface: S) -> Result<Self> {
        Self::with_palette(config, surface, DefaultPalette::default())
    }

    pub fn with_palette(
        config: GameConfig,
        surface: S,
        palette: impl ColorPolicy + 'static,
    ) -> Result<Self> {
        config.validate()?;

        let mut scene = Self {
            grid: TileGrid::build(&config, &palette),
            indicators: Indicators::new(&config),
            config,
            surface,
            viewport: Viewport::new(Point::new(
                INITIAL_CONTAINER_POSITION.0,
                INITIAL_CONTAINER_POSITION.1,
            )),
            interaction: InteractionState::new(),
            keyboard: KeyBinder::with_arrow_keys(),
            zoom: None,
            sprites: Vec::new(),
            palette: Box::new(palette),
            drag_frames: 0,
            builds: 0,
        };
        scene.attach();
        Ok(scene)
    }

    pub fn from_settings(settings: &SceneSettings, surface: S) -> Result<Self> {
        let mut scene = Self::new(settings.game_config()?, surface)?;
        scene.viewport.position = settings.initial_position;
        Ok(scene)
    }

    /// Turns the zoom buttons on if both of their textures are loaded
    pub fn enable_zoom_controls(&mut self, textures: &TextureCache) -> bool {
        self.zoom =
            ZoomControls::from_textures(self.config.canvas_width, self.config.canvas_height, textures);
        self.zoom.is_some()
    }

    /// Pins the cat sprite to the canvas if its texture is loaded
    pub fn place_sprites(&mut self, textures: &TextureCache) -> usize {
        self.sprites = Sprite::cat(textures).into_iter().collect();
        if self.sprites.is_empty() {
            log::info!("cat texture missing, no sprites placed");
        }
        self.sprites.len()
    }

    /// Zoom buttons and sprites for whatever `textures` holds
    pub fn use_textures(&mut self, textures: &TextureCache) {
        self.enable_zoom_controls(textures);
        self.place_sprites(textures);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn zoom_controls(&self) -> Option<&ZoomControls> {
        self.zoom.as_ref()
    }

    pub fn selected(&self) -> Option<TileIndex> {
        self.interaction.selected()
    }

    /// Number of times the grid has been laid out, including the first
    pub fn builds(&self) -> u64 {
        self.builds
    }

    /// Puts the grid on the surface and bakes the texture
    fn attach(&mut self) {
        self.grid.attach(&mut self.surface);

        if let Some(selected) = self.interaction.selected() {
            skip_missing(self.grid.set_tile_color(
                selected,
                TileColor::SELECTED,
                1.0,
                &mut self.surface,
            ));
        }

        self.render();
        self.builds += 1;
        log::info!(
            "scene built: {} tiles, scale {}, texture {:?}",
            self.grid.len(),
            self.config.scale(),
            self.config.texture_size()
        );
    }

    fn teardown(&mut self) {
        self.keyboard.clear_holds();
        self.interaction.reset();
        self.surface.clear();
        self.drag_frames = 0;
    }

    /// Throws the grid away and lays it out again for the current config.
    /// The selection carries over.
    pub fn rebuild(&mut self) {
        self.teardown();
        self.grid = TileGrid::build(&self.config, self.palette.as_ref());
        self.attach();
        self.viewport.clamp_to_borders(&self.config);
    }

    fn render(&mut self) {
        let (width, height) = self.config.texture_size();
        self.surface.render_to_texture(width, height);
    }

    pub fn zoom(&mut self, action: ZoomAction) -> bool {
        let changed = match action {
            ZoomAction::In => self.config.increase_scale(),
            ZoomAction::Out => self.config.decrease_scale(),
        };
        if changed {
            log::info!("zoom {:?} to scale {}", action, self.config.scale());
            self.rebuild();
        }
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom(ZoomAction::In)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom(ZoomAction::Out)
    }

    /// Canvas changed size; the grid itself does not depend on it
    pub fn resize(&mut self, canvas_width: f64, canvas_height: f64) {
        self.config.canvas_width = canvas_width;
        self.config.canvas_height = canvas_height;
        self.indicators.resize(&self.config);
        if self.zoom.is_some() {
            self.zoom = Some(ZoomControls::layout(canvas_width, canvas_height));
        }
        self.viewport.clamp_to_borders(&self.config);
    }

    /// Pointer event at a canvas position
    pub fn pointer_at(&mut self, kind: PointerKind, canvas: Point) -> InteractionUpdate {
        let event = PointerEvent::from_canvas(kind, canvas, self.viewport.position);
        self.handle_pointer(&event)
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> InteractionUpdate {
        if event.kind == PointerKind::Down {
            if let Some(action) = self.zoom.as_ref().and_then(|z| z.hit_test(event.parent)) {
                self.zoom(action);
                return InteractionUpdate::Ignored;
            }
        }

        let update = self
            .interaction
            .handle(event, self.viewport.position, &self.config);

        match &update {
            InteractionUpdate::DragStarted { .. } => {
                self.viewport.stop();
                self.drag_frames = 0;
            }
            InteractionUpdate::Coords(coords) => {
                if let Some(hover) = coords.hover {
                    let mut dirty = false;
                    if let Some(previous) = hover.previous {
                        dirty |= skip_missing(self.grid.set_tile_outline(
                            previous,
                            false,
                            &mut self.surface,
                        ));
                    }
                    if let Some(current) = hover.current {
                        dirty |= skip_missing(self.grid.set_tile_outline(
                            current,
                            true,
                            &mut self.surface,
                        ));
                    }
                    if dirty {
                        self.render();
                    }
                }
            }
            InteractionUpdate::Reposition(position) => {
                self.viewport.position = position.new_position;
            }
            InteractionUpdate::Click(change) => {
                if let Some(previous) = change.deselected {
                    let color = self.palette.color_for(previous);
                    skip_missing(self.grid.set_tile_color(previous, color, 1.0, &mut self.surface));
                }
                if let Some(selected) = change.selected {
                    skip_missing(self.grid.set_tile_outline(selected, false, &mut self.surface));
                    skip_missing(self.grid.set_tile_color(
                        selected,
                        TileColor::SELECTED,
                        1.0,
                        &mut self.surface,
                    ));
                }
                self.render();
            }
            InteractionUpdate::Release { velocity } => {
                self.viewport.velocity = *velocity;
            }
            InteractionUpdate::Ignored => {}
        }

        self.indicators.apply(&update);
        update
    }

    pub fn key_down(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Plus => {
                self.zoom_in();
            }
            KeyCode::Minus => {
                self.zoom_out();
            }
            _ => {
                if let Some(change) = self.keyboard.key_down(key, now) {
                    self.viewport.apply_velocity_change(change);
                }
            }
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        if let Some(change) = self.keyboard.key_up(key) {
            self.viewport.apply_velocity_change(change);
        }
    }

    /// Routes any input event to the matching handler
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> InteractionUpdate {
        match event {
            InputEvent::Pointer(pointer) => return self.handle_pointer(pointer),
            InputEvent::KeyDown { key } => self.key_down(*key, now),
            InputEvent::KeyUp { key } => self.key_up(*key),
            InputEvent::Resize { size } => self.resize(size.x, size.y),
        }
        InteractionUpdate::Ignored
    }

    /// One frame: key hold repeats, momentum, border clamp, indicators
    pub fn animate(&mut self, now: Instant) {
        for change in self.keyboard.poll(now) {
            self.viewport.apply_velocity_change(change);
        }

        if self.interaction.is_dragging() {
            self.drag_frames += 1;
        } else {
            self.drag_frames = 0;
        }

        self.viewport.tick(&self.config);
        let frames = self.interaction.is_dragging().then_some(self.drag_frames);
        self.indicators.tick(frames, &self.viewport);
    }
}
