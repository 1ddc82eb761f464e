use crate::assets::{AssetKey, TextureCache};
use crate::core::geo::Point;
use crate::input::events::{InputEvent, KeyCode, PointerEvent, PointerKind};
use crate::scene::Scene;
use crate::tiles::palette::TileColor;
use crate::tiles::tile::Tile;
use crate::traits::RenderSurface;
use egui::{
    Align2, Color32, ColorImage, FontId, Key, Pos2, Rect, Response, Sense, Shape, Stroke,
    TextureHandle, TextureOptions, Ui, Vec2,
};
use fxhash::FxHashMap;

fn color32(color: TileColor, alpha: f32) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgba_unmultiplied(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Render surface that keeps one egui polygon per tile slot, in surface
/// coordinates. Painting translates the cached shapes by the container
/// position.
#[derive(Default)]
pub struct ShapeSurface {
    shapes: Vec<Option<Shape>>,
    texture_size: Vec2,
}

impl ShapeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn shape_for(tile: &Tile) -> Shape {
        let stroke = if tile.outlined {
            Stroke::new(1.0, color32(TileColor::OUTLINE, 1.0))
        } else {
            Stroke::NONE
        };
        Shape::convex_polygon(
            tile.polygon().iter().map(|&c| pos2(c)).collect(),
            color32(tile.color, tile.alpha),
            stroke,
        )
    }

    pub fn texture_size(&self) -> Vec2 {
        self.texture_size
    }

    /// Every tile shape moved so the surface origin lands on `offset`
    pub fn shapes_at(&self, offset: Vec2) -> impl Iterator<Item = Shape> + '_ {
        self.shapes.iter().flatten().map(move |shape| {
            let mut shape = shape.clone();
            shape.translate(offset);
            shape
        })
    }
}

impl RenderSurface for ShapeSurface {
    fn add_tile(&mut self, slot: usize, tile: &Tile) {
        if self.shapes.len() <= slot {
            self.shapes.resize(slot + 1, None);
        }
        self.shapes[slot] = Some(Self::shape_for(tile));
    }

    fn redraw_tile(&mut self, slot: usize, tile: &Tile) {
        if let Some(shape) = self.shapes.get_mut(slot) {
            *shape = Some(Self::shape_for(tile));
        }
    }

    fn clear(&mut self) {
        self.shapes.clear();
        self.texture_size = Vec2::ZERO;
    }

    fn render_to_texture(&mut self, width: f64, height: f64) {
        self.texture_size = Vec2::new(width as f32, height as f32);
    }

    fn child_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_some()).count()
    }
}

const ARROW_KEYS: [(Key, KeyCode); 4] = [
    (Key::ArrowUp, KeyCode::ArrowUp),
    (Key::ArrowDown, KeyCode::ArrowDown),
    (Key::ArrowLeft, KeyCode::ArrowLeft),
    (Key::ArrowRight, KeyCode::ArrowRight),
];

/// Hosts a [`Scene`] inside an egui `Ui`.
///
/// ```no_run
/// # use isotile::{GameConfig, Scene, TextureCache};
/// # use isotile::ui::widget::{IsoMapWidget, ShapeSurface};
/// # fn ui(ui: &mut egui::Ui) -> isotile::Result<()> {
/// let scene = Scene::new(GameConfig::default(), ShapeSurface::new())?;
/// let mut widget = IsoMapWidget::new(scene, TextureCache::default());
/// widget.show(ui);
/// # Ok(())
/// # }
/// ```
pub struct IsoMapWidget {
    scene: Scene<ShapeSurface>,
    textures: TextureCache,
    handles: FxHashMap<AssetKey, TextureHandle>,
}

impl IsoMapWidget {
    pub fn new(mut scene: Scene<ShapeSurface>, textures: TextureCache) -> Self {
        scene.use_textures(&textures);
        Self {
            scene,
            textures,
            handles: FxHashMap::default(),
        }
    }

    pub fn scene(&self) -> &Scene<ShapeSurface> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<ShapeSurface> {
        &mut self.scene
    }

    /// Uploads a cached texture to egui on first use
    fn texture(&mut self, ctx: &egui::Context, key: AssetKey) -> Option<egui::TextureId> {
        if let Some(handle) = self.handles.get(&key) {
            return Some(handle.id());
        }

        let image = self.textures.get(key)?;
        let size = [image.width() as usize, image.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        let handle = ctx.load_texture(key.name(), color_image, TextureOptions::LINEAR);
        let id = handle.id();
        self.handles.insert(key, handle);
        Some(id)
    }

    /// Translates this frame's egui input into scene events
    fn collect_input(ui: &Ui, response: &Response) -> Vec<InputEvent> {
        let origin = response.rect.min;
        let hovered = response.hovered();
        ui.input(|input| {
            let mut events = Vec::new();

            if let Some(pos) = input.pointer.interact_pos().or(input.pointer.hover_pos()) {
                let canvas = Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);
                let fired = [
                    (input.pointer.primary_pressed() && hovered, PointerKind::Down),
                    (input.pointer.delta() != Vec2::ZERO, PointerKind::Move),
                    (input.pointer.primary_released(), PointerKind::Up),
                ];
                events.extend(fired.into_iter().filter(|(hit, _)| *hit).map(|(_, kind)| {
                    InputEvent::Pointer(PointerEvent::new(kind, Point::default(), canvas))
                }));
            }

            append_keys(input, &mut events);
            events
        })
    }

    /// Handles input, advances one frame and paints
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;

        let (width, height) = (rect.width() as f64, rect.height() as f64);
        let config = self.scene.config();
        if config.canvas_width != width || config.canvas_height != height {
            self.scene.resize(width, height);
        }

        let now = instant::Instant::now();
        for event in Self::collect_input(ui, &response) {
            let event = match event {
                // Local coordinates depend on where the container is right now
                InputEvent::Pointer(pointer) => InputEvent::Pointer(PointerEvent::from_canvas(
                    pointer.kind,
                    pointer.parent,
                    self.scene.viewport().position,
                )),
                other => other,
            };
            self.scene.handle_input(&event, now);
        }
        self.scene.animate(now);

        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let container = self.scene.viewport().position;
        let offset = rect.min.to_vec2() + Vec2::new(container.x as f32, container.y as f32);
        painter.extend(self.scene.surface().shapes_at(offset));

        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        let sprites = self.scene.sprites().to_vec();
        for sprite in sprites {
            if let Some(texture) = self.texture(ui.ctx(), sprite.key) {
                let sprite_rect = Rect::from_min_max(
                    rect.min + pos2(sprite.position).to_vec2(),
                    rect.min + pos2(sprite.max()).to_vec2(),
                );
                painter.image(texture, sprite_rect, uv, Color32::WHITE);
            }
        }

        let buttons: Vec<_> = self
            .scene
            .zoom_controls()
            .map(|controls| controls.buttons().map(|b| *b).to_vec())
            .unwrap_or_default();
        for button in buttons {
            if let Some(texture) = self.texture(ui.ctx(), button.action.texture()) {
                let size = Vec2::splat(button.size as f32);
                let button_rect = Rect::from_center_size(rect.min + pos2(button.center).to_vec2(), size);
                painter.image(texture, button_rect, uv, Color32::WHITE);
            }
        }

        let indicators = self.scene.indicators();
        let font = FontId::proportional(indicators.preset.font_size);
        let fill = color32(indicators.preset.fill, 1.0);
        for indicator in indicators.iter() {
            painter.text(
                rect.min + pos2(indicator.position).to_vec2(),
                Align2::LEFT_TOP,
                &indicator.text,
                font.clone(),
                fill,
            );
        }

        ui.ctx().request_repaint();
        response
    }
}

fn append_keys(input: &egui::InputState, events: &mut Vec<InputEvent>) {
    for (egui_key, key) in ARROW_KEYS {
        if input.key_pressed(egui_key) {
            events.push(InputEvent::KeyDown { key });
        }
        if input.key_released(egui_key) {
            events.push(InputEvent::KeyUp { key });
        }
    }
    if input.key_pressed(Key::Plus) {
        events.push(InputEvent::KeyDown { key: KeyCode::Plus });
    }
    if input.key_pressed(Key::Minus) {
        events.push(InputEvent::KeyDown { key: KeyCode::Minus });
    }
}
