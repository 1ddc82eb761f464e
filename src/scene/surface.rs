use crate::tiles::tile::Tile;
use crate::traits::RenderSurface;

/// A [`RenderSurface`] that keeps copies of its children and counts draws.
///
/// Used for headless runs and tests; nothing is rasterised.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    children: Vec<Option<Tile>>,
    redraws: Vec<usize>,
    renders: usize,
    texture_size: Option<(f64, f64)>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile(&self, slot: usize) -> Option<&Tile> {
        self.children.get(slot).and_then(|t| t.as_ref())
    }

    /// Slots redrawn since the last `clear`, in call order
    pub fn redraws(&self) -> &[usize] {
        &self.redraws
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn texture_size(&self) -> Option<(f64, f64)> {
        self.texture_size
    }
}

impl RenderSurface for HeadlessSurface {
    fn add_tile(&mut self, slot: usize, tile: &Tile) {
        if self.children.len() <= slot {
            self.children.resize(slot + 1, None);
        }
        self.children[slot] = Some(tile.clone());
    }

    fn redraw_tile(&mut self, slot: usize, tile: &Tile) {
        if let Some(child) = self.children.get_mut(slot) {
            *child = Some(tile.clone());
            self.redraws.push(slot);
        }
    }

    fn clear(&mut self) {
        self.children.clear();
        self.redraws.clear();
        self.texture_size = None;
    }

    fn render_to_texture(&mut self, width: f64, height: f64) {
        self.renders += 1;
        self.texture_size = Some((width, height));
    }

    fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }
}
