use anyhow::Context;
use isotile::{
    assets::{AssetKey, AssetLoader, DirectorySource, FileFetcher},
    ui::{widget::ShapeSurface, IsoMapWidget, UiIsoMapExt},
    Scene, SceneSettings, TextureCache,
};

/// Standalone tile-map viewer.
///
/// Usage: `isotile-app [settings.json]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => SceneSettings::from_json_file(&path)
            .with_context(|| format!("reading settings from {}", path))?,
        None => SceneSettings::default(),
    };

    let loader = AssetLoader::new(DirectorySource::new(&settings.asset_base), FileFetcher::new());
    let assets = loader.load_partial(&AssetKey::DRAWN).await;
    let textures = TextureCache::default();
    assets.decode_into(&textures);
    log::info!("textures ready: {:?}", textures.keys());

    let scene = Scene::from_settings(&settings, ShapeSurface::new())
        .context("building the scene")?;
    let widget = IsoMapWidget::new(scene, textures);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.canvas_width as f32, settings.canvas_height as f32])
            .with_title("isotile"),
        ..Default::default()
    };

    eframe::run_native(
        "isotile-app",
        options,
        Box::new(move |_cc| Box::new(IsoTileApp { widget })),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited: {}", e))?;

    Ok(())
}

struct IsoTileApp {
    widget: IsoMapWidget,
}

impl eframe::App for IsoTileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.iso_map(&mut self.widget);
            });
    }
}
