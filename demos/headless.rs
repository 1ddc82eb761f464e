//! Drives a scene without a window: drag, coast, click, zoom.
//!
//! Run with `RUST_LOG=debug cargo run --example headless` to watch the
//! engine's log output.

use isotile::prelude::*;

fn main() -> Result<()> {
    #[cfg(feature = "debug")]
    env_logger::init();

    let mut scene = Scene::new(GameConfig::default(), HeadlessSurface::new())?;
    let start = Instant::now();

    // Fling the map to the left
    scene.pointer_at(PointerKind::Down, Point::new(300.0, 200.0));
    for step in 1..=4 {
        scene.pointer_at(
            PointerKind::Move,
            Point::new(300.0 - 15.0 * step as f64, 200.0),
        );
    }
    let release = scene.pointer_at(PointerKind::Up, Point::new(240.0, 200.0));
    println!("release: {:?}", release);

    for frame in 0..30u64 {
        scene.animate(start + Duration::from_millis(frame * 16));
    }
    println!("container after coasting: {}", scene.viewport().position);

    // Click the tile under the middle of the canvas
    let centre = Point::new(300.0, 190.0);
    scene.pointer_at(PointerKind::Down, centre);
    let click = scene.pointer_at(PointerKind::Up, centre);
    println!("click: {:?}", click);

    scene.zoom_in();
    println!(
        "scale {} with {} tiles, texture {:?}",
        scene.config().scale(),
        scene.surface().child_count(),
        scene.surface().texture_size()
    );

    for indicator in scene.indicators().iter() {
        println!("{:>6.1} {:>6.1}  {}", indicator.position.x, indicator.position.y, indicator.text);
    }

    Ok(())
}
