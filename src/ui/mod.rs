pub mod controls;
pub mod indicators;
pub mod sprite;

#[cfg(feature = "egui")]
pub mod widget;

pub use controls::{ZoomAction, ZoomButton, ZoomControls};
pub use indicators::{Indicator, IndicatorPreset, Indicators, TextAlign};
pub use sprite::Sprite;

#[cfg(feature = "egui")]
pub use widget::{IsoMapWidget, ShapeSurface};

#[cfg(feature = "egui")]
pub trait UiIsoMapExt {
    fn iso_map(&mut self, widget: &mut IsoMapWidget) -> egui::Response;
}

#[cfg(feature = "egui")]
impl UiIsoMapExt for egui::Ui {
    fn iso_map(&mut self, widget: &mut IsoMapWidget) -> egui::Response {
        widget.show(self)
    }
}
