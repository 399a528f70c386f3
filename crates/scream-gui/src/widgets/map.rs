use egui::Widget;

use crate::map::canvas::MapCanvas;

pub struct Map<'map> {
    canvas: &'map mut MapCanvas,
}

impl<'map> Map<'map> {
    pub fn new(canvas: &'map mut MapCanvas) -> Self {
        Self { canvas }
    }
}

impl Widget for Map<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        self.canvas.render(ui)
    }
}
