use egui::Widget;

/// Shown per the tile service's usage terms.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

const TILE_ATTRIBUTION_URL: &str = "https://www.openstreetmap.org/copyright";

pub struct Attribution;

impl Widget for Attribution {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.hyperlink_to(TILE_ATTRIBUTION, TILE_ATTRIBUTION_URL)
    }
}
