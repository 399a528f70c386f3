use egui::{RichText, Widget};
use scream::types::Zone;

/// Popup content for a selected zone: name, description, score, in that
/// order. Clears `open` when the close button is pressed.
pub struct ZonePopup<'a> {
    zone: &'a Zone,
    open: &'a mut bool,
}

impl<'a> ZonePopup<'a> {
    pub fn new(zone: &'a Zone, open: &'a mut bool) -> Self {
        Self { zone, open }
    }
}

impl Widget for ZonePopup<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let [name, description, score] = popup_lines(self.zone);

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(name).strong());
                if ui.small_button("✕").clicked() {
                    *self.open = false;
                }
            });
            ui.label(description);
            ui.label(RichText::new(score).small());
        })
        .response
    }
}

fn popup_lines(zone: &Zone) -> [String; 3] {
    [
        zone.name().to_string(),
        zone.description().to_string(),
        format!("Scream Score: {}", zone.score()),
    ]
}

#[cfg(test)]
mod tests {
    use scream::zones;

    use super::*;

    #[test]
    fn lines_are_name_description_score() {
        for zone in zones::builtin() {
            let [name, description, score] = popup_lines(&zone);
            assert_eq!(name, zone.name());
            assert_eq!(description, zone.description());
            assert_eq!(score, format!("Scream Score: {}", zone.score()));
        }
    }

    #[test]
    fn groenplaats_popup_text() {
        let catalog = zones::builtin();
        let zone = catalog
            .iter()
            .find(|zone| zone.name() == "Groenplaats")
            .unwrap();

        let [name, description, score] = popup_lines(zone);
        assert_eq!(name, "Groenplaats");
        assert!(description.contains("Too crowded"));
        assert!(score.contains("🔇"));
    }
}
