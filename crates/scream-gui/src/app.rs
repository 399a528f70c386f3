use eframe::CreationContext;
use egui::Frame;
use galileo_types::cartesian::{CartesianPoint2d, Point2};
use scream::types::Zone;
use scream::zones;

use crate::event_handler::EventHandler;
use crate::map::ZoneMap;
use crate::map::canvas::MapCanvas;
use crate::widgets;

pub struct ScreamApp {
    canvas: MapCanvas,
    events: EventHandler,
    ui_state: UiState,
}

#[derive(Default)]
pub struct UiState {
    pub popup: Option<ZoneSelection>,
    pub map_origin: egui::Pos2,
}

/// The zone whose popup is open, and the map-local click position that
/// anchors the popup.
pub struct ZoneSelection {
    pub zone: Zone,
    pub at: Point2,
}

impl ScreamApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let (events, recv) = tokio::sync::mpsc::unbounded_channel();
        let map = ZoneMap::new(zones::builtin(), events);

        let canvas = MapCanvas::new(
            cc.egui_ctx.clone(),
            cc.wgpu_render_state
                .clone()
                .expect("failed to get wgpu context"),
            map,
        );

        Self {
            canvas,
            events: EventHandler::new(recv),
            ui_state: UiState::default(),
        }
    }

    fn show_popup(&mut self, ctx: &egui::Context) {
        let Some(selection) = &self.ui_state.popup else {
            return;
        };
        let at = self.ui_state.map_origin
            + egui::vec2(selection.at.x() as f32, selection.at.y() as f32);
        let zone = selection.zone.clone();

        let mut open = true;
        egui::Area::new(egui::Id::new("zone_popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(at)
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.add(widgets::ZonePopup::new(&zone, &mut open));
                });
            });

        if !open {
            self.ui_state.popup = None;
        }
    }

    fn show_attribution(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("attribution"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-8.0, -8.0))
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.add(widgets::Attribution);
                });
            });
    }
}

impl eframe::App for ScreamApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let response = egui::CentralPanel::default()
            .frame(Frame::new().inner_margin(0).outer_margin(0))
            .show(ctx, |ui| ui.add(widgets::Map::new(&mut self.canvas)))
            .inner;

        self.ui_state.map_origin = response.rect.min;
        self.events.handle_events(&mut self.ui_state);

        self.show_attribution(ctx);
        self.show_popup(ctx);
    }
}
