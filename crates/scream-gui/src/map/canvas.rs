use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use galileo::Messenger;
use galileo::control::{MouseButton, RawUserEvent};
use galileo::render::WgpuRenderer;
use galileo_types::cartesian::{Point2, Size};

use crate::map::ZoneMap;

/// Renders the map into a wgpu texture registered with egui and feeds egui
/// input back into the map's event processor.
pub struct MapCanvas {
    map: ZoneMap,
    renderer: WgpuRenderer,
    egui_render_state: egui_wgpu::RenderState,
    texture_id: egui::TextureId,
    texture_view: wgpu::TextureView,
    requires_redraw: Arc<AtomicBool>,
}

impl MapCanvas {
    pub fn new(
        ctx: egui::Context,
        render_state: egui_wgpu::RenderState,
        mut map: ZoneMap,
    ) -> Self {
        let requires_redraw = Arc::new(AtomicBool::new(true));
        let messenger = CanvasMessenger {
            context: ctx,
            requires_redraw: requires_redraw.clone(),
        };

        let size = Size::new(1, 1);

        {
            let map = map.map_mut();
            map.set_messenger(Some(messenger.clone()));
            map.set_size(size.cast());

            let layers = map.layers_mut();
            layers.iter_mut().for_each(|layer| {
                layer.set_messenger(Box::new(messenger.clone()));
            });
        }

        let renderer = WgpuRenderer::new_with_device_and_texture(
            render_state.device.clone(),
            render_state.queue.clone(),
            size,
        );

        let texture = renderer
            .get_target_texture_view()
            .expect("failed to get map texture");
        let texture_id = render_state.renderer.write().register_native_texture(
            &render_state.device,
            &texture,
            wgpu::FilterMode::Nearest,
        );

        MapCanvas {
            map,
            renderer,
            egui_render_state: render_state,
            texture_id,
            texture_view: texture,
            requires_redraw,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui) -> egui::Response {
        log::trace!("[canvas] Rendering map");
        let available_size = ui.max_rect().size();
        let map_size = self.renderer.size().cast::<f32>();

        let (rect, response) =
            ui.allocate_exact_size(available_size, egui::Sense::click_and_drag());

        if response.contains_pointer() {
            let events = ui.input(|input| input.events.clone());
            self.process_events(&events, [-rect.left(), -rect.top()]);
        }

        self.map.map_mut().animate();

        if available_size[0] != map_size.width() || available_size[1] != map_size.height() {
            self.resize(available_size);
        }

        if self.requires_redraw.swap(false, Ordering::Relaxed) {
            self.draw();
        }

        egui::Image::new(egui::ImageSource::Texture(egui::load::SizedTexture::new(
            self.texture_id,
            egui::Vec2::new(map_size.width(), map_size.height()),
        )))
        .paint_at(ui, rect);

        response
    }

    fn resize(&mut self, size: egui::Vec2) {
        log::trace!("[canvas] Resizing map to size: {size:?}");

        let size = Size::new(size.x as f64, size.y as f64);
        self.map.map_mut().set_size(size);

        let size = Size::new(size.width() as u32, size.height() as u32);
        self.renderer.resize(size);

        // After renderer is resized, a new texture is created, so we need to update its id that we
        // use in UI.
        let texture = self
            .renderer
            .get_target_texture_view()
            .expect("failed to get map texture");
        let texture_id = self
            .egui_render_state
            .renderer
            .write()
            .register_native_texture(
                &self.egui_render_state.device,
                &texture,
                wgpu::FilterMode::Nearest,
            );

        self.texture_id = texture_id;
        self.texture_view = texture;

        self.map.redraw();
    }

    fn draw(&mut self) {
        log::trace!("[canvas] Redrawing the map");
        self.map.map().load_layers();
        self.renderer
            .render_to_texture_view(self.map.map(), &self.texture_view);
    }

    fn process_events(&mut self, events: &[egui::Event], offset: [f32; 2]) {
        for event in events {
            if let Some(raw_event) = Self::convert_event(event, offset) {
                self.map.handle_event(raw_event);
            }
        }
    }

    fn convert_event(event: &egui::Event, offset: [f32; 2]) -> Option<RawUserEvent> {
        match event {
            egui::Event::PointerButton {
                button, pressed, ..
            } => {
                let button = match button {
                    egui::PointerButton::Primary => MouseButton::Left,
                    egui::PointerButton::Secondary => MouseButton::Right,
                    egui::PointerButton::Middle => MouseButton::Middle,
                    _ => MouseButton::Other,
                };

                Some(match pressed {
                    true => RawUserEvent::ButtonPressed(button),
                    false => RawUserEvent::ButtonReleased(button),
                })
            }
            egui::Event::PointerMoved(position) => {
                let pointer_position = Point2::new(
                    (position.x + offset[0]) as f64,
                    (position.y + offset[1]) as f64,
                );
                Some(RawUserEvent::PointerMoved(pointer_position))
            }
            egui::Event::MouseWheel { delta, .. } => {
                let zoom = delta[1] as f64;

                if zoom.abs() < 0.0001 {
                    return None;
                }

                Some(RawUserEvent::Scroll(zoom))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CanvasMessenger {
    pub requires_redraw: Arc<AtomicBool>,
    pub context: egui::Context,
}

impl Messenger for CanvasMessenger {
    fn request_redraw(&self) {
        log::trace!("[canvas] Redraw requested");
        if !self.requires_redraw.swap(true, Ordering::Relaxed) {
            self.context.request_repaint();
        }
    }
}
