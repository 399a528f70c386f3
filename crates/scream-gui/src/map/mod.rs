use std::sync::Arc;

use galileo::{
    Map as GalileoMap, MapBuilder,
    control::{EventProcessor, EventPropagation, MapController, RawUserEvent, UserEvent},
    layer::raster_tile_layer::RasterTileLayerBuilder,
};
use parking_lot::RwLock;
use scream::types::Zone;
use scream::zones::{MAP_CENTER, MAP_ZOOM};
use tokio::sync::mpsc::UnboundedSender;

use crate::event_handler::Event;
use layers::{EventLayer, zone_layer::ZoneLayer};

pub mod canvas;
pub mod layers;
pub mod symbols;

const TILE_CACHE_DIR: &str = ".tile_cache";

/// The OSM tile backdrop plus the zone marker overlay, with click handling
/// wired through the event processor.
pub struct ZoneMap {
    map: GalileoMap,
    zones: Arc<RwLock<ZoneLayer>>,
    event_processor: EventProcessor,
}

impl ZoneMap {
    pub fn new(zones: Vec<Zone>, events: UnboundedSender<Event>) -> Self {
        let tile_layer = RasterTileLayerBuilder::new_osm()
            .with_file_cache_checked(TILE_CACHE_DIR)
            .build()
            .expect("failed to create tile layer");

        let mut layer = ZoneLayer::new(events);
        layer.insert_zones(zones);
        log::debug!("Initialized zone layer with {} markers", layer.len());
        let zone_layer = Arc::new(RwLock::new(layer));

        let map = MapBuilder::default()
            .with_latlon(MAP_CENTER.0, MAP_CENTER.1)
            .with_z_level(MAP_ZOOM)
            .with_layer(tile_layer)
            .with_layer(zone_layer.clone())
            .build();

        let mut event_processor = EventProcessor::default();
        let handler = zone_layer.clone();
        event_processor.add_handler(move |event: &UserEvent, map: &mut GalileoMap| {
            handler.handle_event(event, map);
            EventPropagation::Propagate
        });
        event_processor.add_handler(MapController::default());

        Self {
            map,
            zones: zone_layer,
            event_processor,
        }
    }

    pub fn zones(&self) -> &Arc<RwLock<ZoneLayer>> {
        &self.zones
    }

    pub fn handle_event(&mut self, event: RawUserEvent) {
        self.event_processor.handle(event, &mut self.map);
    }

    pub fn map(&self) -> &GalileoMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GalileoMap {
        &mut self.map
    }

    pub fn redraw(&self) {
        self.map.redraw()
    }
}
