use galileo::{
    Map,
    control::{MouseButton, UserEvent},
    layer::{FeatureLayer, Layer as GalileoLayer, feature_layer::Feature},
};
use galileo_types::{
    cartesian::{CartesianPoint2d, Point2},
    geo::{Crs, NewGeoPoint, impls::GeoPoint2d},
    geometry_type::GeoSpace2d,
};
use scream::types::Zone;
use tokio::sync::mpsc::UnboundedSender;

use super::EventLayer;
use crate::event_handler::Event;
use crate::map::symbols::{MARKER_RADIUS, ZoneSymbol};

/// One marker per zone, placed at the zone's coordinate.
pub struct ZoneMarker {
    position: GeoPoint2d,
    zone: Zone,
}

impl ZoneMarker {
    pub fn new(zone: Zone) -> Self {
        Self {
            position: GeoPoint2d::latlon(zone.lat(), zone.lon()),
            zone,
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

impl Feature for ZoneMarker {
    type Geom = GeoPoint2d;
    fn geometry(&self) -> &Self::Geom {
        &self.position
    }
}

/// The overlay with all zone markers. Zones are inserted once at startup;
/// afterwards the layer only renders and answers hit tests.
pub struct ZoneLayer {
    layer: FeatureLayer<GeoPoint2d, ZoneMarker, ZoneSymbol, GeoSpace2d>,
    positions: Vec<(Point2, Zone)>,
    events: UnboundedSender<Event>,
}

impl ZoneLayer {
    pub fn new(events: UnboundedSender<Event>) -> Self {
        Self {
            layer: FeatureLayer::new(vec![], ZoneSymbol::new(), Crs::WGS84),
            positions: vec![],
            events,
        }
    }

    pub fn insert_zone(&mut self, zone: Zone) {
        match project(&zone) {
            Some(position) => self.positions.push((position, zone.clone())),
            None => log::warn!("Failed to project zone {}", zone.name()),
        }
        self.layer.features_mut().add(ZoneMarker::new(zone));
    }

    pub fn insert_zones(&mut self, zones: Vec<Zone>) {
        zones.into_iter().for_each(|zone| self.insert_zone(zone));
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The topmost zone whose marker covers `position`, if any. `tolerance`
    /// is the marker radius in map units.
    pub fn hit_test(&self, position: &Point2, tolerance: f64) -> Option<&Zone> {
        self.positions
            .iter()
            .rev()
            .find(|(marker, _)| {
                let dx = marker.x() - position.x();
                let dy = marker.y() - position.y();
                dx * dx + dy * dy <= tolerance * tolerance
            })
            .map(|(_, zone)| zone)
    }
}

fn project(zone: &Zone) -> Option<Point2> {
    let projection = Crs::EPSG3857.get_projection::<GeoPoint2d, Point2>()?;
    projection.project(&GeoPoint2d::latlon(zone.lat(), zone.lon()))
}

impl GalileoLayer for ZoneLayer {
    fn render(&self, view: &galileo::MapView, canvas: &mut dyn galileo::render::Canvas) {
        self.layer.render(view, canvas)
    }

    fn prepare(&self, view: &galileo::MapView) {
        self.layer.prepare(view)
    }

    fn set_messenger(&mut self, messenger: Box<dyn galileo::Messenger>) {
        self.layer.set_messenger(messenger)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn attribution(&self) -> Option<galileo::layer::attribution::Attribution> {
        None
    }
}

impl EventLayer for ZoneLayer {
    fn handle_event(&self, event: &UserEvent, map: &mut Map) {
        let UserEvent::Click(MouseButton::Left, event_data) = event else {
            return;
        };
        let Some(position) = map.view().screen_to_map(event_data.screen_pointer_position) else {
            return;
        };

        let tolerance = map.view().resolution() * MARKER_RADIUS;
        let event = match self.hit_test(&position, tolerance) {
            Some(zone) => {
                log::debug!("Selected zone {}", zone.name());
                Event::ZoneSelected {
                    zone: zone.clone(),
                    at: event_data.screen_pointer_position,
                }
            }
            None => Event::SelectionCleared,
        };

        if self.events.send(event).is_err() {
            log::warn!("Selection channel closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use galileo_types::geo::GeoPoint;
    use scream::types::ZoneKind;
    use scream::zones;

    use super::*;

    fn catalog_layer() -> ZoneLayer {
        let (events, _recv) = tokio::sync::mpsc::unbounded_channel();
        let mut layer = ZoneLayer::new(events);
        layer.insert_zones(zones::builtin());
        layer
    }

    #[test]
    fn one_marker_per_catalog_zone() {
        assert_eq!(catalog_layer().len(), zones::builtin().len());
    }

    #[test]
    fn marker_geometry_equals_zone_coordinate() {
        for zone in zones::builtin() {
            let marker = ZoneMarker::new(zone.clone());
            assert_eq!(marker.geometry().lat(), zone.lat());
            assert_eq!(marker.geometry().lon(), zone.lon());
        }
    }

    #[test]
    fn hit_on_marker_selects_its_zone() {
        let layer = catalog_layer();
        let groenplaats = zones::builtin()
            .into_iter()
            .find(|zone| zone.kind() == ZoneKind::Square)
            .unwrap();

        let position = project(&groenplaats).unwrap();
        let hit = layer.hit_test(&position, 1.0);
        assert_eq!(hit.map(|zone| zone.name().to_string()), Some("Groenplaats".to_string()));
    }

    #[test]
    fn hit_outside_tolerance_misses() {
        let layer = catalog_layer();
        let groenplaats = zones::builtin()
            .into_iter()
            .find(|zone| zone.name() == "Groenplaats")
            .unwrap();

        let position = project(&groenplaats).unwrap();
        let off = Point2::new(position.x() + 10.0, position.y());
        assert!(layer.hit_test(&off, 5.0).is_none());

        // Map origin is in the Gulf of Guinea, nowhere near Antwerp.
        assert!(layer.hit_test(&Point2::new(0.0, 0.0), 50.0).is_none());
    }
}
