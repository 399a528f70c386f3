use std::sync::Arc;

use galileo::{Map, control::UserEvent, layer::Layer as GalileoLayer};
use parking_lot::RwLock;

pub mod zone_layer;

/// A map layer that also reacts to user input.
pub trait EventLayer: GalileoLayer {
    fn handle_event(&self, event: &UserEvent, map: &mut Map);
}

impl<T> EventLayer for Arc<RwLock<T>>
where
    T: EventLayer + 'static,
{
    fn handle_event(&self, event: &UserEvent, map: &mut Map) {
        self.read().handle_event(event, map)
    }
}
