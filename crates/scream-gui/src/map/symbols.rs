use galileo::Color;
use galileo::render::render_bundle::RenderBundle;
use galileo::symbol::{CirclePointSymbol, Symbol};
use galileo_types::cartesian::Point3;
use galileo_types::geometry::Geom;
use scream::types::ZoneKind;

use crate::map::layers::zone_layer::ZoneMarker;

/// Marker radius in pixels. Hit tolerance is derived from the same constant
/// so the clickable area matches the drawn circle.
pub const MARKER_RADIUS: f64 = 10.0;

const MARKER_SIZE: f64 = MARKER_RADIUS * 2.0;

/// 70% fill opacity, as an 8-bit alpha channel.
const FILL_ALPHA: u8 = 178;

/// Color table for the fixed category set. Total: `Unknown` carries the
/// default color, so every zone resolves to some color.
pub fn marker_color(kind: ZoneKind) -> Color {
    let (r, g, b) = kind_rgb(kind);
    Color::rgba(r, g, b, 255)
}

/// The marker color with the fill opacity applied.
pub fn marker_fill(kind: ZoneKind) -> Color {
    let (r, g, b) = kind_rgb(kind);
    Color::rgba(r, g, b, FILL_ALPHA)
}

const fn kind_rgb(kind: ZoneKind) -> (u8, u8, u8) {
    match kind {
        ZoneKind::Forest => (0, 128, 0),
        ZoneKind::Tunnel => (128, 128, 128),
        ZoneKind::Square => (255, 0, 0),
        ZoneKind::River => (0, 0, 255),
        ZoneKind::Unknown => (255, 255, 255),
    }
}

/// Renders each zone marker as a circle in its category's color.
pub struct ZoneSymbol {
    forest: CirclePointSymbol,
    tunnel: CirclePointSymbol,
    square: CirclePointSymbol,
    river: CirclePointSymbol,
    fallback: CirclePointSymbol,
}

impl ZoneSymbol {
    pub fn new() -> Self {
        Self {
            forest: circle(ZoneKind::Forest),
            tunnel: circle(ZoneKind::Tunnel),
            square: circle(ZoneKind::Square),
            river: circle(ZoneKind::River),
            fallback: circle(ZoneKind::Unknown),
        }
    }

    fn for_kind(&self, kind: ZoneKind) -> &CirclePointSymbol {
        match kind {
            ZoneKind::Forest => &self.forest,
            ZoneKind::Tunnel => &self.tunnel,
            ZoneKind::Square => &self.square,
            ZoneKind::River => &self.river,
            ZoneKind::Unknown => &self.fallback,
        }
    }
}

impl Default for ZoneSymbol {
    fn default() -> Self {
        Self::new()
    }
}

fn circle(kind: ZoneKind) -> CirclePointSymbol {
    CirclePointSymbol::new(marker_fill(kind), MARKER_SIZE)
}

impl Symbol<ZoneMarker> for ZoneSymbol {
    fn render(
        &self,
        feature: &ZoneMarker,
        geometry: &Geom<Point3>,
        min_resolution: f64,
        bundle: &mut RenderBundle,
    ) {
        self.for_kind(feature.zone().kind())
            .render(feature, geometry, min_resolution, bundle);
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn color_table_matches_categories() {
        assert_eq!(marker_color(ZoneKind::Forest), Color::rgba(0, 128, 0, 255));
        assert_eq!(
            marker_color(ZoneKind::Tunnel),
            Color::rgba(128, 128, 128, 255)
        );
        assert_eq!(marker_color(ZoneKind::Square), Color::rgba(255, 0, 0, 255));
        assert_eq!(marker_color(ZoneKind::River), Color::rgba(0, 0, 255, 255));
    }

    #[test]
    fn unknown_kind_resolves_to_default_color() {
        assert_eq!(
            marker_color(ZoneKind::Unknown),
            Color::rgba(255, 255, 255, 255)
        );
        assert_eq!(
            marker_color(ZoneKind::from_str("rooftop").unwrap()),
            Color::rgba(255, 255, 255, 255)
        );
    }

    #[test]
    fn fill_keeps_color_at_reduced_opacity() {
        for kind in [
            ZoneKind::Forest,
            ZoneKind::Tunnel,
            ZoneKind::Square,
            ZoneKind::River,
            ZoneKind::Unknown,
        ] {
            let (r, g, b) = kind_rgb(kind);
            assert_eq!(marker_fill(kind), Color::rgba(r, g, b, FILL_ALPHA));
        }
    }

    #[test]
    fn square_category_renders_red() {
        // The Groenplaats case: a 'square' zone resolves to red.
        let kind = ZoneKind::from_str("square").unwrap();
        assert_eq!(marker_color(kind), Color::rgba(255, 0, 0, 255));
    }
}
