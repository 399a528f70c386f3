use crate::types::{Zone, ZoneKind};

/// Initial view center (Antwerp), latitude then longitude.
pub const MAP_CENTER: (f64, f64) = (51.2194, 4.4025);

/// Initial tile zoom level.
pub const MAP_ZOOM: u32 = 13;

/// The built-in zone catalog. Defined once at startup and immutable for the
/// lifetime of the process.
pub fn builtin() -> Vec<Zone> {
    [
        Zone::new(
            "Rivierenhof Park",
            51.2223,
            4.4609,
            ZoneKind::Forest,
            "🔊🔊🔊🔊🔊",
            "Great echo, peaceful, nature-approved scream zone.",
        ),
        Zone::new(
            "Stadspark Tunnel",
            51.2139,
            4.4162,
            ZoneKind::Tunnel,
            "🔊🔊🔊🔊",
            "Decent echo and semi-hidden. Slightly sketchy.",
        ),
        Zone::new(
            "Groenplaats",
            51.2182,
            4.4007,
            ZoneKind::Square,
            "🔇",
            "Too crowded. Someone will call the cops.",
        ),
        Zone::new(
            "MAS Dockside",
            51.2289,
            4.4047,
            ZoneKind::River,
            "🔊🔊🔊",
            "Open space, wind carries the scream. Melancholic vibes.",
        ),
    ]
    .into_iter()
    .map(|zone| zone.expect("built-in zone out of range"))
    .collect()
}
