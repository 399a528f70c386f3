use std::str::FromStr;

use scream::types::{Zone, ZoneError, ZoneKind};
use scream::zones;

#[test]
fn catalog_has_four_zones() {
    assert_eq!(zones::builtin().len(), 4);
}

#[test]
fn catalog_coords_are_in_range() {
    for zone in zones::builtin() {
        assert!(
            (-90.0..=90.0).contains(&zone.lat()),
            "latitude out of range for {}",
            zone.name()
        );
        assert!(
            (-180.0..=180.0).contains(&zone.lon()),
            "longitude out of range for {}",
            zone.name()
        );
    }
}

#[test]
fn groenplaats_record() {
    let catalog = zones::builtin();
    let zone = catalog
        .iter()
        .find(|zone| zone.name() == "Groenplaats")
        .expect("Groenplaats missing from catalog");

    assert_eq!(zone.kind(), ZoneKind::Square);
    assert_eq!(zone.score(), "🔇");
    assert!(zone.description().contains("Too crowded"));
    assert_eq!(zone.lat(), 51.2182);
    assert_eq!(zone.lon(), 4.4007);
}

#[test]
fn out_of_range_coords_are_rejected() {
    let result = Zone::new("Nowhere", 91.0, 0.0, ZoneKind::Unknown, "🔇", "");
    assert_eq!(
        result,
        Err(ZoneError::CoordOutOfRange { lat: 91.0, lon: 0.0 })
    );

    let result = Zone::new("Nowhere", 0.0, -200.5, ZoneKind::Unknown, "🔇", "");
    assert!(result.is_err());
}

#[test]
fn kind_parsing_is_total() {
    assert_eq!(ZoneKind::from_str("forest"), Ok(ZoneKind::Forest));
    assert_eq!(ZoneKind::from_str("tunnel"), Ok(ZoneKind::Tunnel));
    assert_eq!(ZoneKind::from_str("square"), Ok(ZoneKind::Square));
    assert_eq!(ZoneKind::from_str("river"), Ok(ZoneKind::River));
    assert_eq!(ZoneKind::from_str("volcano"), Ok(ZoneKind::Unknown));
    assert_eq!(ZoneKind::from_str(""), Ok(ZoneKind::Unknown));
}

#[test]
fn unknown_kind_deserializes_as_fallback() {
    let kind: ZoneKind = serde_json::from_str("\"square\"").unwrap();
    assert_eq!(kind, ZoneKind::Square);

    let kind: ZoneKind = serde_json::from_str("\"rooftop\"").unwrap();
    assert_eq!(kind, ZoneKind::Unknown);
}
