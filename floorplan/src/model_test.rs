use super::*;

fn snapshot() -> FloorSnapshot {
    FloorSnapshot {
        rooms: Vec::new(),
        beacons: vec![
            BeaconNode { id: "b_floor".to_owned(), name: None, coordinates: [0.0, 0.0, 0.0] },
            BeaconNode { id: "b_ceiling".to_owned(), name: None, coordinates: [0.0, 0.0, 3.0] },
            BeaconNode { id: "b_above".to_owned(), name: None, coordinates: [0.0, 0.0, 4.5] },
        ],
        entities: vec![
            MovingEntity {
                entity_id: "device_tracker.phone".to_owned(),
                name: None,
                coordinates: [1.0, 1.0, 1.5],
                confidence: Some(0.9),
                last_seen: Some(1_700_000_000_000),
            },
            MovingEntity {
                entity_id: "device_tracker.watch".to_owned(),
                name: None,
                coordinates: [1.0, 1.0, -0.1],
                confidence: None,
                last_seen: None,
            },
        ],
        min_height: 0.0,
        ceiling_height: 3.0,
    }
}

// --- Floor assignment ---

#[test]
fn z_at_min_height_is_on_floor() {
    assert!(snapshot().on_floor(0.0));
}

#[test]
fn z_at_ceiling_height_is_excluded() {
    // Half-open range: a marker at the boundary belongs to the floor above.
    assert!(!snapshot().on_floor(3.0));
}

#[test]
fn z_just_below_ceiling_is_on_floor() {
    assert!(snapshot().on_floor(2.999));
}

#[test]
fn z_below_min_height_is_excluded() {
    assert!(!snapshot().on_floor(-0.1));
}

#[test]
fn floor_beacons_filters_by_vertical_extent() {
    let snap = snapshot();
    let ids: Vec<&str> = snap.floor_beacons().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b_floor"]);
}

#[test]
fn floor_entities_filters_by_vertical_extent() {
    let snap = snapshot();
    let ids: Vec<&str> = snap.floor_entities().map(|e| e.entity_id.as_str()).collect();
    assert_eq!(ids, vec!["device_tracker.phone"]);
}

// --- Room validity ---

#[test]
fn room_with_three_points_is_drawable() {
    let room = Room {
        id: "r".to_owned(),
        name: "R".to_owned(),
        floor: None,
        area: None,
        boundaries: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
    };
    assert!(room.is_drawable());
}

#[test]
fn room_with_two_points_is_not_drawable() {
    let room = Room {
        id: "r".to_owned(),
        name: "R".to_owned(),
        floor: None,
        area: None,
        boundaries: vec![[0.0, 0.0], [1.0, 0.0]],
    };
    assert!(!room.is_drawable());
}

// --- Wire normalization ---

#[test]
fn beacon_payload_bare_format() {
    let payload: BeaconPayload = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
    let node = payload.into_node("beacon_1".to_owned());
    assert_eq!(node.coordinates, [1.0, 2.0, 3.0]);
    assert_eq!(node.name, None);
    assert_eq!(node.id, "beacon_1");
}

#[test]
fn beacon_payload_named_format() {
    let payload: BeaconPayload =
        serde_json::from_str(r#"{"coordinates": [4.0, 5.0, 6.0], "name": "Hall anchor"}"#).unwrap();
    let node = payload.into_node("beacon_2".to_owned());
    assert_eq!(node.coordinates, [4.0, 5.0, 6.0]);
    assert_eq!(node.name.as_deref(), Some("Hall anchor"));
}

#[test]
fn beacon_payload_named_format_without_name() {
    let payload: BeaconPayload = serde_json::from_str(r#"{"coordinates": [7.0, 8.0, 9.0]}"#).unwrap();
    let node = payload.into_node("beacon_3".to_owned());
    assert_eq!(node.coordinates, [7.0, 8.0, 9.0]);
    assert_eq!(node.name, None);
}

// --- Display names ---

#[test]
fn beacon_display_name_prefers_friendly_name() {
    let node = BeaconNode {
        id: "beacon_1".to_owned(),
        name: Some("Hall anchor".to_owned()),
        coordinates: [0.0; 3],
    };
    assert_eq!(node.display_name(), "Hall anchor");
}

#[test]
fn beacon_display_name_falls_back_to_id() {
    let node = BeaconNode { id: "beacon_1".to_owned(), name: None, coordinates: [0.0; 3] };
    assert_eq!(node.display_name(), "beacon_1");
}

#[test]
fn entity_display_name_prefers_resolved_name() {
    let entity = MovingEntity {
        entity_id: "device_tracker.phone".to_owned(),
        name: Some("Ada's phone".to_owned()),
        coordinates: [0.0; 3],
        confidence: None,
        last_seen: None,
    };
    assert_eq!(entity.display_name(), "Ada's phone");
}

#[test]
fn entity_display_name_falls_back_to_id_tail() {
    let entity = MovingEntity {
        entity_id: "device_tracker.phone".to_owned(),
        name: None,
        coordinates: [0.0; 3],
        confidence: None,
        last_seen: None,
    };
    assert_eq!(entity.display_name(), "phone");
}

#[test]
fn entity_display_name_without_dot_uses_whole_id() {
    let entity = MovingEntity {
        entity_id: "tag42".to_owned(),
        name: None,
        coordinates: [0.0; 3],
        confidence: None,
        last_seen: None,
    };
    assert_eq!(entity.display_name(), "tag42");
}
