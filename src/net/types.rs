//! Wire DTOs for the host's floorplan API.
//!
//! The host exposes three read-only endpoints: the floor plan (rooms and
//! vertical extent), live coordinates (beacons and moving entities), and a
//! bulk entity-name map. [`snapshot_from_wire`] merges one response from each
//! into the engine's [`FloorSnapshot`].
//!
//! Maps use `BTreeMap` so the merged snapshot lists rooms and markers in a
//! stable order regardless of JSON key order.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::Deserialize;

use floorplan::model::{BeaconPayload, FloorSnapshot, MovingEntity, Room};

fn default_ceiling_height() -> f64 {
    3.0
}

/// Response from `/api/{domain}/floors/{floor_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorPlanResponse {
    /// Rooms on the requested floor.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Bottom of the floor's vertical extent, in meters.
    #[serde(default)]
    pub min_height: f64,
    /// Top of the floor's vertical extent (exclusive), in meters.
    #[serde(default = "default_ceiling_height")]
    pub ceiling_height: f64,
}

/// One moving entity in the coordinates response.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEntity {
    pub coordinates: [f64; 3],
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub last_seen: Option<i64>,
}

/// Response from `/api/{domain}/coordinates`, keyed by beacon/entity id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinatesResponse {
    #[serde(default)]
    pub beacons: BTreeMap<String, BeaconPayload>,
    #[serde(default)]
    pub entities: BTreeMap<String, WireEntity>,
}

/// Response from `/api/{domain}/entity_names`: entity id to friendly name.
pub type EntityNames = BTreeMap<String, String>;

/// Merge one response from each endpoint into an engine snapshot.
///
/// Entity names come from the bulk name map; entities without an entry fall
/// back to their id at display time.
#[must_use]
pub fn snapshot_from_wire(
    plan: FloorPlanResponse,
    coordinates: CoordinatesResponse,
    names: &EntityNames,
) -> FloorSnapshot {
    let beacons = coordinates
        .beacons
        .into_iter()
        .map(|(id, payload)| payload.into_node(id))
        .collect();

    let entities = coordinates
        .entities
        .into_iter()
        .map(|(entity_id, wire)| MovingEntity {
            name: names.get(&entity_id).cloned(),
            entity_id,
            coordinates: wire.coordinates,
            confidence: wire.confidence,
            last_seen: wire.last_seen,
        })
        .collect();

    FloorSnapshot {
        rooms: plan.rooms,
        beacons,
        entities,
        min_height: plan.min_height,
        ceiling_height: plan.ceiling_height,
    }
}
