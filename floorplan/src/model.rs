//! Floor data model: rooms, tracked markers, and the floor snapshot.
//!
//! These types are the canonical in-memory shape of one floor's data. The
//! host serves beacon coordinates in two wire formats (a bare 3-vector, or an
//! object carrying the vector plus a friendly name); [`BeaconPayload`]
//! normalizes both into [`BeaconNode`] at the deserialization boundary so the
//! drawing code never branches on format.
//!
//! A snapshot is replaced wholesale on each successful fetch — there is no
//! incremental mutation and no persistence across reloads.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// A room on the active floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Host-side room identifier.
    pub id: String,
    /// Display name drawn as the room label.
    pub name: String,
    /// Floor tag, if the host provides one.
    #[serde(default)]
    pub floor: Option<String>,
    /// Area/zone tag, if the host provides one.
    #[serde(default)]
    pub area: Option<String>,
    /// Ordered boundary points of a simple polygon (not guaranteed convex).
    pub boundaries: Vec<[f64; 2]>,
}

impl Room {
    /// A room needs at least 3 boundary points to enclose any area.
    /// Rooms below this are skipped by the scene builder.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.boundaries.len() >= 3
    }
}

/// A fixed-position tracked reference point used for indoor positioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconNode {
    /// Host-side identifier.
    pub id: String,
    /// Optional friendly display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Position as `[x, y, z]`; `z` determines floor membership.
    pub coordinates: [f64; 3],
}

impl BeaconNode {
    /// Label text: the friendly name when present, otherwise the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A tracked object or person with a live, changing position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingEntity {
    /// Host-side entity identifier used to resolve a display name.
    pub entity_id: String,
    /// Friendly name resolved at the fetch boundary, when the host knows one.
    #[serde(default)]
    pub name: Option<String>,
    /// Position as `[x, y, z]`; `z` determines floor membership.
    pub coordinates: [f64; 3],
    /// Position confidence reported by the host, if any.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Millisecond timestamp of the last position update, if reported.
    #[serde(default)]
    pub last_seen: Option<i64>,
}

impl MovingEntity {
    /// Label text: the resolved friendly name, otherwise the identifier's
    /// tail segment (`"device_tracker.phone"` → `"phone"`).
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) => name,
            None => self.entity_id.rsplit('.').next().unwrap_or(&self.entity_id),
        }
    }
}

/// Beacon coordinates as they appear on the wire — either a bare 3-vector or
/// an object with a `coordinates` field and an optional `name`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BeaconPayload {
    /// `[x, y, z]`
    Bare([f64; 3]),
    /// `{ "coordinates": [x, y, z], "name": "…" }`
    Named {
        coordinates: [f64; 3],
        #[serde(default)]
        name: Option<String>,
    },
}

impl BeaconPayload {
    /// Normalize into the canonical [`BeaconNode`] shape.
    #[must_use]
    pub fn into_node(self, id: String) -> BeaconNode {
        match self {
            Self::Bare(coordinates) => BeaconNode { id, name: None, coordinates },
            Self::Named { coordinates, name } => BeaconNode { id, name, coordinates },
        }
    }
}

/// Everything needed to draw one floor: rooms, markers, and the vertical
/// extent used to assign 3D-positioned markers to this floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSnapshot {
    /// Rooms in a stable order; fill-palette cycling indexes into this list.
    pub rooms: Vec<Room>,
    /// All known beacon nodes, across every floor.
    pub beacons: Vec<BeaconNode>,
    /// All known moving entities, across every floor.
    pub entities: Vec<MovingEntity>,
    /// Lower edge of the floor's vertical extent (inclusive).
    pub min_height: f64,
    /// Upper edge of the floor's vertical extent (exclusive).
    pub ceiling_height: f64,
}

impl FloorSnapshot {
    /// Floor-assignment policy: `min_height <= z < ceiling_height`.
    ///
    /// The half-open range is deliberate — a marker sitting exactly at a
    /// floor boundary belongs to the floor above, never to both.
    #[must_use]
    pub fn on_floor(&self, z: f64) -> bool {
        z >= self.min_height && z < self.ceiling_height
    }

    /// Beacons whose `z` falls within this floor's vertical extent.
    pub fn floor_beacons(&self) -> impl Iterator<Item = &BeaconNode> {
        self.beacons.iter().filter(|b| self.on_floor(b.coordinates[2]))
    }

    /// Moving entities whose `z` falls within this floor's vertical extent.
    pub fn floor_entities(&self) -> impl Iterator<Item = &MovingEntity> {
        self.entities.iter().filter(|e| self.on_floor(e.coordinates[2]))
    }
}
