//! Marker hit-testing against the pointer.
//!
//! The pointer arrives in the rotated screen frame; markers live in the
//! unrotated canvas frame produced by the same [`ViewTransform`] the painter
//! used. The pointer is mapped through the inverse of the active rotation
//! before the distance comparison, so hits stay consistent with what is on
//! screen at any rotation angle.
//!
//! [`ViewTransform`]: crate::geom::ViewTransform

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::cmp::Ordering;

use crate::consts::HOVER_RADIUS_PX;
use crate::geom::Point;
use crate::scene::{MarkerKind, Scene};

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Identifier of the hit marker.
    pub id: String,
    pub kind: MarkerKind,
}

/// Test which marker (if any) is under `cursor` (screen frame, CSS pixels).
///
/// Within the hover radius the nearest marker wins.
#[must_use]
pub fn hit_test(scene: &Scene, cursor: Point) -> Option<Hit> {
    let local = scene.transform.unrotate(cursor);
    scene
        .markers
        .iter()
        .map(|m| {
            let dx = m.at.x - local.x;
            let dy = m.at.y - local.y;
            (m, dx * dx + dy * dy)
        })
        .filter(|&(_, dist2)| dist2 <= HOVER_RADIUS_PX * HOVER_RADIUS_PX)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(m, _)| Hit { id: m.id.clone(), kind: m.kind })
}
