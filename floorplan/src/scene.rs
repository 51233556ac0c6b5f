//! Pure scene layout: rooms, labels, and markers.
//!
//! [`build_scene`] turns a [`FloorSnapshot`] into resolved canvas-space
//! geometry — it performs no drawing and touches no browser APIs, so the
//! whole layout (including label wrapping, which needs text metrics) is
//! testable natively. Text measurement is abstracted behind [`MeasureText`];
//! the painter implements it for the real 2D context.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{LABEL_MARGIN_PX, MIN_WORLD_EXTENT};
use crate::geom::{Bounds, Point, ViewTransform};
use crate::model::FloorSnapshot;
use crate::theme::{ColorMode, Theme, ThemeColors};

/// Width of rendered text in pixels, under the room-label font.
pub trait MeasureText {
    fn text_width(&self, text: &str) -> f64;
}

/// Inputs that shape a scene besides the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    /// Canvas size in CSS pixels.
    pub viewport_w: f64,
    pub viewport_h: f64,
    /// Clockwise view rotation in degrees.
    pub rotation_deg: f64,
    /// Room fill-color policy.
    pub color_mode: ColorMode,
    /// Resolved theme.
    pub theme: Theme,
}

/// A room label: one or more centered lines anchored at the room centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub lines: Vec<String>,
    /// Anchor in the unrotated canvas frame — the arithmetic mean of the
    /// room's transformed vertices.
    pub anchor: Point,
}

/// A room resolved to canvas space, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomShape {
    pub points: Vec<Point>,
    pub fill: &'static str,
    pub label: Label,
}

/// What a marker tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Beacon,
    Entity,
}

/// A tracked marker resolved to canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Host-side identifier (beacon id or entity id).
    pub id: String,
    pub kind: MarkerKind,
    /// Position in the unrotated canvas frame.
    pub at: Point,
    pub label: String,
    /// Entity labels always show; beacon labels only under the cursor.
    pub label_always: bool,
}

/// One render pass's worth of resolved geometry.
#[derive(Debug, Clone)]
pub struct Scene {
    pub transform: ViewTransform,
    pub colors: &'static ThemeColors,
    pub rooms: Vec<RoomShape>,
    pub markers: Vec<Marker>,
}

/// Lay out the snapshot for the given viewport, rotation, and theme.
///
/// Rooms with fewer than 3 boundary points are skipped with a logged warning
/// rather than aborting the scene. Markers are filtered to the snapshot's
/// floor by its `[min_height, ceiling_height)` vertical extent.
#[must_use]
pub fn build_scene(snapshot: &FloorSnapshot, config: &SceneConfig, measure: &impl MeasureText) -> Scene {
    let bounds = Bounds::of_rooms(&snapshot.rooms)
        .or_else(|| {
            Bounds::of_points(
                snapshot
                    .floor_beacons()
                    .map(|b| [b.coordinates[0], b.coordinates[1]])
                    .chain(snapshot.floor_entities().map(|e| [e.coordinates[0], e.coordinates[1]])),
            )
        })
        .unwrap_or(Bounds { min_x: 0.0, min_y: 0.0, max_x: 1.0, max_y: 1.0 });

    let transform = ViewTransform::fit(bounds, config.viewport_w, config.viewport_h, config.rotation_deg);
    let colors = ThemeColors::for_theme(config.theme);

    let mut rooms = Vec::with_capacity(snapshot.rooms.len());
    for (index, room) in snapshot.rooms.iter().enumerate() {
        if !room.is_drawable() {
            log::warn!(
                "room {} has {} boundary points (need 3); skipping",
                room.id,
                room.boundaries.len()
            );
            continue;
        }

        let points: Vec<Point> = room
            .boundaries
            .iter()
            .map(|&[x, y]| transform.world_to_canvas(x, y))
            .collect();
        let anchor = centroid(&points);

        // Wrap threshold: the room's own on-canvas width, minus margin.
        let room_canvas_w = Bounds::of_points(room.boundaries.iter().copied())
            .map_or(MIN_WORLD_EXTENT, |b| b.width())
            * transform.scale;
        let max_label_w = (room_canvas_w - LABEL_MARGIN_PX).max(1.0);

        rooms.push(RoomShape {
            points,
            fill: colors.room_fill(&room.name, index, config.color_mode),
            label: Label {
                lines: wrap_label(measure, &room.name, max_label_w),
                anchor,
            },
        });
    }

    let mut markers = Vec::new();
    for beacon in snapshot.floor_beacons() {
        markers.push(Marker {
            id: beacon.id.clone(),
            kind: MarkerKind::Beacon,
            at: transform.world_to_canvas(beacon.coordinates[0], beacon.coordinates[1]),
            label: beacon.display_name().to_owned(),
            label_always: false,
        });
    }
    for entity in snapshot.floor_entities() {
        markers.push(Marker {
            id: entity.entity_id.clone(),
            kind: MarkerKind::Entity,
            at: transform.world_to_canvas(entity.coordinates[0], entity.coordinates[1]),
            label: entity.display_name().to_owned(),
            label_always: true,
        });
    }

    Scene { transform, colors, rooms, markers }
}

/// Arithmetic mean of the transformed vertices — the label anchor.
fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Point::new(sum_x / n, sum_y / n)
}

/// Greedy word-by-word wrap of a label that is too wide for its room.
///
/// Text that fits, or that contains no space to break at, stays on one line.
/// A single word wider than the threshold keeps its own line; mid-word breaks
/// are never introduced.
fn wrap_label(measure: &impl MeasureText, text: &str, max_w: f64) -> Vec<String> {
    if measure.text_width(text) <= max_w || !text.contains(' ') {
        return vec![text.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure.text_width(&candidate) <= max_w {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
