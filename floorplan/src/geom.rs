//! Bounds computation and the world-to-canvas view transform.
//!
//! The transform is derived fresh for every scene build from the current room
//! bounds, canvas size, and configured rotation — it is never stored across
//! renders. Rotation is applied by the painter as a canvas-space rotation
//! about the viewport center, so the linear mapping here stays axis-aligned
//! and trivially invertible; [`ViewTransform::rotate`] / [`ViewTransform::unrotate`]
//! bridge between the rotated screen frame and the unrotated canvas frame.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::{CANVAS_PADDING_PX, MIN_WORLD_EXTENT};
use crate::model::Room;

/// A point in world, canvas, or screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box over world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Minimal bounds covering the given points. `None` when empty.
    #[must_use]
    pub fn of_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        let mut bounds: Option<Self> = None;
        for [x, y] in points {
            match bounds.as_mut() {
                Some(b) => b.include(x, y),
                None => bounds = Some(Self { min_x: x, min_y: y, max_x: x, max_y: y }),
            }
        }
        bounds
    }

    /// Minimal bounds covering every boundary point of every room.
    ///
    /// All rooms contribute, including ones with too few points to draw, so
    /// the view does not jump when a malformed room is later fixed.
    #[must_use]
    pub fn of_rooms(rooms: &[Room]) -> Option<Self> {
        Self::of_points(rooms.iter().flat_map(|r| r.boundaries.iter().copied()))
    }

    /// Grow the bounds to include `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// The linear world-to-canvas mapping for one render pass, plus the rotation
/// applied on top of it by the painter.
///
/// `canvas = (world - bounds_min) * scale + offset`, with `offset` chosen so
/// the scaled content is centered in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform world-to-canvas scale factor.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// World-space origin of the mapping (bounds minimum).
    pub min_x: f64,
    pub min_y: f64,
    /// Clockwise view rotation in degrees, applied about the viewport center.
    pub rotation_deg: f64,
    /// Viewport center, the pivot for rotation.
    pub center_x: f64,
    pub center_y: f64,
}

impl ViewTransform {
    /// Fit `bounds` into a `viewport_w` × `viewport_h` canvas with the
    /// standard edge padding, leaving room for the larger footprint the
    /// content occupies once rotated by `rotation_deg`.
    ///
    /// Degenerate bounds (zero width or height) are clamped to a minimum
    /// extent so the scale is always finite.
    #[must_use]
    pub fn fit(bounds: Bounds, viewport_w: f64, viewport_h: f64, rotation_deg: f64) -> Self {
        let world_w = bounds.width().max(MIN_WORLD_EXTENT);
        let world_h = bounds.height().max(MIN_WORLD_EXTENT);

        let avail_w = (viewport_w - 2.0 * CANVAS_PADDING_PX).max(1.0);
        let avail_h = (viewport_h - 2.0 * CANVAS_PADDING_PX).max(1.0);

        // Footprint of the content's bounding rectangle after rotation.
        let theta = rotation_deg.to_radians();
        let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
        let rotated_w = world_w * cos + world_h * sin;
        let rotated_h = world_w * sin + world_h * cos;

        let scale = (avail_w / rotated_w).min(avail_h / rotated_h);

        Self {
            scale,
            offset_x: (viewport_w - world_w * scale) * 0.5,
            offset_y: (viewport_h - world_h * scale) * 0.5,
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            rotation_deg,
            center_x: viewport_w * 0.5,
            center_y: viewport_h * 0.5,
        }
    }

    /// Map a world coordinate into the unrotated canvas frame.
    #[must_use]
    pub fn world_to_canvas(&self, x: f64, y: f64) -> Point {
        Point {
            x: (x - self.min_x) * self.scale + self.offset_x,
            y: (y - self.min_y) * self.scale + self.offset_y,
        }
    }

    /// Inverse of [`Self::world_to_canvas`].
    #[must_use]
    pub fn canvas_to_world(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.offset_x) / self.scale + self.min_x,
            y: (p.y - self.offset_y) / self.scale + self.min_y,
        }
    }

    /// Rotate a canvas-frame point into the rotated screen frame.
    #[must_use]
    pub fn rotate(&self, p: Point) -> Point {
        self.rotate_about_center(p, self.rotation_deg)
    }

    /// Map a screen-frame point (e.g. the mouse) back into the unrotated
    /// canvas frame by applying the inverse of the active rotation.
    #[must_use]
    pub fn unrotate(&self, p: Point) -> Point {
        self.rotate_about_center(p, -self.rotation_deg)
    }

    fn rotate_about_center(&self, p: Point, deg: f64) -> Point {
        let theta = deg.to_radians();
        let (sin, cos) = (theta.sin(), theta.cos());
        let dx = p.x - self.center_x;
        let dy = p.y - self.center_y;
        Point {
            x: self.center_x + dx * cos - dy * sin,
            y: self.center_y + dx * sin + dy * cos,
        }
    }
}
