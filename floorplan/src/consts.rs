//! Shared numeric constants for the floorplan crate.

// ── Viewport ────────────────────────────────────────────────────

/// Padding between the canvas edge and the fitted floorplan, in pixels.
pub const CANVAS_PADDING_PX: f64 = 20.0;

/// Minimum world extent used when fitting degenerate bounds, so a
/// single-point or zero-area floorplan never divides by zero.
pub const MIN_WORLD_EXTENT: f64 = 1e-6;

/// Spacing of the background reference grid, in pixels.
pub const GRID_STEP_PX: f64 = 10.0;

// ── Rooms ───────────────────────────────────────────────────────

/// Room border stroke width in pixels.
pub const ROOM_BORDER_WIDTH_PX: f64 = 2.0;

/// Font for room labels.
pub const ROOM_LABEL_FONT: &str = "bold 12px sans-serif";

/// Vertical distance between wrapped room label lines, in pixels.
pub const LABEL_LINE_HEIGHT_PX: f64 = 14.0;

/// Horizontal slack subtracted from a room's on-canvas width before
/// deciding whether its label needs wrapping.
pub const LABEL_MARGIN_PX: f64 = 8.0;

// ── Markers ─────────────────────────────────────────────────────

/// Outer radius of a beacon/entity marker circle, in pixels.
pub const MARKER_RADIUS_PX: f64 = 6.0;

/// Radius of the contrasting inner dot, in pixels.
pub const MARKER_DOT_RADIUS_PX: f64 = 2.5;

/// Cursor distance within which a beacon marker shows its label, and the
/// radius used for marker hit-testing. Screen pixels.
pub const HOVER_RADIUS_PX: f64 = 16.0;

/// Gap between a marker circle and its label baseline, in pixels.
pub const MARKER_LABEL_OFFSET_PX: f64 = 10.0;

/// Font for marker labels.
pub const MARKER_LABEL_FONT: &str = "11px sans-serif";
