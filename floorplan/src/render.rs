//! Rendering: paints a laid-out [`Scene`] to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives the resolved scene and
//! produces pixels — it does not mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    CANVAS_PADDING_PX, GRID_STEP_PX, LABEL_LINE_HEIGHT_PX, MARKER_DOT_RADIUS_PX, MARKER_LABEL_FONT,
    MARKER_LABEL_OFFSET_PX, MARKER_RADIUS_PX, ROOM_BORDER_WIDTH_PX, ROOM_LABEL_FONT,
};
use crate::geom::Point;
use crate::hit::Hit;
use crate::scene::{Marker, MarkerKind, MeasureText, Scene};
use crate::theme::ThemeColors;

impl MeasureText for CanvasRenderingContext2d {
    fn text_width(&self, text: &str) -> f64 {
        match self.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => f64::INFINITY,
        }
    }
}

/// Clear the canvas to the theme background. Used before the first snapshot
/// arrives, and as the first layer of [`draw`].
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` call fails.
pub fn draw_background(
    ctx: &CanvasRenderingContext2d,
    colors: &ThemeColors,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(colors.background);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    Ok(())
}

/// Draw the full scene: background, reference grid, rooms with labels, and
/// markers.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel
/// ratio. `hovered` selects which beacon label (if any) is visible.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    hovered: Option<&Hit>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let colors = scene.colors;

    // Layer 1: background and reference grid, unrotated.
    draw_background(ctx, colors, viewport_w, viewport_h, dpr)?;
    draw_grid(ctx, colors, viewport_w, viewport_h);

    // Layers 2-3 rotate about the viewport center; labels compensate so
    // text stays upright.
    let rotation_deg = scene.transform.rotation_deg;
    ctx.save();
    ctx.translate(scene.transform.center_x, scene.transform.center_y)?;
    ctx.rotate(rotation_deg.to_radians())?;
    ctx.translate(-scene.transform.center_x, -scene.transform.center_y)?;

    // Layer 2: rooms, then all labels on top of all fills.
    for room in &scene.rooms {
        draw_room_polygon(ctx, &room.points, room.fill, colors);
    }
    ctx.set_font(ROOM_LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(colors.room_label);
    for room in &scene.rooms {
        draw_label_lines(ctx, room.label.anchor, &room.label.lines, rotation_deg)?;
    }

    // Layer 3: markers and their labels.
    for marker in &scene.markers {
        draw_marker(ctx, marker, colors)?;
    }
    ctx.set_font(MARKER_LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.set_fill_style_str(colors.marker_label);
    for marker in &scene.markers {
        let show = marker.label_always || hovered.is_some_and(|h| h.id == marker.id);
        if show {
            draw_marker_label(ctx, marker, rotation_deg)?;
        }
    }

    ctx.restore();
    Ok(())
}

// =============================================================
// Grid
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, colors: &ThemeColors, viewport_w: f64, viewport_h: f64) {
    ctx.set_stroke_style_str(colors.grid);
    ctx.set_line_width(0.5);

    let mut x = CANVAS_PADDING_PX;
    while x < viewport_w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, viewport_h);
        ctx.stroke();
        x += GRID_STEP_PX;
    }

    let mut y = CANVAS_PADDING_PX;
    while y < viewport_h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(viewport_w, y);
        ctx.stroke();
        y += GRID_STEP_PX;
    }
}

// =============================================================
// Rooms
// =============================================================

fn draw_room_polygon(ctx: &CanvasRenderingContext2d, points: &[Point], fill: &str, colors: &ThemeColors) {
    let Some(first) = points.first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in &points[1..] {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(fill);
    ctx.fill();

    ctx.set_stroke_style_str(colors.room_border);
    ctx.set_line_width(ROOM_BORDER_WIDTH_PX);
    ctx.stroke();
}

/// Paint centered label lines in a rotation-compensated local frame so the
/// text stays upright under view rotation.
fn draw_label_lines(
    ctx: &CanvasRenderingContext2d,
    anchor: Point,
    lines: &[String],
    rotation_deg: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(anchor.x, anchor.y)?;
    ctx.rotate(-rotation_deg.to_radians())?;

    let total = LABEL_LINE_HEIGHT_PX * (lines.len().saturating_sub(1) as f64);
    let start_y = -total * 0.5;
    for (idx, line) in lines.iter().enumerate() {
        let y = start_y + (idx as f64 * LABEL_LINE_HEIGHT_PX);
        ctx.fill_text(line, 0.0, y)?;
    }

    ctx.restore();
    Ok(())
}

// =============================================================
// Markers
// =============================================================

fn draw_marker(ctx: &CanvasRenderingContext2d, marker: &Marker, colors: &ThemeColors) -> Result<(), JsValue> {
    let (fill, dot) = match marker.kind {
        MarkerKind::Beacon => (colors.beacon_fill, colors.beacon_dot),
        MarkerKind::Entity => (colors.entity_fill, colors.entity_dot),
    };

    ctx.begin_path();
    ctx.arc(marker.at.x, marker.at.y, MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();

    ctx.begin_path();
    ctx.arc(marker.at.x, marker.at.y, MARKER_DOT_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(dot);
    ctx.fill();

    Ok(())
}

fn draw_marker_label(ctx: &CanvasRenderingContext2d, marker: &Marker, rotation_deg: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(marker.at.x, marker.at.y)?;
    ctx.rotate(-rotation_deg.to_radians())?;
    ctx.fill_text(&marker.label, 0.0, -MARKER_LABEL_OFFSET_PX)?;
    ctx.restore();
    Ok(())
}
