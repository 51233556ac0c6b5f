use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::ROOM_LABEL_FONT;
use crate::geom::Point;
use crate::hit::{self, Hit};
use crate::model::FloorSnapshot;
use crate::render;
use crate::scene::{self, MeasureText, Scene, SceneConfig};
use crate::theme::{ColorMode, Theme, ThemeColors};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone)]
pub struct FloorplanCore {
    /// Last-known-good floor data; replaced wholesale on each fetch.
    pub snapshot: Option<FloorSnapshot>,
    /// Viewport size in CSS pixels.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Device pixel ratio used to size the canvas backing store.
    pub dpr: f64,
    /// Clockwise view rotation in degrees, normalized to `[0, 360)`.
    pub rotation_deg: f64,
    /// Room fill-color policy.
    pub color_mode: ColorMode,
    /// Resolved theme.
    pub theme: Theme,
    /// Last pointer position in CSS pixels, if the pointer is over the canvas.
    pub cursor: Option<Point>,
}

impl Default for FloorplanCore {
    fn default() -> Self {
        Self {
            snapshot: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            rotation_deg: 0.0,
            color_mode: ColorMode::default(),
            theme: Theme::default(),
            cursor: None,
        }
    }
}

impl FloorplanCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the floor data with a fresh snapshot.
    pub fn load_snapshot(&mut self, snapshot: FloorSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(1.0);
        self.viewport_height = height_css.max(1.0);
        self.dpr = dpr.max(1.0);
    }

    /// Set the view rotation, normalized into `[0, 360)`.
    pub fn set_rotation(&mut self, deg: f64) {
        self.rotation_deg = deg.rem_euclid(360.0);
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Track the pointer; `None` when it leaves the canvas.
    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    // --- Queries ---

    /// Lay out the current snapshot for the current viewport and theme.
    /// `None` until the first snapshot arrives.
    #[must_use]
    pub fn scene(&self, measure: &impl MeasureText) -> Option<Scene> {
        let snapshot = self.snapshot.as_ref()?;
        let config = SceneConfig {
            viewport_w: self.viewport_width,
            viewport_h: self.viewport_height,
            rotation_deg: self.rotation_deg,
            color_mode: self.color_mode,
            theme: self.theme,
        };
        Some(scene::build_scene(snapshot, &config, measure))
    }

    /// The marker under the tracked cursor, if any.
    ///
    /// Uses the same transform the scene was built with, so pointer
    /// coordinates map exactly as the draw pass did.
    #[must_use]
    pub fn hovered(&self, scene: &Scene) -> Option<Hit> {
        self.cursor.and_then(|cursor| hit::hit_test(scene, cursor))
    }

    /// Colors for the active theme.
    #[must_use]
    pub fn colors(&self) -> &'static ThemeColors {
        ThemeColors::for_theme(self.theme)
    }
}

/// The full floorplan engine. Wraps [`FloorplanCore`] and owns the browser
/// canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: FloorplanCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: FloorplanCore::new() }
    }

    /// Update viewport dimensions and resize the canvas backing store to
    /// match the device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
            self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
        }
    }

    /// Draw the current state to the canvas.
    ///
    /// Before the first snapshot arrives this clears to the theme background.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context_2d()?;

        // The label font must be active before layout so text measurement
        // during wrapping matches what gets painted.
        ctx.set_font(ROOM_LABEL_FONT);

        match self.core.scene(&ctx) {
            Some(scene) => {
                let hovered = self.core.hovered(&scene);
                render::draw(
                    &ctx,
                    &scene,
                    hovered.as_ref(),
                    self.core.viewport_width,
                    self.core.viewport_height,
                    self.core.dpr,
                )
            }
            None => render::draw_background(
                &ctx,
                self.core.colors(),
                self.core.viewport_width,
                self.core.viewport_height,
                self.core.dpr,
            ),
        }
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let value = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?;
        value
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }
}
