//! Canvas viewport synchronization.
//!
//! Bridges the Leptos node ref to the imperative engine. Hydrate-only: it
//! reads live element dimensions from the DOM.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use floorplan::engine::Engine;

/// Read the canvas element's CSS dimensions and device pixel ratio, then push
/// them to the engine.
///
/// Uses CSS pixel dimensions (`client_width` / `client_height`) rather than
/// backing-store pixels; the engine multiplies by DPR internally when sizing
/// the backing store.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}
