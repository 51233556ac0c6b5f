//! Floorplan card: a canvas widget that draws a floor's rooms and live
//! positions of beacons and tracked entities.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | Card configuration parsing and validation |
//! | [`net`] | Host API endpoints, wire DTOs, fetch helpers |
//! | [`state`] | Floor-data lifecycle (loading, errors, staleness) |
//! | [`components`] | The Leptos card component |
//! | [`util`] | Host theme detection and viewport sync |
//!
//! Layout and painting live in the `floorplan` crate; this crate hosts it in
//! a page, feeds it data, and wires up DOM events.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// One-time WASM setup: panic hook and console logging.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Mount a card into the element with id `host_id`.
///
/// `config_json` is the raw card configuration as a JSON string. An invalid
/// config is not fatal to the host page: the card mounts a static inline
/// error message in place of the canvas, and stays that way until the host
/// remounts it with a fixed config.
///
/// # Errors
///
/// Returns `Err` only if the host element is missing.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn mount_card(host_id: &str, config_json: &str) -> Result<(), JsValue> {
    use leptos::prelude::*;

    use crate::components::card::FloorplanCard;
    use crate::config::CardConfig;

    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(host_id))
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {host_id}")))?;
    let host: web_sys::HtmlElement = host.dyn_into().map_err(JsValue::from)?;

    match CardConfig::from_json(config_json) {
        Ok(config) => {
            leptos::mount::mount_to(host, move || {
                leptos::view! { <FloorplanCard config=config.clone() /> }
            })
            .forget();
        }
        Err(err) => {
            let message = err.to_string();
            log::error!("card configuration rejected: {message}");
            leptos::mount::mount_to(host, move || {
                leptos::view! {
                    <div class="floorplan-card floorplan-card--invalid">
                        <div class="floorplan-card__error">{message.clone()}</div>
                    </div>
                }
            })
            .forget();
        }
    }

    Ok(())
}
