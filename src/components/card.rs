//! The floorplan card component.
//!
//! ARCHITECTURE
//! ============
//! The `floorplan` crate owns layout and painting; this component maps host
//! data and DOM events into engine operations. On hydration it mounts
//! `floorplan::engine::Engine` on the canvas element, fetches floor data,
//! refreshes coordinates on an interval, and re-renders through
//! `requestAnimationFrame`.

use leptos::prelude::*;

use crate::config::CardConfig;
use crate::state::floor::FloorState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use floorplan::engine::Engine;
#[cfg(feature = "hydrate")]
use floorplan::geom::Point;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::util::theme::resolve_card_theme;
#[cfg(feature = "hydrate")]
use crate::util::viewport::sync_viewport;

#[cfg(feature = "hydrate")]
fn render_now(engine: &Rc<RefCell<Option<Engine>>>) {
    if let Some(engine) = engine.borrow().as_ref() {
        if let Err(err) = engine.render() {
            log::error!("canvas render failed: {err:?}");
        }
    }
}

/// Schedule a render on the next animation frame, collapsing bursts of
/// requests into a single draw.
#[cfg(feature = "hydrate")]
fn request_render(engine: &Rc<RefCell<Option<Engine>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        render_now(engine);
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        render_now(&engine_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        render_now(engine);
    }
}

/// Kick off one fetch cycle: floor plan, coordinates, and entity names.
///
/// The generation number issued at the start keeps a slow response from
/// overwriting the result of a fetch started later.
#[cfg(feature = "hydrate")]
fn spawn_fetch(
    engine: &Rc<RefCell<Option<Engine>>>,
    state: RwSignal<FloorState>,
    domain: String,
    floor_id: String,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    raf_pending: RwSignal<bool>,
) {
    let engine = Rc::clone(engine);
    wasm_bindgen_futures::spawn_local(async move {
        // try_update returns None once the card is unmounted.
        let Some(generation) = state.try_update(FloorState::begin_fetch) else {
            return;
        };
        match api::fetch_snapshot(&domain, &floor_id).await {
            Ok(snapshot) => {
                let applied = state
                    .try_update(|s| s.apply_success(generation, snapshot.clone()))
                    .unwrap_or(false);
                if applied {
                    if let Some(engine) = engine.borrow_mut().as_mut() {
                        // The host may have resized the card since the last
                        // pointer event; pick up the current canvas size
                        // before laying out the new snapshot.
                        sync_viewport(engine, &canvas_ref);
                        engine.core.load_snapshot(snapshot);
                    }
                    request_render(&engine, raf_pending);
                }
            }
            Err(err) => {
                log::warn!("floor data fetch failed: {err}");
                let _ = state.try_update(|s| s.apply_failure(generation, err.to_string()));
            }
        }
    });
}

/// Floorplan card.
///
/// Shows a title (optional), a loading indicator until the first fetch
/// completes, the last fetch error (if any), and the floor canvas. Earlier
/// data stays on screen through failed refreshes.
#[component]
pub fn FloorplanCard(config: CardConfig) -> impl IntoView {
    let state = RwSignal::new(FloorState::default());
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let title = config.title.clone();
    let full_width = config.full_width;

    #[cfg(feature = "hydrate")]
    let raf_pending = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "hydrate")]
    let refresh_tick = Rc::new(RefCell::new(None::<Interval>));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let refresh_tick_mount = Rc::clone(&refresh_tick);
        let canvas_ref_mount = canvas_ref;
        let rotation = config.rotation;
        let color_mode = config.color_mode;
        let theme_preference = config.theme;
        let domain = config.service_domain.clone();
        let floor_id = config.floor_id.clone();
        let refresh_interval_ms = config.refresh_interval_ms;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas);
            instance.core.set_rotation(rotation);
            instance.core.set_color_mode(color_mode);
            instance.core.set_theme(resolve_card_theme(theme_preference));
            sync_viewport(&mut instance, &canvas_ref_mount);
            *engine.borrow_mut() = Some(instance);
            request_render(&engine, raf_pending);

            spawn_fetch(
                &engine,
                state,
                domain.clone(),
                floor_id.clone(),
                canvas_ref_mount,
                raf_pending,
            );

            let engine_for_tick = Rc::clone(&engine);
            let domain_for_tick = domain.clone();
            let floor_id_for_tick = floor_id.clone();
            let tick = Interval::new(refresh_interval_ms, move || {
                spawn_fetch(
                    &engine_for_tick,
                    state,
                    domain_for_tick.clone(),
                    floor_id_for_tick.clone(),
                    canvas_ref_mount,
                    raf_pending,
                );
            });
            *refresh_tick_mount.borrow_mut() = Some(tick);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let refresh_tick = Rc::clone(&refresh_tick);
        on_cleanup(move || {
            refresh_tick.borrow_mut().take();
        });
    }

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    // Re-sync so hover hit-testing stays accurate after the
                    // host resizes the card.
                    sync_viewport(engine, &canvas_ref);
                    engine.core.set_cursor(Some(point));
                }
                request_render(&engine, raf_pending);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.core.set_cursor(None);
                }
                request_render(&engine, raf_pending);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div class="floorplan-card" class=("floorplan-card--full-width", full_width)>
            {title.map(|t| view! { <h2 class="floorplan-card__title">{t}</h2> })}
            {move || {
                state
                    .with(FloorState::show_loading)
                    .then(|| view! { <div class="floorplan-card__loading">"Loading floor plan"</div> })
            }}
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <div class="floorplan-card__error">{message}</div> })
            }}
            <canvas
                class="floorplan-card__canvas"
                node_ref=canvas_ref
                on:pointermove=on_pointer_move
                on:pointerleave=on_pointer_leave
            ></canvas>
        </div>
    }
}
