//! Host theme detection.
//!
//! Pulls the dark/light hints the host page exposes (a `data-theme` attribute
//! on `<html>` and the `prefers-color-scheme` media query) and feeds them to
//! the engine's pure resolver. SSR/native paths return no hints, so `auto`
//! falls back to light there.

use floorplan::theme::{Theme, ThemePreference, resolve};

/// Read the `data-theme` attribute from the document element, if present.
#[must_use]
pub fn host_theme_name() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute("data-theme"))
            .filter(|name| !name.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The host's explicit dark-mode flag, if it exposes one.
///
/// A `data-theme` of exactly `dark` or `light` counts as explicit; otherwise
/// the `prefers-color-scheme` media query is consulted. `None` when neither
/// hint is available.
#[must_use]
pub fn host_dark_flag() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        match host_theme_name().as_deref() {
            Some("dark") => return Some(true),
            Some("light") => return Some(false),
            _ => {}
        }
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .unwrap_or(None)
            .map(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Resolve the effective theme for the card from the configured preference
/// and whatever hints the host page provides.
#[must_use]
pub fn resolve_card_theme(preference: ThemePreference) -> Theme {
    resolve(preference, host_dark_flag(), host_theme_name().as_deref())
}
