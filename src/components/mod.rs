//! Leptos components.

pub mod card;
