//! Floorplan rendering engine for the floorplan card.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full drawing pipeline for one floor: fitting real-world room polygons into
//! a canvas viewport, laying out labels and tracked markers, hit-testing
//! markers against the pointer, and painting the scene to a 2D context. The
//! host card layer is responsible only for fetching floor data, resolving the
//! active theme, and wiring DOM events to the [`engine::Engine`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::FloorplanCore`] |
//! | [`model`] | Floor snapshot types and wire-format normalization |
//! | [`geom`] | Bounds and the world-to-canvas view transform |
//! | [`scene`] | Pure scene layout: rooms, labels, markers |
//! | [`hit`] | Marker hit-testing against the pointer |
//! | [`theme`] | Light/dark color sets and fill-color policies |
//! | [`render`] | Scene painting to a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (padding, radii, fonts) |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod model;
pub mod render;
pub mod scene;
pub mod theme;
