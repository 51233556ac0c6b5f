//! Browser-facing helpers shared by the card component.

pub mod theme;
pub mod viewport;
