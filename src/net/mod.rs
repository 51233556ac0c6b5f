//! Host API access: endpoint layout, wire DTOs, and fetch helpers.

pub mod api;
pub mod types;
