//! Floor-data lifecycle: loading, last-known-good snapshots, and staleness.
//!
//! Fetches can overlap (a manual refresh racing the periodic one), so each
//! fetch gets a generation number from [`FloorState::begin_fetch`]. A result
//! only applies if its generation is still the latest; anything older is
//! discarded, which keeps a slow early response from overwriting a newer one.

#[cfg(test)]
#[path = "floor_test.rs"]
mod floor_test;

use floorplan::model::FloorSnapshot;

/// Floor-data state: the current snapshot, the last error, and fetch tracking.
#[derive(Debug, Clone, Default)]
pub struct FloorState {
    /// Last successfully fetched snapshot. Kept through later failures.
    pub snapshot: Option<FloorSnapshot>,
    /// Message from the most recent failed fetch, cleared on success.
    pub error: Option<String>,
    /// True once any fetch (success or failure) has completed.
    pub loaded_once: bool,
    /// Generation of the most recently started fetch.
    pub fetch_generation: u64,
}

impl FloorState {
    /// Start a new fetch and return its generation number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Apply a successful fetch result. Returns `false` (and changes nothing)
    /// if a newer fetch has started since `generation` was issued.
    pub fn apply_success(&mut self, generation: u64, snapshot: FloorSnapshot) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.snapshot = Some(snapshot);
        self.error = None;
        self.loaded_once = true;
        true
    }

    /// Apply a failed fetch result. Returns `false` (and changes nothing) if
    /// stale. The previous snapshot is kept so the canvas can still draw.
    pub fn apply_failure(&mut self, generation: u64, message: String) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.error = Some(message);
        self.loaded_once = true;
        true
    }

    /// Whether to show the loading indicator: only before the first fetch
    /// completes. Refreshes never flash it again.
    #[must_use]
    pub fn show_loading(&self) -> bool {
        !self.loaded_once
    }
}
