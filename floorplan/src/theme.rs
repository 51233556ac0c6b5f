//! Theme resolution and the light/dark color sets.
//!
//! Every fill and stroke the painter uses has a light and a dark variant.
//! [`resolve`] picks the active theme: an explicit configuration override
//! wins; otherwise the host's dark-mode flag; otherwise a substring heuristic
//! on the host's theme name; default light. The DOM reads that feed the host
//! signals live in the card crate — this module is pure.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// The resolved theme a scene is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Theme preference from the card configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always light, regardless of the host.
    Light,
    /// Always dark, regardless of the host.
    Dark,
    /// Follow the host's dark-mode flag / theme name.
    #[default]
    Auto,
}

/// How room fill colors are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Cycle a fixed palette by the room's position in the list.
    #[default]
    Palette,
    /// Match keywords in the room name against a type→color table.
    ByName,
}

/// Resolve the active theme from the configured preference and host signals.
///
/// `host_dark` is the host's dark-mode flag when it provides one;
/// `host_theme_name` is the host's theme name, consulted only when the flag
/// is absent (any name containing `"dark"`, case-insensitive, counts).
#[must_use]
pub fn resolve(pref: ThemePreference, host_dark: Option<bool>, host_theme_name: Option<&str>) -> Theme {
    match pref {
        ThemePreference::Light => Theme::Light,
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Auto => {
            if let Some(dark) = host_dark {
                return if dark { Theme::Dark } else { Theme::Light };
            }
            if let Some(name) = host_theme_name {
                if name.to_ascii_lowercase().contains("dark") {
                    return Theme::Dark;
                }
            }
            Theme::Light
        }
    }
}

/// Room-type keywords matched against normalized room names in
/// [`ColorMode::ByName`], paired with per-theme fill indices into
/// [`ThemeColors::room_palette`]. Order matters: first match wins.
const ROOM_TYPE_KEYWORDS: [&str; 8] = [
    "living_room",
    "kitchen",
    "bedroom",
    "bathroom",
    "hallway",
    "storage",
    "office",
    "garage",
];

/// One theme's complete color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub grid: &'static str,
    pub room_border: &'static str,
    pub room_label: &'static str,
    /// Fallback room fill when no keyword matches in [`ColorMode::ByName`].
    pub room_default: &'static str,
    /// Room fills, cycled by index in [`ColorMode::Palette`] and indexed by
    /// keyword position in [`ColorMode::ByName`].
    pub room_palette: [&'static str; 8],
    pub beacon_fill: &'static str,
    pub beacon_dot: &'static str,
    pub entity_fill: &'static str,
    pub entity_dot: &'static str,
    pub marker_label: &'static str,
}

/// Light theme colors. Room fills follow the host's room-type conventions:
/// living room, kitchen, bedroom, bathroom, hallway, storage, office, garage.
pub const LIGHT: ThemeColors = ThemeColors {
    background: "#fafafa",
    grid: "#e0e0e0",
    room_border: "#666666",
    room_label: "#000000",
    room_default: "#e0e0e0",
    room_palette: [
        "#e0e0e0", "#fff9c4", "#f8bbd0", "#b3e5fc", "#f5f5f5", "#dcedc8", "#ffe0b2", "#d7ccc8",
    ],
    beacon_fill: "#1976d2",
    beacon_dot: "#ffffff",
    entity_fill: "#d94b4b",
    entity_dot: "#ffffff",
    marker_label: "#333333",
};

/// Dark theme colors — muted fills with light strokes and labels.
pub const DARK: ThemeColors = ThemeColors {
    background: "#1d1f23",
    grid: "#2b2e33",
    room_border: "#9aa0a6",
    room_label: "#e8eaed",
    room_default: "#3a3f45",
    room_palette: [
        "#3a3f45", "#4a4430", "#4a3340", "#2f4450", "#35393e", "#3c462f", "#4a3e2c", "#423a36",
    ],
    beacon_fill: "#64b5f6",
    beacon_dot: "#1d1f23",
    entity_fill: "#ef6f6f",
    entity_dot: "#1d1f23",
    marker_label: "#cfd2d6",
};

impl ThemeColors {
    /// The color set for a resolved theme.
    #[must_use]
    pub fn for_theme(theme: Theme) -> &'static Self {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Fill color for a room under the given policy.
    ///
    /// `index` is the room's position in the snapshot's room list. Name
    /// matching is a case-insensitive substring test against the normalized
    /// name (whitespace collapsed to `_`), first keyword wins, default gray.
    #[must_use]
    pub fn room_fill(&self, name: &str, index: usize, mode: ColorMode) -> &'static str {
        match mode {
            ColorMode::Palette => self.room_palette[index % self.room_palette.len()],
            ColorMode::ByName => {
                let normalized: String = name
                    .to_ascii_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("_");
                ROOM_TYPE_KEYWORDS
                    .iter()
                    .position(|keyword| normalized.contains(keyword))
                    .map_or(self.room_default, |i| self.room_palette[i])
            }
        }
    }
}
