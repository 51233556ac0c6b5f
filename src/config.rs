//! Card configuration parsing and validation.
//!
//! The host hands the card a free-form JSON object. [`CardConfig::parse`]
//! turns it into a typed config or a [`ConfigError`] the host can surface
//! next to the card.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use thiserror::Error;

use floorplan::theme::{ColorMode, ThemePreference};

/// Default service domain used to build API paths when the config omits one.
pub const DEFAULT_SERVICE_DOMAIN: &str = "floorplan";

/// Default interval between coordinate refreshes, in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 5_000;

/// Configuration errors reported back to the host at setup time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config object is missing `floor_id` (or it is empty).
    #[error("floor_id is required")]
    MissingFloorId,
    /// `rotation` is outside the accepted `0..=360` range.
    #[error("rotation must be between 0 and 360, got {0}")]
    RotationOutOfRange(f64),
    /// The config object could not be deserialized at all.
    #[error("invalid configuration: {0}")]
    Malformed(String),
}

/// Validated card configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CardConfig {
    /// Optional heading shown above the canvas.
    pub title: Option<String>,
    /// Which floor to fetch and draw.
    pub floor_id: String,
    /// Service domain segment of the API paths.
    pub service_domain: String,
    /// Stretch the card across the full host width.
    pub full_width: bool,
    /// Clockwise view rotation in degrees, `0..=360`.
    pub rotation: f64,
    /// Light/dark override, or `auto` to follow the host.
    pub theme: ThemePreference,
    /// Room fill-color policy.
    pub color_mode: ColorMode,
    /// Milliseconds between coordinate refreshes.
    pub refresh_interval_ms: u32,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    title: Option<String>,
    floor_id: Option<String>,
    service_domain: Option<String>,
    #[serde(default)]
    full_width: bool,
    rotation: Option<f64>,
    #[serde(default)]
    theme: ThemePreference,
    #[serde(default)]
    color_mode: ColorMode,
    refresh_interval_ms: Option<u32>,
}

impl CardConfig {
    /// Parse and validate a raw config JSON string, as handed to the mount
    /// entry point.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Malformed`] when the string is not valid JSON, plus
    /// every failure mode of [`CardConfig::parse`].
    pub fn from_json(config_json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(config_json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::parse(&value)
    }

    /// Parse and validate a raw config object.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `floor_id` is missing or empty, when
    /// `rotation` falls outside `0..=360`, or when the object does not
    /// deserialize (unknown theme or color mode values included).
    pub fn parse(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_value(value.clone()).map_err(|e| ConfigError::Malformed(e.to_string()))?;

        let floor_id = raw
            .floor_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingFloorId)?;

        let rotation = raw.rotation.unwrap_or(0.0);
        if !(0.0..=360.0).contains(&rotation) {
            return Err(ConfigError::RotationOutOfRange(rotation));
        }

        Ok(Self {
            title: raw.title,
            floor_id,
            service_domain: raw
                .service_domain
                .unwrap_or_else(|| DEFAULT_SERVICE_DOMAIN.to_owned()),
            full_width: raw.full_width,
            rotation,
            theme: raw.theme,
            color_mode: raw.color_mode,
            refresh_interval_ms: raw.refresh_interval_ms.unwrap_or(DEFAULT_REFRESH_INTERVAL_MS),
        })
    }
}
