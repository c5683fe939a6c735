use serde::Deserialize;

use crate::components::orbit_item::OrbitItem;
use crate::components::presets::Preset;
use crate::components::star::{StarfieldParams, MAX_STARS};

/// Background configuration, usually passed from the page as JSON.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Number of stars (default: 200).
    pub star_count: usize,
    /// Star radius range in pixels (default: [0.5, 2.0]).
    pub star_radius: [f32; 2],
    /// Star twinkle speed range (default: [0.001, 0.006]).
    pub twinkle_speed: [f32; 2],
    /// Radius of the gradient core disc (default: 30).
    pub core_radius: f32,
    /// Inner radius of the soft core glow (default: 20).
    pub glow_inner: f32,
    /// Outer radius of the soft core glow (default: 80).
    pub glow_outer: f32,
    /// Text drawn on the core, e.g. initials.
    pub core_label: Option<String>,
    /// Core label font size in pixels (default: 12).
    pub label_font_px: f32,
    /// Icon side length in pixels (default: 20).
    pub icon_size: f32,
    /// Gap between an item's disc and its icon (default: 6).
    pub icon_offset: f32,
    /// Starfield seed. Random per mount when absent.
    pub seed: Option<u64>,
    /// Built-in item list (default: planets).
    pub preset: Preset,
    /// Custom item list. Overrides `preset` when present.
    pub items: Option<Vec<OrbitItem>>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let stars = StarfieldParams::default();
        Self {
            star_count: stars.count,
            star_radius: stars.radius,
            twinkle_speed: stars.speed,
            core_radius: 30.0,
            glow_inner: 20.0,
            glow_outer: 80.0,
            core_label: None,
            label_font_px: 12.0,
            icon_size: 20.0,
            icon_offset: 6.0,
            seed: None,
            preset: Preset::Planets,
            items: None,
        }
    }
}

impl BackgroundConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The orbit items for one mount: the custom list if given, else the preset.
    pub fn orbit_items(&self) -> Vec<OrbitItem> {
        match &self.items {
            Some(items) => items.clone(),
            None => self.preset.items(),
        }
    }

    /// Starfield parameters. A `star_count` above [`MAX_STARS`] is clamped.
    pub fn starfield(&self) -> StarfieldParams {
        let count = if self.star_count > MAX_STARS {
            log::warn!("orbit: star_count {} too large, using {MAX_STARS}", self.star_count);
            MAX_STARS
        } else {
            self.star_count
        };
        StarfieldParams {
            count,
            radius: self.star_radius,
            speed: self.twinkle_speed,
        }
    }
}
