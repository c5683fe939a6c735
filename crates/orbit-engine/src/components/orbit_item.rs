use glam::Vec2;
use serde::Deserialize;

use crate::components::color::Color;

/// One node revolving around the core at a fixed radius and constant speed.
///
/// Items are immutable for the lifetime of a mount; only the angle derived
/// from the frame counter changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrbitItem {
    /// Display name. Also the key for the item's icon in the icon cache.
    pub name: String,
    /// Distance from the core in pixels.
    pub orbit_radius: f32,
    /// Disc radius in pixels.
    pub size: f32,
    pub color: Color,
    /// Radians per frame.
    pub angular_speed: f32,
    /// Draw a tilted ring around the item.
    #[serde(default)]
    pub ring: bool,
    /// Image source for an icon drawn beside the item.
    #[serde(default)]
    pub icon: Option<String>,
}

impl OrbitItem {
    pub fn new(name: &str, orbit_radius: f32, size: f32, color: Color, angular_speed: f32) -> Self {
        Self {
            name: name.to_string(),
            orbit_radius,
            size,
            color,
            angular_speed,
            ring: false,
            icon: None,
        }
    }

    pub fn with_ring(mut self) -> Self {
        self.ring = true;
        self
    }

    pub fn with_icon(mut self, src: &str) -> Self {
        self.icon = Some(src.to_string());
        self
    }

    /// Angle in radians at `time` frames. Unbounded; trig wraps it.
    pub fn angle(&self, time: f64) -> f64 {
        time * self.angular_speed as f64
    }

    /// Position on the orbit circle around `center` at `time` frames.
    pub fn position(&self, center: Vec2, time: f64) -> Vec2 {
        let angle = self.angle(time);
        let r = self.orbit_radius as f64;
        Vec2::new(
            center.x + (angle.cos() * r) as f32,
            center.y + (angle.sin() * r) as f32,
        )
    }
}
