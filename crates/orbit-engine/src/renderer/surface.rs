//! Drawing surface contract.
//!
//! The frame routine only speaks in these primitives. The web bridge
//! implements them on a Canvas2D context; tests use the recording
//! [`CommandBuffer`](super::commands::CommandBuffer).

use glam::Vec2;

use crate::components::color::Color;

/// One color stop of a gradient. `offset` runs from 0.0 (inner circle) to 1.0 (outer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient between two concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius: f32, outer_radius: f32, stops: &[GradientStop]) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops: stops.to_vec(),
        }
    }
}

/// How a closed shape is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Radial(RadialGradient),
}

/// Immediate-mode 2D drawing target.
///
/// Every call may fail (a Canvas2D context can reject arguments); failures
/// abort the current frame only.
pub trait Surface {
    /// Backend error type (`JsValue` for Canvas2D).
    type Error;
    /// A decoded image the backend can blit.
    type Icon;

    /// Backend identifier (e.g. "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// Clear `width × height` pixels from the origin.
    fn clear(&mut self, width: f32, height: f32) -> Result<(), Self::Error>;

    /// Fill a full circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) -> Result<(), Self::Error>;

    /// Outline a full circle.
    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Outline a full ellipse with radii `radii`, rotated by `rotation` radians.
    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Draw `text` centered on `center`.
    fn fill_text(
        &mut self,
        text: &str,
        center: Vec2,
        font_px: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Draw `icon` scaled into the square at `origin` (top-left) with side `size`.
    fn draw_icon(&mut self, icon: &Self::Icon, origin: Vec2, size: f32) -> Result<(), Self::Error>;
}
