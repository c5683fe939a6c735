//! Canvas2D implementation of the engine's drawing surface.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Fallible context calls propagate `JsValue` errors; the runner logs them.

use std::f64::consts::TAU;

use glam::Vec2;
use orbit_engine::{Color, Fill, Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::MountError;

/// Opacity of the whole background layer.
const LAYER_OPACITY: &str = "0.6";

/// Canvas2D-backed [`Surface`].
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Wrap `canvas`, acquiring its 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Pin the canvas behind page content: fixed, full-viewport,
    /// dimmed, and transparent to pointer input.
    pub fn apply_layer_style(&self) {
        let style = self.canvas.style();
        for (prop, value) in [
            ("position", "fixed"),
            ("inset", "0"),
            ("z-index", "0"),
            ("pointer-events", "none"),
            ("opacity", LAYER_OPACITY),
        ] {
            if let Err(err) = style.set_property(prop, value) {
                log::debug!("orbit: could not set canvas {prop}: {err:?}");
            }
        }
    }

    /// Match the backing store to the viewport.
    pub fn resize(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
    }

    fn gradient(&self, fill: &orbit_engine::RadialGradient) -> Result<CanvasGradient, JsValue> {
        let (x, y) = (fill.center.x as f64, fill.center.y as f64);
        let gradient = self.ctx.create_radial_gradient(
            x,
            y,
            fill.inner_radius.max(0.0) as f64,
            x,
            y,
            fill.outer_radius.max(0.0) as f64,
        )?;
        for stop in &fill.stops {
            gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css())?;
        }
        Ok(gradient)
    }

    fn set_stroke(&self, line_width: f32, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
    }
}

impl Surface for Canvas2dSurface {
    type Error = JsValue;
    type Icon = HtmlImageElement;

    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn clear(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Fill::Radial(gradient) => {
                let gradient = self.gradient(gradient)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.set_stroke(line_width, color);
        self.ctx.stroke();
        Ok(())
    }

    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            rotation as f64,
            0.0,
            TAU,
        )?;
        self.set_stroke(line_width, color);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        center: Vec2,
        font_px: f32,
        color: Color,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("600 {font_px:.0}px sans-serif"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(text, center.x as f64, center.y as f64)
    }

    fn draw_icon(&mut self, icon: &HtmlImageElement, origin: Vec2, size: f32) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            icon,
            origin.x as f64,
            origin.y as f64,
            size as f64,
            size as f64,
        )
    }
}
