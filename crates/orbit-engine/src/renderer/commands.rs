use std::convert::Infallible;

use glam::Vec2;

use super::surface::{Fill, Surface};
use crate::components::color::Color;

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillCircle { center: Vec2, radius: f32, fill: Fill },
    StrokeCircle { center: Vec2, radius: f32, line_width: f32, color: Color },
    StrokeEllipse { center: Vec2, radii: Vec2, rotation: f32, line_width: f32, color: Color },
    Text { text: String, center: Vec2, font_px: f32, color: Color },
    Icon { name: String, origin: Vec2, size: f32 },
}

/// Surface that records commands instead of rasterizing them.
///
/// Icons are identified by name. Used by tests and for inspecting a frame
/// without a browser.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Iterate only stroked circles (orbit paths).
    pub fn orbit_paths(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeCircle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }
}

impl Surface for CommandBuffer {
    type Error = Infallible;
    type Icon = String;

    fn backend(&self) -> &'static str {
        "recording"
    }

    fn clear(&mut self, width: f32, height: f32) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            fill: fill.clone(),
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color,
        });
        Ok(())
    }

    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::StrokeEllipse {
            center,
            radii,
            rotation,
            line_width,
            color,
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        center: Vec2,
        font_px: f32,
        color: Color,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            font_px,
            color,
        });
        Ok(())
    }

    fn draw_icon(&mut self, icon: &String, origin: Vec2, size: f32) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Icon {
            name: icon.clone(),
            origin,
            size,
        });
        Ok(())
    }
}
