pub mod commands;
pub mod surface;

pub use commands::{CommandBuffer, DrawCommand};
pub use surface::{Fill, GradientStop, RadialGradient, Surface};
