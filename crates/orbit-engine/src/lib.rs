pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod renderer;
pub mod systems;
pub mod theme;

// Re-export key types at crate root for convenience
pub use api::background::OrbitBackground;
pub use api::config::BackgroundConfig;
pub use api::types::Viewport;
pub use assets::icons::{IconCache, IconState};
pub use components::color::Color;
pub use components::orbit_item::OrbitItem;
pub use components::presets::{planets, skills, Preset};
pub use components::star::{generate_starfield, Star, StarfieldParams};
pub use crate::core::clock::FrameClock;
pub use crate::core::frame_loop::{AnimationLoop, FrameScheduler, LoopState};
pub use crate::core::rng::Rng;
pub use renderer::{CommandBuffer, DrawCommand, Fill, GradientStop, RadialGradient, Surface};
pub use systems::frame::{draw_frame, FrameView};
pub use theme::{Palette, Theme, ThemeMode};
