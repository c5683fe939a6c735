//! Per-frame composition.
//!
//! Pure function of (time, viewport, palette, stars, items, icon readiness).
//! Draw order, back to front: stars, core, glow, label, then per item its
//! orbit path, ring, disc, glow and icon.

use std::f32::consts::FRAC_PI_6;

use glam::Vec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::Viewport;
use crate::assets::icons::IconCache;
use crate::components::orbit_item::OrbitItem;
use crate::components::star::Star;
use crate::renderer::surface::{Fill, GradientStop, RadialGradient, Surface};
use crate::theme::Palette;

/// Orbit path stroke width.
pub const ORBIT_LINE_WIDTH: f32 = 1.0;
/// Ring ellipse radii as multiples of the item size.
pub const RING_RADII: (f32, f32) = (2.2, 0.6);
pub const RING_ROTATION: f32 = FRAC_PI_6;
pub const RING_LINE_WIDTH: f32 = 2.0;
pub const RING_ALPHA: f32 = 0.4;
/// Item glow runs from `GLOW_INNER * size` to `GLOW_OUTER * size`.
pub const ITEM_GLOW_INNER: f32 = 0.5;
pub const ITEM_GLOW_OUTER: f32 = 2.5;
/// Item glow starts at 0x40 alpha.
pub const ITEM_GLOW_ALPHA: f32 = 64.0 / 255.0;

/// Everything a frame reads. Borrowed from the background for one draw.
pub struct FrameView<'a> {
    pub time: f64,
    pub viewport: Viewport,
    pub palette: &'a Palette,
    pub config: &'a BackgroundConfig,
    pub stars: &'a [Star],
    pub items: &'a [OrbitItem],
}

/// Draw one complete frame onto `surface`. Draws nothing into a zero-area viewport.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    view: &FrameView<'_>,
    icons: &IconCache<S::Icon>,
) -> Result<(), S::Error> {
    if view.viewport.is_empty() {
        return Ok(());
    }
    surface.clear(view.viewport.width, view.viewport.height)?;

    draw_stars(surface, view)?;

    let center = view.viewport.center();
    draw_core(surface, view, center)?;

    for item in view.items {
        draw_item(surface, view, item, center, icons)?;
    }
    Ok(())
}

fn draw_stars<S: Surface>(surface: &mut S, view: &FrameView<'_>) -> Result<(), S::Error> {
    let palette = view.palette;
    for star in view.stars {
        let opacity = star.opacity(view.time, palette.star_dimming);
        let color = palette.star_color.with_alpha(opacity.clamp(0.0, 1.0));
        surface.fill_circle(star.pos, star.radius, &Fill::Solid(color))?;
    }
    Ok(())
}

fn draw_core<S: Surface>(surface: &mut S, view: &FrameView<'_>, center: Vec2) -> Result<(), S::Error> {
    let config = view.config;
    let palette = view.palette;

    let core = RadialGradient::new(center, 0.0, config.core_radius, &palette.core_stops);
    surface.fill_circle(center, config.core_radius, &Fill::Radial(core))?;

    let glow = RadialGradient::new(
        center,
        config.glow_inner,
        config.glow_outer,
        &[
            GradientStop::new(0.0, palette.glow_color),
            GradientStop::new(1.0, palette.glow_color.with_alpha(0.0)),
        ],
    );
    surface.fill_circle(center, config.glow_outer, &Fill::Radial(glow))?;

    if let Some(label) = config.core_label.as_deref() {
        surface.fill_text(label, center, config.label_font_px, palette.label_color)?;
    }
    Ok(())
}

fn draw_item<S: Surface>(
    surface: &mut S,
    view: &FrameView<'_>,
    item: &OrbitItem,
    center: Vec2,
    icons: &IconCache<S::Icon>,
) -> Result<(), S::Error> {
    surface.stroke_circle(center, item.orbit_radius, ORBIT_LINE_WIDTH, view.palette.orbit_stroke)?;

    let pos = item.position(center, view.time);

    if item.ring {
        surface.stroke_ellipse(
            pos,
            Vec2::new(item.size * RING_RADII.0, item.size * RING_RADII.1),
            RING_ROTATION,
            RING_LINE_WIDTH,
            item.color.with_alpha(RING_ALPHA),
        )?;
    }

    surface.fill_circle(pos, item.size, &Fill::Solid(item.color))?;

    let glow = RadialGradient::new(
        pos,
        item.size * ITEM_GLOW_INNER,
        item.size * ITEM_GLOW_OUTER,
        &[
            GradientStop::new(0.0, item.color.with_alpha(ITEM_GLOW_ALPHA)),
            GradientStop::new(1.0, item.color.with_alpha(0.0)),
        ],
    );
    surface.fill_circle(pos, item.size * ITEM_GLOW_OUTER, &Fill::Radial(glow))?;

    if item.icon.is_some() {
        if let Some(icon) = icons.ready(&item.name) {
            let size = view.config.icon_size;
            let origin = Vec2::new(
                pos.x + item.size + view.config.icon_offset,
                pos.y - size * 0.5,
            );
            surface.draw_icon(icon, origin, size)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Color;
    use crate::components::presets;
    use crate::renderer::commands::{CommandBuffer, DrawCommand};
    use crate::theme::Theme;

    fn render(
        items: &[OrbitItem],
        stars: &[Star],
        config: &BackgroundConfig,
        time: f64,
        icons: &IconCache<String>,
    ) -> CommandBuffer {
        let palette = Theme::DARK.palette();
        let view = FrameView {
            time,
            viewport: Viewport::new(1000.0, 800.0),
            palette: &palette,
            config,
            stars,
            items,
        };
        let mut buf = CommandBuffer::new();
        draw_frame(&mut buf, &view, icons).unwrap();
        buf
    }

    #[test]
    fn frame_starts_with_full_clear() {
        let buf = render(&[], &[], &BackgroundConfig::default(), 0.0, &IconCache::new());
        assert_eq!(buf.commands()[0], DrawCommand::Clear { width: 1000.0, height: 800.0 });
        // clear + core + glow
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn zero_area_viewport_draws_nothing() {
        let palette = Theme::DARK.palette();
        let config = BackgroundConfig::default();
        let items = presets::planets();
        let view = FrameView {
            time: 5.0,
            viewport: Viewport::new(0.0, 800.0),
            palette: &palette,
            config: &config,
            stars: &[],
            items: &items,
        };
        let mut buf = CommandBuffer::new();
        draw_frame(&mut buf, &view, &IconCache::new()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn one_orbit_path_per_item_around_center() {
        let items = presets::planets();
        let buf = render(&items, &[], &BackgroundConfig::default(), 42.0, &IconCache::new());
        let paths: Vec<_> = buf.orbit_paths().collect();
        assert_eq!(paths.len(), items.len());
        for ((center, radius), item) in paths.iter().zip(&items) {
            assert_eq!(*center, Vec2::new(500.0, 400.0));
            assert_eq!(*radius, item.orbit_radius);
        }
    }

    #[test]
    fn only_ringed_items_get_an_ellipse() {
        let items = presets::planets();
        let buf = render(&items, &[], &BackgroundConfig::default(), 0.0, &IconCache::new());
        let rings: Vec<_> = buf
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeEllipse { radii, rotation, .. } => Some((*radii, *rotation)),
                _ => None,
            })
            .collect();
        assert_eq!(rings.len(), 1);
        let (radii, rotation) = rings[0];
        assert!((radii.x - 12.0 * 2.2).abs() < 1e-4);
        assert!((radii.y - 12.0 * 0.6).abs() < 1e-4);
        assert_eq!(rotation, FRAC_PI_6);
    }

    #[test]
    fn item_discs_sit_on_their_orbits() {
        let items = presets::planets();
        let center = Vec2::new(500.0, 400.0);
        for t in [0.0, 17.0, 9_999.0] {
            let buf = render(&items, &[], &BackgroundConfig::default(), t, &IconCache::new());
            let discs: Vec<_> = buf
                .commands()
                .iter()
                .filter_map(|c| match c {
                    DrawCommand::FillCircle { center: pos, radius, fill: Fill::Solid(_) } => {
                        Some((*pos, *radius))
                    }
                    _ => None,
                })
                .collect();
            assert_eq!(discs.len(), items.len());
            for ((pos, radius), item) in discs.iter().zip(&items) {
                assert_eq!(*radius, item.size);
                assert!((pos.distance(center) - item.orbit_radius).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn stars_use_clamped_twinkle_alpha() {
        let star = Star { pos: Vec2::new(3.0, 4.0), radius: 1.5, speed: 0.005, phase: 0.0 };
        // sin(3π/2) = -1 → raw opacity -0.4
        let t = 1.5 * std::f64::consts::PI / 0.5;
        let buf = render(&[], &[star], &BackgroundConfig::default(), t, &IconCache::new());
        match &buf.commands()[1] {
            DrawCommand::FillCircle { center, radius, fill: Fill::Solid(color) } => {
                assert_eq!(*center, star.pos);
                assert_eq!(*radius, 1.5);
                assert_eq!(color.a, 0.0);
                assert_eq!((color.r, color.g, color.b), (255, 255, 255));
            }
            other => panic!("Expected star fill, got {:?}", other),
        }
    }

    #[test]
    fn label_drawn_only_when_configured() {
        let config = BackgroundConfig {
            core_label: Some("AD".to_string()),
            ..Default::default()
        };
        let buf = render(&[], &[], &config, 0.0, &IconCache::new());
        assert!(buf.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, center, .. } if text == "AD" && *center == Vec2::new(500.0, 400.0)
        )));
    }

    #[test]
    fn icons_drawn_only_once_ready() {
        let items = vec![
            OrbitItem::new("Git", 100.0, 8.0, Color::rgb(0xf0, 0x50, 0x32), 0.01).with_icon("git.svg"),
            OrbitItem::new("AWS", 200.0, 10.0, Color::rgb(0xff, 0x99, 0x00), 0.01).with_icon("aws.svg"),
        ];
        let config = BackgroundConfig::default();
        let mut icons = IconCache::new();
        icons.begin("Git");
        icons.begin("AWS");

        let count_icons = |buf: &CommandBuffer| {
            buf.commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Icon { .. }))
                .count()
        };

        assert_eq!(count_icons(&render(&items, &[], &config, 0.0, &icons)), 0);

        icons.mark_ready("Git", "git-image".to_string());
        icons.mark_failed("AWS");
        let buf = render(&items, &[], &config, 0.0, &icons);
        assert_eq!(count_icons(&buf), 1);
        let icon = buf.commands().iter().find_map(|c| match c {
            DrawCommand::Icon { name, origin, size } => Some((name.clone(), *origin, *size)),
            _ => None,
        });
        // Git at t=0 sits at (600, 400); icon goes to its right.
        assert_eq!(icon, Some(("git-image".to_string(), Vec2::new(614.0, 390.0), 20.0)));
    }
}
