//! Light/dark theming.
//!
//! The host resolves its theme provider's setting into a [`Theme`] and hands
//! it to the background explicitly. Everything that differs between the two
//! looks lives in [`Palette`].

use std::str::FromStr;

use serde::Deserialize;

use crate::components::color::Color;
use crate::renderer::surface::GradientStop;

/// Theme setting as the page's theme provider reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host's `prefers-color-scheme`.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolve against the host color-scheme preference.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            ThemeMode::Light => Theme::LIGHT,
            ThemeMode::Dark => Theme::DARK,
            ThemeMode::System => Theme { dark: prefers_dark },
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other:?}")),
        }
    }
}

/// Resolved theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub const LIGHT: Self = Self { dark: false };
    pub const DARK: Self = Self { dark: true };

    pub fn palette(self) -> Palette {
        if self.dark {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

/// Every theme-dependent color and factor used by the frame routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Multiplier on star twinkle opacity.
    pub star_dimming: f32,
    pub star_color: Color,
    /// Core disc gradient, center outwards.
    pub core_stops: [GradientStop; 4],
    /// Inner color of the soft glow around the core; fades to transparent.
    pub glow_color: Color,
    pub orbit_stroke: Color,
    pub label_color: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            star_dimming: 1.0,
            star_color: Color::WHITE,
            core_stops: [
                GradientStop::new(0.0, Color::rgb(0xff, 0xf7, 0xe0)),
                GradientStop::new(0.3, Color::rgb(0xff, 0xd2, 0x4d)),
                GradientStop::new(0.7, Color::rgb(0xff, 0x8c, 0x00)),
                GradientStop::new(1.0, Color::rgba(0xff, 0x8c, 0x00, 0.0)),
            ],
            glow_color: Color::rgba(255, 200, 50, 0.15),
            orbit_stroke: Color::rgba(255, 255, 255, 0.06),
            label_color: Color::rgba(255, 255, 255, 0.85),
        }
    }

    /// Stars are slate dots on a pale page, so they are dimmed hard.
    pub fn light() -> Self {
        Self {
            star_dimming: 0.35,
            star_color: Color::rgb(0x47, 0x55, 0x69),
            core_stops: [
                GradientStop::new(0.0, Color::rgb(0xff, 0xfb, 0xeb)),
                GradientStop::new(0.3, Color::rgb(0xfb, 0xbf, 0x24)),
                GradientStop::new(0.7, Color::rgb(0xf9, 0x73, 0x16)),
                GradientStop::new(1.0, Color::rgba(0xf9, 0x73, 0x16, 0.0)),
            ],
            glow_color: Color::rgba(249, 115, 22, 0.12),
            orbit_stroke: Color::rgba(15, 23, 42, 0.08),
            label_color: Color::rgba(15, 23, 42, 0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_follows_preference() {
        assert_eq!(ThemeMode::System.resolve(true), Theme::DARK);
        assert_eq!(ThemeMode::System.resolve(false), Theme::LIGHT);
        assert_eq!(ThemeMode::Light.resolve(true), Theme::LIGHT);
        assert_eq!(ThemeMode::Dark.resolve(false), Theme::DARK);
    }

    #[test]
    fn parses_mode_strings() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn palettes_differ_only_in_themed_fields() {
        let dark = Theme::DARK.palette();
        let light = Theme::LIGHT.palette();
        assert!(light.star_dimming < dark.star_dimming);
        assert_ne!(dark.core_stops, light.core_stops);
        assert_ne!(dark.orbit_stroke, light.orbit_stroke);
        assert_ne!(dark.label_color, light.label_color);
    }

    #[test]
    fn core_gradient_ends_transparent() {
        for palette in [Palette::dark(), Palette::light()] {
            assert_eq!(palette.core_stops[0].offset, 0.0);
            assert_eq!(palette.core_stops[3].offset, 1.0);
            assert_eq!(palette.core_stops[3].color.a, 0.0);
        }
    }
}
