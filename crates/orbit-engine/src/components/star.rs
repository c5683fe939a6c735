//! Background starfield.
//!
//! Stars are scattered once per (re)initialization and never move; only
//! their opacity changes, following a sinusoid of the frame counter.

use glam::Vec2;

use crate::api::types::Viewport;
use crate::core::rng::Rng;

/// Sinusoid parameters: `opacity = BASE + SWING * sin(...)`.
pub const TWINKLE_BASE: f32 = 0.3;
pub const TWINKLE_SWING: f32 = 0.7;
/// Star speeds are tiny per-frame rates; this scales them into radians per frame.
pub const TWINKLE_RATE_SCALE: f64 = 100.0;

/// One twinkling star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Twinkle speed (before `TWINKLE_RATE_SCALE`).
    pub speed: f32,
    /// Phase offset in radians, in [0, 2π).
    pub phase: f32,
}

impl Star {
    /// Raw twinkle opacity at `time` frames, scaled by the theme's dimming factor.
    ///
    /// The value lies in `[dimming * -0.4, dimming * 1.0]`; surfaces clamp
    /// negative values to fully transparent.
    pub fn opacity(&self, time: f64, dimming: f32) -> f32 {
        let angle = time * self.speed as f64 * TWINKLE_RATE_SCALE + self.phase as f64;
        dimming * (TWINKLE_BASE + TWINKLE_SWING * angle.sin() as f32)
    }

    /// Number of frames after which the twinkle repeats.
    pub fn period(&self) -> f64 {
        std::f64::consts::TAU / (self.speed as f64 * TWINKLE_RATE_SCALE)
    }
}

/// Generation parameters for a starfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldParams {
    pub count: usize,
    /// Radius range `[min, max]` in pixels.
    pub radius: [f32; 2],
    /// Twinkle speed range `[min, max]`.
    pub speed: [f32; 2],
}

/// Upper bound on the star count accepted from config.
pub const MAX_STARS: usize = 2_000;

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 200,
            radius: [0.5, 2.0],
            speed: [0.001, 0.006],
        }
    }
}

/// Scatter `params.count` stars uniformly over the viewport.
pub fn generate_starfield(rng: &mut Rng, viewport: Viewport, params: &StarfieldParams) -> Vec<Star> {
    let mut stars = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let x = rng.next_f32() * viewport.width;
        let y = rng.next_f32() * viewport.height;
        stars.push(Star {
            pos: Vec2::new(x, y),
            radius: rng.range(params.radius[0], params.radius[1]),
            speed: rng.range(params.speed[0], params.speed[1]),
            phase: rng.next_f32() * std::f32::consts::TAU,
        });
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> Vec<Star> {
        let mut rng = Rng::new(seed);
        generate_starfield(&mut rng, Viewport::new(800.0, 600.0), &StarfieldParams::default())
    }

    #[test]
    fn seeded_field_has_200_stars_in_radius_range() {
        let stars = field(1234);
        assert_eq!(stars.len(), 200);
        for s in &stars {
            assert!(s.radius >= 0.5 && s.radius <= 2.0, "radius was {}", s.radius);
        }
    }

    #[test]
    fn stars_land_inside_viewport() {
        for s in field(99) {
            assert!(s.pos.x >= 0.0 && s.pos.x <= 800.0);
            assert!(s.pos.y >= 0.0 && s.pos.y <= 600.0);
            assert!(s.speed >= 0.001 && s.speed <= 0.006);
            assert!(s.phase >= 0.0 && s.phase <= std::f32::consts::TAU);
        }
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(field(5), field(5));
        assert_ne!(field(5), field(6));
    }

    #[test]
    fn opacity_stays_within_dimmed_bounds() {
        let star = Star { pos: Vec2::ZERO, radius: 1.0, speed: 0.0037, phase: 1.1 };
        for dimming in [1.0_f32, 0.35] {
            let lo = dimming * (TWINKLE_BASE - TWINKLE_SWING);
            let hi = dimming * (TWINKLE_BASE + TWINKLE_SWING);
            for t in 0..5_000 {
                let o = star.opacity(t as f64, dimming);
                assert!(o >= lo - 1e-5 && o <= hi + 1e-5, "opacity {} at t={}", o, t);
            }
        }
    }

    #[test]
    fn opacity_repeats_with_period() {
        let star = Star { pos: Vec2::ZERO, radius: 1.0, speed: 0.002, phase: 0.4 };
        let period = star.period();
        assert!((period - std::f64::consts::TAU / 0.2).abs() < 1e-3);
        for t in [0.0, 3.0, 17.5, 250.0] {
            let a = star.opacity(t, 1.0);
            let b = star.opacity(t + period, 1.0);
            assert!((a - b).abs() < 1e-4, "t={} a={} b={}", t, a, b);
        }
    }
}
