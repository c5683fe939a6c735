use glam::Vec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::Viewport;
use crate::assets::icons::IconCache;
use crate::components::orbit_item::OrbitItem;
use crate::components::star::{generate_starfield, Star};
use crate::core::clock::FrameClock;
use crate::core::rng::Rng;
use crate::renderer::surface::Surface;
use crate::systems::frame::{draw_frame, FrameView};
use crate::theme::{Palette, Theme};

/// State of one mounted orbit background.
///
/// Star and item counts are fixed for the lifetime of the value. Between
/// frames only the clock moves; a resize only changes the center used by
/// later frames; a theme change restarts the animation.
pub struct OrbitBackground {
    config: BackgroundConfig,
    viewport: Viewport,
    theme: Theme,
    palette: Palette,
    rng: Rng,
    stars: Vec<Star>,
    items: Vec<OrbitItem>,
    clock: FrameClock,
}

impl OrbitBackground {
    /// Mount: scatter the starfield over `viewport` and fix the item list.
    ///
    /// `seed` is used when the config doesn't pin one.
    pub fn new(config: BackgroundConfig, viewport: Viewport, theme: Theme, seed: u64) -> Self {
        let mut rng = Rng::new(config.seed.unwrap_or(seed));
        let stars = generate_starfield(&mut rng, viewport, &config.starfield());
        let items = config.orbit_items();
        log::debug!(
            "orbit background: {} stars, {} items, {}x{}, dark={}",
            stars.len(),
            items.len(),
            viewport.width,
            viewport.height,
            theme.dark,
        );
        Self {
            palette: theme.palette(),
            config,
            viewport,
            theme,
            rng,
            stars,
            items,
            clock: FrameClock::new(),
        }
    }

    /// Surface dimensions changed. Stars keep their positions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Switch theme. A real change regenerates the stars and resets the clock;
    /// the item list is untouched. Returns whether anything changed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }
        self.theme = theme;
        self.palette = theme.palette();
        self.stars = generate_starfield(&mut self.rng, self.viewport, &self.config.starfield());
        self.clock.reset();
        log::debug!("orbit background: theme changed, dark={}", theme.dark);
        true
    }

    /// Draw the current frame, then advance the clock.
    ///
    /// The clock advances even when the surface rejects a call, so a bad
    /// frame doesn't freeze the animation.
    pub fn draw<S: Surface>(&mut self, surface: &mut S, icons: &IconCache<S::Icon>) -> Result<(), S::Error> {
        let view = FrameView {
            time: self.clock.time(),
            viewport: self.viewport,
            palette: &self.palette,
            config: &self.config,
            stars: &self.stars,
            items: &self.items,
        };
        let result = draw_frame(surface, &view, icons);
        self.clock.advance();
        result
    }

    /// Current center of the surface.
    pub fn center(&self) -> Vec2 {
        self.viewport.center()
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn items(&self) -> &[OrbitItem] {
        &self.items
    }
}
