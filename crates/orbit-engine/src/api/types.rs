use glam::Vec2;

/// Drawing surface size in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Geometric center. Orbits are laid out around this point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether there is anything to draw into.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_half_size() {
        let vp = Viewport::new(1920.0, 1080.0);
        assert_eq!(vp.center(), Vec2::new(960.0, 540.0));
    }

    #[test]
    fn zero_area_is_empty() {
        assert!(Viewport::new(0.0, 600.0).is_empty());
        assert!(!Viewport::new(1.0, 1.0).is_empty());
    }
}
