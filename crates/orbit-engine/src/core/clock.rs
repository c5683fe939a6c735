/// Frame counter that drives every periodic motion in the background.
///
/// Advanced exactly once per rendered frame. There is no wall-clock
/// component: a slow display simply animates slower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    /// Number of frames rendered since the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The frame counter as a float, for trigonometry.
    pub fn time(&self) -> f64 {
        self.frame as f64
    }

    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }

    /// Back to frame zero (on mount and on theme change).
    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.time(), 0.0);
    }

    #[test]
    fn advances_one_per_frame() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            clock.advance();
        }
        assert_eq!(clock.frame(), 5);
        assert_eq!(clock.time(), 5.0);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut clock = FrameClock::new();
        clock.advance();
        clock.advance();
        clock.reset();
        assert_eq!(clock.frame(), 0);
    }
}
