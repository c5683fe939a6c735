//! Self-rescheduling frame loop.
//!
//! The host owns the actual display-refresh callback (`requestAnimationFrame`
//! in the browser). This module only tracks whether a frame is pending and
//! makes sure nothing is drawn after [`AnimationLoop::stop`].

use std::fmt::Debug;

use crate::api::background::OrbitBackground;
use crate::api::types::Viewport;
use crate::assets::icons::IconCache;
use crate::renderer::surface::Surface;
use crate::theme::Theme;

/// Host hook for "call me on the next display refresh".
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + Debug;

    /// Ask for one callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Cancel a callback that hasn't fired yet.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Drives an [`OrbitBackground`] one frame per host callback.
pub struct AnimationLoop<S: FrameScheduler> {
    background: OrbitBackground,
    scheduler: S,
    pending: Option<S::Handle>,
    state: LoopState,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(background: OrbitBackground, scheduler: S) -> Self {
        Self {
            background,
            scheduler,
            pending: None,
            state: LoopState::Idle,
        }
    }

    /// Schedule the first frame. No-op unless idle.
    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        self.state = LoopState::Running;
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("orbit loop: host refused the first frame");
        }
    }

    /// Host callback: draw one frame and schedule the next.
    ///
    /// After `stop` this does nothing and touches neither surface nor scheduler.
    pub fn on_frame<Sf: Surface>(
        &mut self,
        surface: &mut Sf,
        icons: &IconCache<Sf::Icon>,
    ) -> Result<(), Sf::Error> {
        if self.state != LoopState::Running {
            return Ok(());
        }
        self.pending = None;
        let result = self.background.draw(surface, icons);
        self.pending = self.scheduler.request_frame();
        result
    }

    /// Teardown: cancel the pending frame. Final; the loop can't be restarted.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::Stopped {
            log::debug!("orbit loop: stopped at frame {}", self.background.frame());
        }
        self.state = LoopState::Stopped;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.background.resize(viewport);
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.background.set_theme(theme)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn background(&self) -> &OrbitBackground {
        &self.background
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
