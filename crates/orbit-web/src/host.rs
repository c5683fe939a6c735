//! Browser window plumbing: viewport size, color-scheme preference,
//! seeding, and the `requestAnimationFrame` scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use orbit_engine::{FrameScheduler, Theme, ThemeMode, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Current inner size of the window in CSS pixels.
pub fn window_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Whether the host prefers a dark color scheme.
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Resolve a theme setting string ("light" / "dark" / "system").
/// Unknown values fall back to the system preference.
pub fn resolve_theme(window: &Window, mode: &str) -> Theme {
    let mode = mode.parse::<ThemeMode>().unwrap_or_else(|err| {
        log::warn!("orbit: {err}, following system preference");
        ThemeMode::System
    });
    mode.resolve(prefers_dark(window))
}

/// Fresh starfield seed from the JS PRNG.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Shared slot holding the per-frame callback.
///
/// Filled once the runner state exists; the callback can't be built first
/// because it needs a handle to that state.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| log::warn!("orbit: requestAnimationFrame failed: {err:?}"))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("orbit: cancelAnimationFrame({handle}) failed: {err:?}");
        }
    }
}
