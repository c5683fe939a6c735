//! WASM bridge for the orbit background.
//!
//! The page calls `orbit_mount` once its `<canvas>` exists, forwards theme
//! changes with `orbit_set_theme`, and calls `orbit_unmount` on teardown.
//! Only one background is mounted at a time.
//!
//! ```text
//! import init, { orbit_mount, orbit_set_theme, orbit_unmount } from "orbit_web";
//! await init();
//! orbit_mount("orbit-bg", "system", JSON.stringify({ preset: "planets" }));
//! ```

pub mod canvas;
pub mod error;
pub mod host;
pub mod icons;
pub mod runner;

use std::cell::RefCell;

use orbit_engine::BackgroundConfig;
use wasm_bindgen::prelude::*;

pub use error::MountError;
pub use runner::CanvasRunner;

thread_local! {
    static RUNNER: RefCell<Option<CanvasRunner>> = RefCell::new(None);
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Parse the page-supplied config. Empty means defaults; bad JSON is logged
/// and replaced by defaults so the background still shows.
pub fn parse_config(json: &str) -> BackgroundConfig {
    if json.trim().is_empty() {
        return BackgroundConfig::default();
    }
    BackgroundConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("orbit: bad config ({err}), using defaults");
        BackgroundConfig::default()
    })
}

/// Mount the background on the canvas with id `canvas_id`.
///
/// `theme` is "light", "dark" or "system". Returns false (and draws
/// nothing) if the canvas or its 2D context is unavailable.
#[wasm_bindgen]
pub fn orbit_mount(canvas_id: &str, theme: &str, config_json: &str) -> bool {
    init_logging();
    orbit_unmount();

    match CanvasRunner::mount(canvas_id, theme, parse_config(config_json)) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            true
        }
        Err(err) => {
            log::debug!("orbit: not mounted: {err}");
            false
        }
    }
}

/// Forward a theme change. No-op when nothing is mounted.
#[wasm_bindgen]
pub fn orbit_set_theme(theme: &str) {
    RUNNER.with(|cell| {
        if let Some(runner) = cell.borrow().as_ref() {
            runner.set_theme(theme);
        }
    });
}

/// Re-read the window size. The window resize listener already does this;
/// exposed for hosts that change layout without a window resize.
#[wasm_bindgen]
pub fn orbit_resize() {
    RUNNER.with(|cell| {
        if let Some(runner) = cell.borrow().as_ref() {
            runner.resize();
        }
    });
}

/// Current frame counter, or 0 when nothing is mounted.
#[wasm_bindgen]
pub fn orbit_frame() -> f64 {
    RUNNER.with(|cell| cell.borrow().as_ref().map_or(0.0, |r| r.frame() as f64))
}

/// Stop animating and detach listeners.
#[wasm_bindgen]
pub fn orbit_unmount() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    drop(runner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_engine::Preset;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("  "), BackgroundConfig::default());
    }

    #[test]
    fn valid_config_is_used() {
        let config = parse_config(r#"{ "preset": "skills", "core_label": "AD" }"#);
        assert_eq!(config.preset, Preset::Skills);
        assert_eq!(config.core_label.as_deref(), Some("AD"));
    }

    #[test]
    fn broken_config_falls_back_to_default() {
        assert_eq!(parse_config("{ not json"), BackgroundConfig::default());
    }
}
