use std::cell::RefCell;
use std::rc::Rc;

use orbit_engine::{AnimationLoop, BackgroundConfig, OrbitBackground};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::Canvas2dSurface;
use crate::error::MountError;
use crate::host::{self, FrameCallback, RafScheduler};
use crate::icons::IconLoader;

/// Everything one frame callback needs.
struct RunnerState {
    frames: AnimationLoop<RafScheduler>,
    surface: Canvas2dSurface,
    icons: IconLoader,
}

impl RunnerState {
    fn frame(&mut self) {
        self.icons.poll();
        if let Err(err) = self.frames.on_frame(&mut self.surface, self.icons.cache()) {
            log::warn!("orbit: frame {} failed: {err:?}", self.frames.background().frame());
        }
    }

    fn resize(&mut self, window: &Window) {
        let viewport = host::window_viewport(window);
        self.surface.resize(viewport);
        self.frames.resize(viewport);
    }
}

/// A mounted orbit background bound to one `<canvas>`.
///
/// Owns the frame and resize closures. Dropping the runner unmounts it.
pub struct CanvasRunner {
    window: Window,
    state: Rc<RefCell<RunnerState>>,
    frame_callback: FrameCallback,
    resize_callback: Option<Closure<dyn FnMut()>>,
}

impl CanvasRunner {
    /// Mount onto the canvas with id `canvas_id` and start animating.
    pub fn mount(canvas_id: &str, theme: &str, config: BackgroundConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;

        let surface = Canvas2dSurface::new(canvas)?;
        surface.apply_layer_style();
        let viewport = host::window_viewport(&window);
        surface.resize(viewport);

        let theme = host::resolve_theme(&window, theme);
        let background = OrbitBackground::new(config, viewport, theme, host::random_seed());

        let mut icons = IconLoader::new();
        icons.load_items(background.items());

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window.clone(), frame_callback.clone());
        let state = Rc::new(RefCell::new(RunnerState {
            frames: AnimationLoop::new(background, scheduler),
            surface,
            icons,
        }));

        let weak = Rc::downgrade(&state);
        *frame_callback.borrow_mut() = Some(Closure::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().frame();
            }
        }));

        let weak = Rc::downgrade(&state);
        let resize_window = window.clone();
        let resize_callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().resize(&resize_window);
            }
        });
        window
            .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
            .map_err(|_| MountError::Listener)?;

        state.borrow_mut().frames.start();
        log::debug!("orbit: mounted on #{canvas_id}");

        Ok(Self {
            window,
            state,
            frame_callback,
            resize_callback: Some(resize_callback),
        })
    }

    /// Apply a new theme setting. Restarts the animation if the resolved
    /// theme actually changed.
    pub fn set_theme(&self, mode: &str) {
        let theme = host::resolve_theme(&self.window, mode);
        self.state.borrow_mut().frames.set_theme(theme);
    }

    /// Re-read the window size, for hosts that resize the canvas themselves.
    pub fn resize(&self) {
        self.state.borrow_mut().resize(&self.window);
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.state.borrow().frames.background().frame()
    }

    fn unmount(&mut self) {
        self.state.borrow_mut().frames.stop();
        if let Some(callback) = self.resize_callback.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        }
        self.frame_callback.borrow_mut().take();
    }
}

impl Drop for CanvasRunner {
    fn drop(&mut self) {
        self.unmount();
        log::debug!("orbit: unmounted");
    }
}
