use std::cell::Cell;
use std::rc::Rc;

use orbit_engine::{IconCache, OrbitItem};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Outcome slot written by an image's `load` / `error` handlers.
///
/// `None` while the request is in flight. The handlers are the source of
/// truth; `naturalWidth` is unreliable for SVGs without intrinsic size.
#[derive(Clone, Default)]
pub struct LoadSignal(Rc<Cell<Option<bool>>>);

impl LoadSignal {
    pub fn loaded(&self) {
        self.0.set(Some(true));
    }

    pub fn errored(&self) {
        self.0.set(Some(false));
    }

    pub fn outcome(&self) -> Option<bool> {
        self.0.get()
    }
}

/// Record a settled load in the cache. Returns false while still pending.
fn settle<I>(cache: &mut IconCache<I>, name: &str, icon: &I, signal: &LoadSignal) -> bool
where
    I: Clone,
{
    match signal.outcome() {
        None => false,
        Some(true) => {
            cache.mark_ready(name, icon.clone());
            true
        }
        Some(false) => {
            log::debug!("orbit: icon for {name} failed to load");
            cache.mark_failed(name);
            true
        }
    }
}

struct PendingIcon {
    name: String,
    img: HtmlImageElement,
    signal: LoadSignal,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

/// Starts icon image loads and promotes them into an [`IconCache`] once the
/// browser fires `load` or `error`.
///
/// Polling is non-blocking and happens once per frame before drawing; the
/// frame itself only reads the cache.
pub struct IconLoader {
    cache: IconCache<HtmlImageElement>,
    in_flight: Vec<PendingIcon>,
}

impl IconLoader {
    pub fn new() -> Self {
        Self {
            cache: IconCache::new(),
            in_flight: Vec::new(),
        }
    }

    /// Start loading every item icon not already known to the cache.
    pub fn load_items(&mut self, items: &[OrbitItem]) {
        for item in items {
            if let Some(src) = item.icon.as_deref() {
                self.load(&item.name, src);
            }
        }
    }

    fn load(&mut self, name: &str, src: &str) {
        if !self.cache.begin(name) {
            return;
        }
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(err) => {
                log::debug!("orbit: could not create image for {name}: {err:?}");
                self.cache.mark_failed(name);
                return;
            }
        };

        let signal = LoadSignal::default();
        let on_load = {
            let signal = signal.clone();
            Closure::<dyn FnMut()>::new(move || signal.loaded())
        };
        let on_error = {
            let signal = signal.clone();
            Closure::<dyn FnMut()>::new(move || signal.errored())
        };
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        img.set_src(src);

        self.in_flight.push(PendingIcon {
            name: name.to_string(),
            img,
            signal,
            _on_load: on_load,
            _on_error: on_error,
        });
    }

    /// Move settled loads into the cache.
    pub fn poll(&mut self) {
        if self.in_flight.is_empty() {
            return;
        }
        let cache = &mut self.cache;
        self.in_flight.retain(|pending| {
            if !settle(cache, &pending.name, &pending.img, &pending.signal) {
                return true;
            }
            pending.img.set_onload(None);
            pending.img.set_onerror(None);
            false
        });
    }

    pub fn cache(&self) -> &IconCache<HtmlImageElement> {
        &self.cache
    }
}

impl Default for IconLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_signal_leaves_cache_loading() {
        let mut cache = IconCache::new();
        cache.begin("Git");
        let signal = LoadSignal::default();
        assert!(!settle(&mut cache, "Git", &"git.svg".to_string(), &signal));
        assert!(cache.ready("Git").is_none());
    }

    #[test]
    fn load_event_makes_icon_ready() {
        let mut cache = IconCache::new();
        cache.begin("React");
        let signal = LoadSignal::default();
        signal.clone().loaded();
        assert!(settle(&mut cache, "React", &"react.svg".to_string(), &signal));
        assert_eq!(cache.ready("React").map(String::as_str), Some("react.svg"));
    }

    #[test]
    fn error_event_marks_icon_failed() {
        let mut cache = IconCache::new();
        cache.begin("AWS");
        let signal = LoadSignal::default();
        signal.errored();
        assert!(settle(&mut cache, "AWS", &"aws.svg".to_string(), &signal));
        assert!(matches!(cache.state("AWS"), Some(orbit_engine::IconState::Failed)));
    }
}
