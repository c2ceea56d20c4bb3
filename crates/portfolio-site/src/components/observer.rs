use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::has_global;
use crate::error::SiteError;

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// `IntersectionObserver` that hands each intersecting target to `on_enter`
/// and stops watching the targets for which it returns true.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl ViewportObserver {
    pub fn is_supported() -> bool {
        has_global("IntersectionObserver")
    }

    pub fn new(
        threshold: Option<f64>,
        mut on_enter: impl FnMut(&Element) -> bool + 'static,
    ) -> Result<Self, SiteError> {
        let callback: EntryCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if on_enter(&target) {
                    observer.unobserve(&target);
                }
            }
        });

        let observer = match threshold {
            Some(threshold) => {
                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(threshold));
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?
            }
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
        };

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
