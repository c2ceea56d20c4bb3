//! Small web-sys helpers shared by the components.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::error::SiteError;

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingGlobal("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?
        .document()
        .ok_or(SiteError::MissingGlobal("document"))
}

/// Anything `querySelectorAll` can be called on.
pub trait Scope {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// All elements under `scope` matching `selector`, in document order.
pub fn query_all(scope: &impl Scope, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = scope.select_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_html(scope: &impl Scope, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    Ok(query_all(scope, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let result = if on {
        element.class_list().add_1(class)
    } else {
        element.class_list().remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to update class {}: {:?}", class, e);
    }
}

/// Clears `class` on every element of `group` and sets it on `group[active]`.
pub fn highlight_exclusive(group: &[Element], active: Option<usize>, class: &str) {
    for (i, el) in group.iter().enumerate() {
        set_class(el, class, Some(i) == active);
    }
}

/// Whether the global constructor `name` exists, e.g. `IntersectionObserver`.
pub fn has_global(name: &str) -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &name.into()).unwrap_or(false))
        .unwrap_or(false)
}
