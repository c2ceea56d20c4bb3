use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::components::observer::ViewportObserver;
use crate::components::Binding;
use crate::config::RevealConfig;
use crate::dom::{query_all, set_class};
use crate::error::SiteError;
use crate::models::Reveal;

/// Adds the reveal class to marked elements the first time they scroll into
/// view.
pub struct ScrollReveal {
    _observer: Option<ViewportObserver>,
}

impl ScrollReveal {
    pub fn bind(document: &Document, config: &RevealConfig) -> Result<Binding<Self>, SiteError> {
        let elements = query_all(document, &config.selector)?;
        if elements.is_empty() {
            return Ok(Binding::Inactive);
        }

        if !ViewportObserver::is_supported() {
            for el in &elements {
                set_class(el, &config.class, true);
            }
            return Ok(Binding::Active(Self { _observer: None }));
        }

        let class = config.class.clone();
        let states: Rc<RefCell<Vec<(Element, Reveal)>>> = Rc::new(RefCell::new(
            elements.iter().map(|el| (el.clone(), Reveal::default())).collect(),
        ));
        let observer = ViewportObserver::new(Some(config.threshold), move |target| {
            let mut states = states.borrow_mut();
            if let Some((el, state)) = states.iter_mut().find(|(el, _)| el == target) {
                if state.reveal() {
                    set_class(el, &class, true);
                }
            }
            true
        })?;
        for el in &elements {
            observer.observe(el);
        }

        Ok(Binding::Active(Self {
            _observer: Some(observer),
        }))
    }
}
