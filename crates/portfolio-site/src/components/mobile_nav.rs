use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::components::Binding;
use crate::config::NavigationConfig;
use crate::dom::{query_all, set_class};
use crate::error::SiteError;
use crate::models::NavMenu;

pub struct MobileNav {
    _listeners: Vec<EventListener>,
}

#[derive(Clone)]
struct NavElements {
    toggle: Element,
    nav: Element,
    active_class: Rc<str>,
    menu: Rc<RefCell<NavMenu>>,
}

impl NavElements {
    fn render(&self) {
        let open = self.menu.borrow().is_open();
        set_class(&self.nav, &self.active_class, open);
        set_class(&self.toggle, &self.active_class, open);
    }

    fn toggle(&self) {
        self.menu.borrow_mut().toggle();
        self.render();
    }

    fn close(&self) {
        self.menu.borrow_mut().close();
        self.render();
    }

    fn contains(&self, node: &Node) -> bool {
        self.toggle.contains(Some(node)) || self.nav.contains(Some(node))
    }
}

impl MobileNav {
    pub fn bind(document: &Document, config: &NavigationConfig) -> Result<Binding<Self>, SiteError> {
        let (Some(toggle), Some(nav)) = (
            document.get_element_by_id(&config.toggle_id),
            document.get_element_by_id(&config.nav_id),
        ) else {
            return Ok(Binding::Inactive);
        };

        let elements = NavElements {
            toggle: toggle.clone(),
            nav: nav.clone(),
            active_class: config.active_class.as_str().into(),
            menu: Rc::new(RefCell::new(NavMenu::default())),
        };

        let mut listeners = Vec::new();
        {
            let elements = elements.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| elements.toggle()));
        }
        {
            let elements = elements.clone();
            listeners.push(EventListener::new(document, "click", move |event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                    return;
                };
                if !elements.contains(&target) {
                    elements.close();
                }
            }));
        }
        for link in query_all(&nav, "a")? {
            let elements = elements.clone();
            listeners.push(EventListener::new(&link, "click", move |_| elements.close()));
        }

        Ok(Binding::Active(Self {
            _listeners: listeners,
        }))
    }
}
