use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlSelectElement};

use crate::components::Binding;
use crate::config::LanguageConfig;
use crate::error::SiteError;
use crate::models::{browser_language, LanguageState, SwitchOutcome};
use crate::storage::LocalStore;

pub struct LanguageSelector {
    state: Rc<RefCell<LanguageState<LocalStore>>>,
    _listener: EventListener,
}

impl LanguageSelector {
    pub fn bind(document: &Document, config: &LanguageConfig) -> Result<Binding<Self>, SiteError> {
        let Some(selector) = document
            .get_element_by_id(&config.selector_id)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        else {
            return Ok(Binding::Inactive);
        };

        let state = Rc::new(RefCell::new(LanguageState::new(
            LocalStore::open(),
            &config.storage_key,
        )));

        let listener = {
            let state = state.clone();
            let target = selector.clone();
            EventListener::new(&selector, "change", move |_| {
                let code = target.value();
                match state.borrow_mut().switch(&code) {
                    SwitchOutcome::RoutingPending { code } => {
                        log::info!("Switching to language: {}", code);
                    }
                }
            })
        };

        Ok(Binding::Active(Self {
            state,
            _listener: listener,
        }))
    }

    pub fn stored_language(&self) -> Option<String> {
        self.state.borrow().stored()
    }

    pub fn browser_language(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|locale| browser_language(&locale))
    }
}
