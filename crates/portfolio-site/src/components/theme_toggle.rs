use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::components::Binding;
use crate::config::ThemeConfig;
use crate::error::SiteError;
use crate::models::{ColorSchemeSource, ThemeState};
use crate::storage::LocalStore;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `prefers-color-scheme` media query, evaluated on every call.
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }
}

pub struct ThemeToggle {
    state: Rc<RefCell<ThemeState<LocalStore>>>,
    _listener: Option<EventListener>,
}

impl ThemeToggle {
    /// Applies the stored theme right away; the toggle button is optional.
    pub fn bind(document: &Document, config: &ThemeConfig) -> Result<Binding<Self>, SiteError> {
        let Some(root) = document.document_element() else {
            return Ok(Binding::Inactive);
        };
        let mut state = ThemeState::load(LocalStore::open(), &config.storage_key, config.default_theme);
        let current = state.current();
        state.apply(current);
        write_theme(&root, &config.attribute, &state)?;

        let state = Rc::new(RefCell::new(state));
        let listener = document.get_element_by_id(&config.toggle_id).map(|toggle| {
            let state = state.clone();
            let attribute = config.attribute.clone();
            EventListener::new(&toggle, "click", move |_| {
                let mut state = state.borrow_mut();
                let theme = state.toggle();
                log::info!("Theme changed to {}", theme);
                if let Err(e) = write_theme(&root, &attribute, &state) {
                    log::warn!("{}", e);
                }
            })
        });

        Ok(Binding::Active(Self {
            state,
            _listener: listener,
        }))
    }

    pub fn effective(&self) -> crate::models::ColorScheme {
        self.state.borrow().effective(&SystemColorScheme)
    }
}

fn write_theme(
    root: &Element,
    attribute: &str,
    state: &ThemeState<LocalStore>,
) -> Result<(), SiteError> {
    root.set_attribute(attribute, state.current().as_str())?;
    log::debug!(
        "theme {} resolves to {:?}",
        state.current(),
        state.effective(&SystemColorScheme)
    );
    Ok(())
}
