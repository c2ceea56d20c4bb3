use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::components::card_animator::AnimatedCard;
use crate::components::Binding;
use crate::config::{PortfolioConfig, TransitionConfig};
use crate::dom::{highlight_exclusive, query_all, query_html};
use crate::error::SiteError;
use crate::models::{CategoryFilter, ExclusiveGroup, PortfolioFilterState};

const ACTIVE_CLASS: &str = "active";

struct ProjectCard {
    category: Option<String>,
    animation: AnimatedCard,
}

pub struct PortfolioFilter {
    state: Rc<RefCell<PortfolioFilterState>>,
    _listeners: Vec<EventListener>,
}

impl PortfolioFilter {
    pub fn bind(
        document: &Document,
        config: &PortfolioConfig,
        timing: &TransitionConfig,
    ) -> Result<Binding<Self>, SiteError> {
        let buttons = query_all(document, &config.button_selector)?;
        let Some(grid) = document.get_element_by_id(&config.grid_id) else {
            return Ok(Binding::Inactive);
        };
        if buttons.is_empty() {
            return Ok(Binding::Inactive);
        }

        let cards: Rc<Vec<ProjectCard>> = Rc::new(
            query_html(&grid, &config.card_selector)?
                .into_iter()
                .map(|el| ProjectCard {
                    category: el.get_attribute("data-category"),
                    animation: AnimatedCard::new(el, timing),
                })
                .collect(),
        );
        let initial = buttons.iter().position(|b| b.class_list().contains(ACTIVE_CLASS));
        let state = Rc::new(RefCell::new(PortfolioFilterState::new(ExclusiveGroup::new(initial))));
        let buttons: Rc<[Element]> = buttons.into();

        let listeners = buttons
            .iter()
            .enumerate()
            .map(|(index, button)| {
                let state = state.clone();
                let cards = cards.clone();
                let buttons = buttons.clone();
                let category = CategoryFilter::parse(button.get_attribute("data-category").as_deref());
                EventListener::new(button, "click", move |_| {
                    let mut state = state.borrow_mut();
                    state.select(index, category.clone());
                    highlight_exclusive(&buttons, state.buttons().active(), ACTIVE_CLASS);
                    for card in cards.iter() {
                        card.animation.set_visible(state.matches(card.category.as_deref()));
                    }
                    log::debug!("portfolio filter: {:?}", state.category());
                })
            })
            .collect();

        Ok(Binding::Active(Self {
            state,
            _listeners: listeners,
        }))
    }

    pub fn category(&self) -> CategoryFilter {
        self.state.borrow().category().clone()
    }
}
