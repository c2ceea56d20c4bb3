use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::components::card_animator::AnimatedCard;
use crate::components::Binding;
use crate::config::{BlogConfig, TransitionConfig};
use crate::dom::{highlight_exclusive, query_all, query_html, set_class};
use crate::error::SiteError;
use crate::models::{BlogFilterState, CardMeta, CategoryFilter, ExclusiveGroup};

const ACTIVE_CLASS: &str = "active";

struct BlogCard {
    meta: CardMeta,
    animation: AnimatedCard,
}

struct Shared {
    state: RefCell<BlogFilterState>,
    cards: Vec<BlogCard>,
}

impl Shared {
    fn apply(&self) {
        let state = self.state.borrow();
        for card in &self.cards {
            card.animation.set_visible(state.is_visible(&card.meta));
        }
        log::debug!(
            "blog filter: {:?}, tags {:?}",
            state.category(),
            state.active_tags()
        );
    }
}

pub struct BlogFilter {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl BlogFilter {
    pub fn bind(
        document: &Document,
        config: &BlogConfig,
        timing: &TransitionConfig,
    ) -> Result<Binding<Self>, SiteError> {
        let Some(grid) = document.get_element_by_id(&config.grid_id) else {
            return Ok(Binding::Inactive);
        };
        let category_buttons = query_all(document, &config.category_selector)?;
        let tag_buttons = query_all(document, &config.tag_selector)?;

        let cards = query_html(&grid, &config.card_selector)?
            .into_iter()
            .map(|el| BlogCard {
                meta: CardMeta::from_attributes(
                    el.get_attribute("data-categories").as_deref(),
                    el.get_attribute("data-tags").as_deref(),
                ),
                animation: AnimatedCard::new(el, timing),
            })
            .collect();
        let initial = category_buttons
            .iter()
            .position(|b| b.class_list().contains(ACTIVE_CLASS));
        let shared = Rc::new(Shared {
            state: RefCell::new(BlogFilterState::new(ExclusiveGroup::new(initial))),
            cards,
        });
        let category_buttons: Rc<[Element]> = category_buttons.into();

        let mut listeners = Vec::new();
        for (index, button) in category_buttons.iter().enumerate() {
            let shared = shared.clone();
            let group = category_buttons.clone();
            let category = CategoryFilter::parse(button.get_attribute("data-category").as_deref());
            listeners.push(EventListener::new(button, "click", move |_| {
                let active = {
                    let mut state = shared.state.borrow_mut();
                    state.select_category(index, category.clone());
                    state.category_buttons().active()
                };
                shared.apply();
                highlight_exclusive(&group, active, ACTIVE_CLASS);
            }));
        }
        for button in tag_buttons {
            let Some(tag) = button.get_attribute("data-tag") else {
                continue;
            };
            let shared = shared.clone();
            let target = button.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                let active = shared.state.borrow_mut().toggle_tag(&tag);
                set_class(&target, ACTIVE_CLASS, active);
                shared.apply();
            }));
        }

        Ok(Binding::Active(Self {
            shared,
            _listeners: listeners,
        }))
    }

    pub fn active_tags(&self) -> Vec<String> {
        self.shared.state.borrow().active_tags().iter().cloned().collect()
    }
}
