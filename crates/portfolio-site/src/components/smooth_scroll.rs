use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::Binding;
use crate::dom::query_all;
use crate::error::SiteError;
use crate::models::anchor_target;

const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn bind(document: &Document) -> Result<Binding<Self>, SiteError> {
        let anchors = query_all(document, IN_PAGE_ANCHORS)?;
        if anchors.is_empty() {
            return Ok(Binding::Inactive);
        }

        let listeners = anchors
            .into_iter()
            .map(|anchor| {
                let document = document.clone();
                let link = anchor.clone();
                EventListener::new_with_options(
                    &anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(href) = link.get_attribute("href") else {
                            return;
                        };
                        let Some(target) =
                            anchor_target(&href).and_then(|id| document.get_element_by_id(id))
                        else {
                            return;
                        };
                        event.prevent_default();
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    },
                )
            })
            .collect();

        Ok(Binding::Active(Self {
            _listeners: listeners,
        }))
    }
}
