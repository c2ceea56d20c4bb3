use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::components::observer::ViewportObserver;
use crate::components::Binding;
use crate::config::LazyConfig;
use crate::dom::query_all;
use crate::error::SiteError;
use crate::models::LazyImage;

pub struct LazyImages {
    _observer: Option<ViewportObserver>,
}

struct Pending {
    attribute: String,
    images: Vec<(Element, LazyImage)>,
}

impl Pending {
    /// Swaps the deferred source in. Always done afterwards, so always true.
    fn load(&mut self, target: &Element) -> bool {
        let Some((element, image)) = self.images.iter_mut().find(|(el, _)| el == target) else {
            return true;
        };
        if let Some(source) = image.resolve() {
            if let Err(e) = element.set_attribute("src", &source) {
                log::warn!("Failed to load {}: {:?}", source, e);
            }
            let _ = element.remove_attribute(&self.attribute);
        }
        true
    }
}

impl LazyImages {
    pub fn bind(document: &Document, config: &LazyConfig) -> Result<Binding<Self>, SiteError> {
        let elements = query_all(document, &config.selector())?;
        if elements.is_empty() {
            return Ok(Binding::Inactive);
        }
        let images = elements
            .into_iter()
            .filter_map(|el| {
                let source = el.get_attribute(&config.source_attribute)?;
                Some((el, LazyImage::new(source)))
            })
            .collect::<Vec<_>>();
        let targets: Vec<Element> = images.iter().map(|(el, _)| el.clone()).collect();
        let mut pending = Pending {
            attribute: config.source_attribute.clone(),
            images,
        };

        if !ViewportObserver::is_supported() {
            log::debug!("IntersectionObserver unavailable, loading {} images now", targets.len());
            for target in &targets {
                pending.load(target);
            }
            return Ok(Binding::Active(Self { _observer: None }));
        }

        let pending = Rc::new(RefCell::new(pending));
        let observer = ViewportObserver::new(None, move |target| pending.borrow_mut().load(target))?;
        for target in &targets {
            observer.observe(target);
        }

        Ok(Binding::Active(Self {
            _observer: Some(observer),
        }))
    }
}
