use std::cell::RefCell;

use gloo_events::EventListener;
use web_sys::Document;

use crate::components::*;
use crate::config::SiteConfig;
use crate::error::SiteError;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Every behavior bound on the current page. Dropping it detaches them.
pub struct Site {
    pub theme: Binding<ThemeToggle>,
    pub language: Binding<LanguageSelector>,
    pub navigation: Binding<MobileNav>,
    pub portfolio: Binding<PortfolioFilter>,
    pub blog: Binding<BlogFilter>,
    pub smooth_scroll: Binding<SmoothScroll>,
    pub contact: Binding<ContactFormHandler>,
    pub lazy_images: Binding<LazyImages>,
    pub scroll_to_top: Binding<ScrollToTop>,
    pub reveal: Binding<ScrollReveal>,
}

/// Failures are logged and the behavior left out; the page keeps working.
fn bind_or_skip<T>(name: &str, result: Result<Binding<T>, SiteError>) -> Binding<T> {
    match result {
        Ok(Binding::Active(inner)) => {
            log::debug!("{} active", name);
            Binding::Active(inner)
        }
        Ok(Binding::Inactive) => {
            log::debug!("{} inactive on this page", name);
            Binding::Inactive
        }
        Err(e) => {
            log::warn!("{} failed to bind: {}", name, e);
            Binding::Inactive
        }
    }
}

impl Site {
    pub fn bind(document: &Document, config: &SiteConfig) -> Self {
        let transition = &config.transition;
        Self {
            theme: bind_or_skip("theme", ThemeToggle::bind(document, &config.theme)),
            language: bind_or_skip("language", LanguageSelector::bind(document, &config.language)),
            navigation: bind_or_skip("navigation", MobileNav::bind(document, &config.navigation)),
            portfolio: bind_or_skip(
                "portfolio filter",
                PortfolioFilter::bind(document, &config.portfolio, transition),
            ),
            blog: bind_or_skip("blog filter", BlogFilter::bind(document, &config.blog, transition)),
            smooth_scroll: bind_or_skip("smooth scroll", SmoothScroll::bind(document)),
            contact: bind_or_skip("contact form", ContactFormHandler::bind(document, &config.contact)),
            lazy_images: bind_or_skip("lazy images", LazyImages::bind(document, &config.lazy)),
            scroll_to_top: bind_or_skip(
                "scroll to top",
                ScrollToTop::bind(document, &config.scroll_to_top),
            ),
            reveal: bind_or_skip("scroll reveal", ScrollReveal::bind(document, &config.reveal)),
        }
    }

    pub fn active_count(&self) -> usize {
        [
            self.theme.is_active(),
            self.language.is_active(),
            self.navigation.is_active(),
            self.portfolio.is_active(),
            self.blog.is_active(),
            self.smooth_scroll.is_active(),
            self.contact.is_active(),
            self.lazy_images.is_active(),
            self.scroll_to_top.is_active(),
            self.reveal.is_active(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    fn log_preferences(&self) {
        if let Some(theme) = self.theme.as_active() {
            log::debug!("effective color scheme: {:?}", theme.effective());
        }
        if let Some(language) = self.language.as_active() {
            log::debug!(
                "language stored: {:?}, browser: {:?}",
                language.stored_language(),
                language.browser_language()
            );
        }
        if let Some(portfolio) = self.portfolio.as_active() {
            log::debug!("portfolio category: {:?}", portfolio.category());
        }
        if let Some(blog) = self.blog.as_active() {
            log::debug!("blog tags: {:?}", blog.active_tags());
        }
    }
}

fn install(document: &Document, config: &SiteConfig) {
    let site = Site::bind(document, config);
    site.log_preferences();
    log::info!(
        "Portfolio site initialized successfully! ({} behaviors active)",
        site.active_count()
    );
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}

/// Binds the page now, or once `DOMContentLoaded` fires if still parsing.
pub fn run(document: Document, config: SiteConfig) {
    if document.ready_state() != "loading" {
        install(&document, &config);
        return;
    }
    let target = document.clone();
    EventListener::once(&target, "DOMContentLoaded", move |_| install(&document, &config)).forget();
}
