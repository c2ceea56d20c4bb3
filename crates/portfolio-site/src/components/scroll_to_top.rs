use gloo_events::EventListener;
use web_sys::{Document, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::Binding;
use crate::config::ScrollToTopConfig;
use crate::error::SiteError;
use crate::models::ScrollButton;
use crate::utils::debounce::Debounced;

const BUTTON_STYLE: &str = "position: fixed; bottom: 2rem; right: 2rem; width: 50px; \
    height: 50px; border-radius: 50%; background-color: var(--color-primary); color: white; \
    border: none; font-size: 1.5rem; cursor: pointer; transition: all 0.3s ease; z-index: 999; \
    box-shadow: 0 4px 8px var(--color-shadow);";

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollToTopProps {
    pub threshold: f64,
    pub debounce_ms: u32,
    pub label: AttrValue,
}

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button(props: &ScrollToTopProps) -> Html {
    let state = use_state(ScrollButton::default);

    {
        let state = state.clone();
        use_effect_with((props.threshold, props.debounce_ms), move |&(threshold, wait)| {
            let update = Debounced::new(wait, move |()| {
                let offset = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                state.set(ScrollButton::for_offset(offset, threshold));
            });
            let listener =
                EventListener::new(&gloo_utils::window(), "scroll", move |_| update.call(()));
            move || drop(listener)
        });
    }

    let on_click = Callback::from(|_: MouseEvent| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        gloo_utils::window().scroll_to_with_scroll_to_options(&options);
    });

    let style = format!(
        "{} opacity: {}; visibility: {};",
        BUTTON_STYLE,
        state.opacity(),
        state.visibility()
    );

    html! {
        <button class="scroll-to-top" aria-label={props.label.clone()} style={style} onclick={on_click}>
            {"↑"}
        </button>
    }
}

/// Mounts [`ScrollToTopButton`] into a host element appended to `<body>`.
pub struct ScrollToTop {
    _app: yew::AppHandle<ScrollToTopButton>,
}

impl ScrollToTop {
    pub fn bind(document: &Document, config: &ScrollToTopConfig) -> Result<Binding<Self>, SiteError> {
        let Some(body) = document.body() else {
            return Ok(Binding::Inactive);
        };
        let host = document.create_element("div")?;
        host.set_class_name("scroll-to-top-host");
        body.append_child(&host)?;

        let props = ScrollToTopProps {
            threshold: config.threshold_px,
            debounce_ms: config.debounce_ms,
            label: config.label.clone().into(),
        };
        let app = yew::Renderer::<ScrollToTopButton>::with_root_and_props(host, props).render();

        Ok(Binding::Active(Self { _app: app }))
    }
}
