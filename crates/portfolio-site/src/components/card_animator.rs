use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{EventTarget, HtmlElement};

use crate::config::TransitionConfig;
use crate::dom::set_style;
use crate::models::{CardTransition, Plan, Step, Ticket, Wait};

/// Drives one card's [`CardTransition`]. Completions come from the card's own
/// `transitionend`, or from a fallback timer when no transition runs.
pub struct AnimatedCard {
    inner: Rc<Inner>,
    _transition_end: EventListener,
}

struct Inner {
    element: HtmlElement,
    machine: RefCell<CardTransition>,
    fade_out_ms: u32,
    fade_in_delay_ms: u32,
}

impl AnimatedCard {
    pub fn new(element: HtmlElement, timing: &TransitionConfig) -> Self {
        let inner = Rc::new(Inner {
            element: element.clone(),
            machine: RefCell::new(CardTransition::new()),
            fade_out_ms: timing.fade_out_ms,
            fade_in_delay_ms: timing.fade_in_delay_ms,
        });

        let transition_end = {
            let inner = inner.clone();
            EventListener::new(&element, "transitionend", move |event| {
                // Ignore transitions bubbling up from the card's children.
                let card: &EventTarget = inner.element.as_ref();
                if event.target().as_ref() != Some(card) {
                    return;
                }
                let pending = inner.machine.borrow().pending();
                if let Some(ticket) = pending {
                    Inner::settle(&inner, ticket);
                }
            })
        };

        Self {
            inner,
            _transition_end: transition_end,
        }
    }

    pub fn set_visible(&self, visible: bool) {
        let plan = self.inner.machine.borrow_mut().set_visible(visible);
        Inner::run(&self.inner, plan);
    }
}

impl Inner {
    fn settle(this: &Rc<Self>, ticket: Ticket) {
        let plan = this.machine.borrow_mut().settle(ticket);
        Self::run(this, plan);
    }

    fn run(this: &Rc<Self>, plan: Plan) {
        for step in plan.steps {
            this.apply(step);
        }
        let (delay, ticket) = match plan.wait {
            None => return,
            Some(Wait::Frame(ticket)) => (this.fade_in_delay_ms, ticket),
            Some(Wait::TransitionEnd(ticket)) => (this.fade_out_ms, ticket),
        };
        let inner = this.clone();
        // Never cancelled; a stale ticket makes a late timer a no-op.
        Timeout::new(delay, move || Inner::settle(&inner, ticket)).forget();
    }

    fn apply(&self, step: Step) {
        match step {
            Step::Show => set_style(&self.element, "display", "block"),
            Step::Hide => set_style(&self.element, "display", "none"),
            Step::FadeIn => {
                set_style(&self.element, "opacity", "1");
                set_style(&self.element, "transform", "scale(1)");
            }
            Step::FadeOut => {
                set_style(&self.element, "opacity", "0");
                set_style(&self.element, "transform", "scale(0.9)");
            }
        }
    }
}
