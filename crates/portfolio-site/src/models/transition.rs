//! Show/hide sequencing for filtered cards.
//!
//! CSS transitions do not run on an element whose `display` flips in the same
//! paint, so hiding fades first and drops `display` afterwards, while showing
//! restores `display` first and fades in a frame later. Each request issues a
//! new [`Ticket`]; completions holding an older ticket are ignored, so timers
//! left over from earlier clicks cannot undo a newer request.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    FadingOut,
    Hidden,
    Revealing,
    FadingIn,
}

/// Style change the DOM driver applies to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `display: block`
    Show,
    /// `display: none`
    Hide,
    /// `opacity: 1; transform: scale(1)`
    FadeIn,
    /// `opacity: 0; transform: scale(0.9)`
    FadeOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Let the display change paint before fading in.
    Frame(Ticket),
    /// Wait for `transitionend`, or the fallback delay.
    TransitionEnd(Ticket),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    pub steps: Vec<Step>,
    pub wait: Option<Wait>,
}

impl Plan {
    fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty() && self.wait.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CardTransition {
    phase: Phase,
    generation: u64,
}

impl Default for CardTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl CardTransition {
    pub fn new() -> Self {
        Self {
            phase: Phase::Visible,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the card occupies layout (everything but `Hidden`).
    pub fn is_displayed(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// The ticket a completion must present to be accepted right now.
    pub fn pending(&self) -> Option<Ticket> {
        match self.phase {
            Phase::FadingOut | Phase::Revealing | Phase::FadingIn => Some(Ticket(self.generation)),
            Phase::Visible | Phase::Hidden => None,
        }
    }

    pub fn show(&mut self) -> Plan {
        match self.phase {
            Phase::Visible | Phase::Revealing | Phase::FadingIn => Plan::idle(),
            Phase::Hidden | Phase::FadingOut => {
                let ticket = self.advance(Phase::Revealing);
                Plan {
                    steps: vec![Step::Show],
                    wait: Some(Wait::Frame(ticket)),
                }
            }
        }
    }

    pub fn hide(&mut self) -> Plan {
        match self.phase {
            Phase::Hidden | Phase::FadingOut => Plan::idle(),
            Phase::Visible | Phase::Revealing | Phase::FadingIn => {
                let ticket = self.advance(Phase::FadingOut);
                Plan {
                    steps: vec![Step::FadeOut],
                    wait: Some(Wait::TransitionEnd(ticket)),
                }
            }
        }
    }

    pub fn settle(&mut self, ticket: Ticket) -> Plan {
        if self.pending() != Some(ticket) {
            return Plan::idle();
        }
        match self.phase {
            Phase::FadingOut => {
                self.phase = Phase::Hidden;
                Plan {
                    steps: vec![Step::Hide],
                    wait: None,
                }
            }
            Phase::Revealing => {
                let ticket = self.advance(Phase::FadingIn);
                Plan {
                    steps: vec![Step::FadeIn],
                    wait: Some(Wait::TransitionEnd(ticket)),
                }
            }
            Phase::FadingIn => {
                self.phase = Phase::Visible;
                Plan::idle()
            }
            Phase::Visible | Phase::Hidden => Plan::idle(),
        }
    }

    /// Shorthand for the filters: show when `visible`, hide otherwise.
    pub fn set_visible(&mut self, visible: bool) -> Plan {
        if visible {
            self.show()
        } else {
            self.hide()
        }
    }

    fn advance(&mut self, phase: Phase) -> Ticket {
        self.generation += 1;
        self.phase = phase;
        Ticket(self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_of(plan: &Plan) -> Ticket {
        match plan.wait {
            Some(Wait::Frame(t)) | Some(Wait::TransitionEnd(t)) => t,
            None => panic!("plan has no wait: {:?}", plan),
        }
    }

    #[test]
    fn test_hide_fades_then_drops_display() {
        let mut card = CardTransition::new();
        let plan = card.hide();
        assert_eq!(plan.steps, vec![Step::FadeOut]);
        assert!(matches!(plan.wait, Some(Wait::TransitionEnd(_))));
        assert_eq!(card.phase(), Phase::FadingOut);
        assert!(card.is_displayed());

        let done = card.settle(ticket_of(&plan));
        assert_eq!(done.steps, vec![Step::Hide]);
        assert_eq!(card.phase(), Phase::Hidden);
        assert!(!card.is_displayed());
    }

    #[test]
    fn test_show_restores_display_before_fading_in() {
        let mut card = CardTransition::new();
        let hide = card.hide();
        card.settle(ticket_of(&hide));

        let show = card.show();
        assert_eq!(show.steps, vec![Step::Show]);
        assert!(matches!(show.wait, Some(Wait::Frame(_))));

        let fade = card.settle(ticket_of(&show));
        assert_eq!(fade.steps, vec![Step::FadeIn]);
        assert_eq!(card.phase(), Phase::FadingIn);

        assert!(card.settle(ticket_of(&fade)).is_idle());
        assert_eq!(card.phase(), Phase::Visible);
    }

    #[test]
    fn test_stale_fade_out_does_not_hide_reshown_card() {
        let mut card = CardTransition::new();
        let hide = card.hide();
        let show = card.show();
        assert_eq!(show.steps, vec![Step::Show]);

        // The 300ms fallback of the first click fires late.
        assert!(card.settle(ticket_of(&hide)).is_idle());
        assert_eq!(card.phase(), Phase::Revealing);
        assert!(card.is_displayed());
    }

    #[test]
    fn test_repeated_requests_are_idle() {
        let mut card = CardTransition::new();
        assert!(card.show().is_idle());
        card.hide();
        assert!(card.hide().is_idle());
    }

    #[test]
    fn test_duplicate_completion_ignored() {
        let mut card = CardTransition::new();
        let hide = card.hide();
        let ticket = ticket_of(&hide);
        assert_eq!(card.settle(ticket).steps, vec![Step::Hide]);
        // transitionend fires once per property; the second is a no-op.
        assert!(card.settle(ticket).is_idle());
        assert_eq!(card.pending(), None);
    }
}
