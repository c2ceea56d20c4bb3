/// Floating scroll-to-top button visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollButton {
    #[default]
    Hidden,
    Visible,
}

impl ScrollButton {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset >= threshold {
            ScrollButton::Visible
        } else {
            ScrollButton::Hidden
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            ScrollButton::Visible => "1",
            ScrollButton::Hidden => "0",
        }
    }

    pub fn visibility(self) -> &'static str {
        match self {
            ScrollButton::Visible => "visible",
            ScrollButton::Hidden => "hidden",
        }
    }
}

/// Element id targeted by an in-page anchor. `None` for the bare `#` and for
/// anything that is not a fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(ScrollButton::for_offset(0.0, 300.0), ScrollButton::Hidden);
        assert_eq!(ScrollButton::for_offset(299.0, 300.0), ScrollButton::Hidden);
        assert_eq!(ScrollButton::for_offset(300.0, 300.0), ScrollButton::Visible);
        assert_eq!(ScrollButton::for_offset(1200.5, 300.0), ScrollButton::Visible);
    }

    #[test]
    fn test_transitions_both_directions() {
        let states: Vec<ScrollButton> = [450.0, 120.0, 301.0]
            .into_iter()
            .map(|offset| ScrollButton::for_offset(offset, 300.0))
            .collect();
        let visibility: Vec<&str> = states.iter().map(|s| s.visibility()).collect();
        assert_eq!(visibility, vec!["visible", "hidden", "visible"]);
        assert_eq!(states[1].opacity(), "0");
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/blog/#top"), None);
    }
}
