/// Collapsible mobile menu. The DOM side mirrors this as the `active` class
/// on both the toggle button and the nav panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenu {
    Open,
    #[default]
    Closed,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self == NavMenu::Open
    }

    pub fn toggle(&mut self) -> NavMenu {
        *self = match self {
            NavMenu::Open => NavMenu::Closed,
            NavMenu::Closed => NavMenu::Open,
        };
        *self
    }

    pub fn close(&mut self) {
        *self = NavMenu::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.toggle(), NavMenu::Open);
        assert_eq!(menu.toggle(), NavMenu::Closed);

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
