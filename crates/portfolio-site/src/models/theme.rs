use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::PreferenceStore;

/// Display theme written to `data-theme` on the document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    /// Toggle order.
    pub const CYCLE: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn next(self) -> Theme {
        let index = Self::CYCLE.iter().position(|t| *t == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// What `auto` resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Live system color-scheme signal. Queried every time it is needed.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}

pub struct ThemeState<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    pub fn load(store: S, key: &str, default: Theme) -> Self {
        let current = store
            .get(key)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default);
        Self {
            store,
            key: key.to_string(),
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("Failed to persist theme {}: {}", theme, e);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.next();
        self.apply(next);
        next
    }

    pub fn effective(&self, source: &impl ColorSchemeSource) -> ColorScheme {
        match self.current {
            Theme::Light => ColorScheme::Light,
            Theme::Dark => ColorScheme::Dark,
            Theme::Auto if source.prefers_dark() => ColorScheme::Dark,
            Theme::Auto => ColorScheme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, THEME_KEY};
    use rstest::rstest;
    use std::cell::Cell;

    struct FakeSystem(Cell<bool>);

    impl ColorSchemeSource for FakeSystem {
        fn prefers_dark(&self) -> bool {
            self.0.get()
        }
    }

    #[rstest]
    #[case(Theme::Light, 1, Theme::Dark)]
    #[case(Theme::Light, 3, Theme::Light)]
    #[case(Theme::Dark, 2, Theme::Light)]
    #[case(Theme::Auto, 1, Theme::Light)]
    #[case(Theme::Auto, 7, Theme::Light)]
    #[case(Theme::Dark, 0, Theme::Dark)]
    fn test_toggle_cycles(#[case] start: Theme, #[case] toggles: usize, #[case] expected: Theme) {
        let store = MemoryStore::new();
        store.set(THEME_KEY, start.as_str()).unwrap();
        let mut state = ThemeState::load(store, THEME_KEY, Theme::Auto);
        for _ in 0..toggles {
            state.toggle();
        }
        assert_eq!(state.current(), expected);
    }

    #[test]
    fn test_defaults_to_auto_without_stored_value() {
        let state = ThemeState::load(MemoryStore::new(), THEME_KEY, Theme::default());
        assert_eq!(state.current(), Theme::Auto);
    }

    #[test]
    fn test_ignores_unknown_stored_value() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        let state = ThemeState::load(store, THEME_KEY, Theme::Auto);
        assert_eq!(state.current(), Theme::Auto);
    }

    #[test]
    fn test_applied_theme_is_persisted() {
        let store = MemoryStore::new();
        let mut state = ThemeState::load(store.clone(), THEME_KEY, Theme::Auto);
        state.apply(Theme::Dark);

        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        let reloaded = ThemeState::load(store, THEME_KEY, Theme::Auto);
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_auto_follows_live_system_preference() {
        let system = FakeSystem(Cell::new(false));
        let store = MemoryStore::new();
        let mut state = ThemeState::load(store.clone(), THEME_KEY, Theme::Light);
        state.apply(Theme::Auto);
        assert_eq!(state.effective(&system), ColorScheme::Light);

        system.0.set(true);
        assert_eq!(state.effective(&system), ColorScheme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("auto"));
    }

    #[test]
    fn test_fixed_themes_ignore_system() {
        let system = FakeSystem(Cell::new(true));
        let mut state = ThemeState::load(MemoryStore::new(), THEME_KEY, Theme::Auto);
        state.apply(Theme::Light);
        assert_eq!(state.effective(&system), ColorScheme::Light);
    }
}
