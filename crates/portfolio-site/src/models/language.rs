use unic_langid::LanguageIdentifier;

use crate::storage::PreferenceStore;

/// Result of a language switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The code was stored. Per-language page routing does not exist yet, so
    /// the current page stays as it is; a router would hook in here.
    RoutingPending { code: String },
}

pub struct LanguageState<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> LanguageState<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.store.get(&self.key)
    }

    pub fn switch(&mut self, code: &str) -> SwitchOutcome {
        if let Err(e) = self.store.set(&self.key, code) {
            log::warn!("Failed to persist language {}: {}", code, e);
        }
        SwitchOutcome::RoutingPending {
            code: code.to_string(),
        }
    }
}

/// Primary language subtag of a browser locale: `pt` for `pt-BR`.
pub fn browser_language(locale: &str) -> Option<String> {
    let locale = locale.trim();
    if locale.is_empty() {
        return None;
    }
    match locale.parse::<LanguageIdentifier>() {
        Ok(id) => Some(id.language.as_str().to_string()),
        Err(_) => locale
            .split(['-', '_'])
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, LANGUAGE_KEY};

    #[test]
    fn test_browser_language_primary_subtag() {
        assert_eq!(browser_language("pt-BR").as_deref(), Some("pt"));
        assert_eq!(browser_language("en").as_deref(), Some("en"));
        assert_eq!(browser_language("zh-Hant-TW").as_deref(), Some("zh"));
    }

    #[test]
    fn test_browser_language_malformed() {
        assert_eq!(browser_language("").as_deref(), None);
        assert_eq!(
            browser_language("notareal-locale-tag!!").as_deref(),
            Some("notareal")
        );
    }

    #[test]
    fn test_switch_persists_without_validation() {
        let store = MemoryStore::new();
        let mut state = LanguageState::new(store.clone(), LANGUAGE_KEY);
        assert_eq!(state.stored(), None);

        let outcome = state.switch("xx-custom");
        assert_eq!(
            outcome,
            SwitchOutcome::RoutingPending {
                code: "xx-custom".to_string()
            }
        );
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("xx-custom"));
        assert_eq!(state.stored().as_deref(), Some("xx-custom"));
    }
}
