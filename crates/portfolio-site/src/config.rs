use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::models::{ContactField, Theme};
use crate::storage::{LANGUAGE_KEY, THEME_KEY};

/// Id of the optional inline `<script type="application/json">` that
/// overrides any of the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub storage_key: String,
    pub default_theme: Theme,
    pub attribute: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub selector_id: String,
    pub storage_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub toggle_id: String,
    pub nav_id: String,
    pub active_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub button_selector: String,
    pub grid_id: String,
    pub card_selector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub category_selector: String,
    pub tag_selector: String,
    pub grid_id: String,
    pub card_selector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Fallback when `transitionend` never arrives.
    pub fade_out_ms: u32,
    /// Gap between restoring `display` and starting the fade-in.
    pub fade_in_delay_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub subject_id: String,
    pub message_id: String,
    pub error_class: String,
    pub message_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    pub source_attribute: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollToTopConfig {
    pub threshold_px: f64,
    pub debounce_ms: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub language: LanguageConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub portfolio: PortfolioConfig,

    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub transition: TransitionConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub lazy: LazyConfig,

    #[serde(default)]
    pub scroll_to_top: ScrollToTopConfig,

    #[serde(default)]
    pub reveal: RevealConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "themeToggle".to_string(),
            storage_key: THEME_KEY.to_string(),
            default_theme: Theme::Auto,
            attribute: "data-theme".to_string(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            selector_id: "languageSelector".to_string(),
            storage_key: LANGUAGE_KEY.to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            toggle_id: "mobileMenuToggle".to_string(),
            nav_id: "mainNav".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            button_selector: "#portfolioFilter .filter-btn".to_string(),
            grid_id: "portfolioGrid".to_string(),
            card_selector: ".project-card".to_string(),
        }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            category_selector: "#categoryFilter .filter-btn".to_string(),
            tag_selector: "#tagFilter .tag".to_string(),
            grid_id: "blogGrid".to_string(),
            card_selector: ".blog-card".to_string(),
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_out_ms: 300,
            fade_in_delay_ms: 10,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            name_id: "name".to_string(),
            email_id: "email".to_string(),
            subject_id: "subject".to_string(),
            message_id: "message".to_string(),
            error_class: "error".to_string(),
            message_class: "error-message".to_string(),
        }
    }
}

impl ContactConfig {
    pub fn field_id(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name_id,
            ContactField::Email => &self.email_id,
            ContactField::Subject => &self.subject_id,
            ContactField::Message => &self.message_id,
        }
    }
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self {
            source_attribute: "data-src".to_string(),
        }
    }
}

impl LazyConfig {
    pub fn selector(&self) -> String {
        format!("img[{}]", self.source_attribute)
    }
}

impl Default for ScrollToTopConfig {
    fn default() -> Self {
        Self {
            threshold_px: 300.0,
            debounce_ms: 10,
            label: "Scroll to top".to_string(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".to_string(),
            class: "animated".to_string(),
            threshold: 0.1,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            theme: ThemeConfig::default(),
            language: LanguageConfig::default(),
            navigation: NavigationConfig::default(),
            portfolio: PortfolioConfig::default(),
            blog: BlogConfig::default(),
            transition: TransitionConfig::default(),
            contact: ContactConfig::default(),
            lazy: LazyConfig::default(),
            scroll_to_top: ScrollToTopConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Reads the inline config element. Pages without one get the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Result<Self, SiteError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_defaults() {
        let config = SiteConfig::from_json("  ").unwrap();
        assert_eq!(config.theme.toggle_id, "themeToggle");
        assert_eq!(config.transition.fade_out_ms, 300);
        assert_eq!(config.scroll_to_top.threshold_px, 300.0);
        assert_eq!(config.lazy.selector(), "img[data-src]");
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{
                "log_level": "debug",
                "theme": { "toggle_id": "switch", "default_theme": "dark" },
                "reveal": { "selector": ".reveal", "class": "revealed", "threshold": 0.25 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.theme.default_theme, Theme::Dark);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.reveal.class, "revealed");
        assert_eq!(config.contact.field_id(ContactField::Email), "email");
        assert_eq!(config.blog.grid_id, "blogGrid");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = SiteConfig {
            log_level: "verbose".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
