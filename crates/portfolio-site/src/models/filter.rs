//! Card filtering for the portfolio grid and the blog list.

use std::collections::BTreeSet;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a `data-category` value. A missing value behaves like `all`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(name) => CategoryFilter::Only(name.to_string()),
        }
    }

    pub fn matches_one(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => category.map(str::trim) == Some(name.as_str()),
        }
    }

    pub fn matches_any<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => categories.iter().any(|c| c.as_ref() == name),
        }
    }
}

/// Button group where exactly one member carries the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExclusiveGroup {
    active: Option<usize>,
}

impl ExclusiveGroup {
    pub fn new(active: Option<usize>) -> Self {
        Self { active }
    }

    pub fn activate(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioFilterState {
    category: CategoryFilter,
    buttons: ExclusiveGroup,
}

impl PortfolioFilterState {
    pub fn new(buttons: ExclusiveGroup) -> Self {
        Self {
            category: CategoryFilter::All,
            buttons,
        }
    }

    pub fn select(&mut self, button: usize, category: CategoryFilter) {
        self.buttons.activate(button);
        self.category = category;
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn buttons(&self) -> &ExclusiveGroup {
        &self.buttons
    }

    pub fn matches(&self, card_category: Option<&str>) -> bool {
        self.category.matches_one(card_category)
    }
}

/// Categories and tags of one blog card, parsed from its comma-separated
/// `data-categories` and `data-tags` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardMeta {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl CardMeta {
    pub fn from_attributes(categories: Option<&str>, tags: Option<&str>) -> Self {
        Self {
            categories: split_list(categories),
            tags: split_list(tags),
        }
    }
}

pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct BlogFilterState {
    category: CategoryFilter,
    tags: BTreeSet<String>,
    category_buttons: ExclusiveGroup,
}

impl BlogFilterState {
    pub fn new(category_buttons: ExclusiveGroup) -> Self {
        Self {
            category_buttons,
            ..Self::default()
        }
    }

    pub fn select_category(&mut self, button: usize, category: CategoryFilter) {
        self.category_buttons.activate(button);
        self.category = category;
    }

    /// Flips `tag` in the active set and returns whether it is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn active_tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn category_buttons(&self) -> &ExclusiveGroup {
        &self.category_buttons
    }

    pub fn is_visible(&self, card: &CardMeta) -> bool {
        let category_match = self.category.matches_any(&card.categories);
        let tag_match = self.tags.is_empty() || card.tags.iter().any(|t| self.tags.contains(t));
        category_match && tag_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(name: &str) -> CategoryFilter {
        CategoryFilter::Only(name.to_string())
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("devops")), only("devops"));
    }

    #[test]
    fn test_portfolio_all_shows_every_card() {
        let state = PortfolioFilterState::default();
        let cards = [Some("devops"), Some("security"), None];
        assert!(cards.iter().all(|c| state.matches(*c)));
    }

    #[test]
    fn test_portfolio_single_category() {
        let mut state = PortfolioFilterState::new(ExclusiveGroup::new(Some(0)));
        state.select(2, only("security"));

        let cards = [Some("devops"), Some("security"), Some("security"), None];
        let visible: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| state.matches(**c))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(visible, vec![1, 2]);

        let highlighted: Vec<usize> = (0..4).filter(|i| state.buttons().is_active(*i)).collect();
        assert_eq!(highlighted, vec![2]);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(Some("linux, cloud,,")), vec!["linux", "cloud"]);
        assert!(split_list(Some("")).is_empty());
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn test_blog_default_matches_everything() {
        let state = BlogFilterState::default();
        assert!(state.is_visible(&CardMeta::default()));
        assert!(state.is_visible(&CardMeta::from_attributes(Some("a"), Some("x"))));
    }

    #[test]
    fn test_blog_category_and_tags() {
        let mut state = BlogFilterState::default();
        state.select_category(1, only("linux"));
        state.toggle_tag("docker");
        state.toggle_tag("ansible");

        let both = CardMeta::from_attributes(Some("linux,cloud"), Some("docker"));
        let wrong_tag = CardMeta::from_attributes(Some("linux"), Some("bash"));
        let wrong_category = CardMeta::from_attributes(Some("cloud"), Some("ansible"));
        let untagged = CardMeta::from_attributes(Some("linux"), None);

        assert!(state.is_visible(&both));
        assert!(!state.is_visible(&wrong_tag));
        assert!(!state.is_visible(&wrong_category));
        assert!(!state.is_visible(&untagged));
    }

    #[test]
    fn test_blog_tags_without_category() {
        let mut state = BlogFilterState::default();
        state.toggle_tag("docker");
        assert!(state.is_visible(&CardMeta::from_attributes(None, Some("k8s,docker"))));
        assert!(!state.is_visible(&CardMeta::from_attributes(Some("linux"), Some("k8s"))));
    }

    #[test]
    fn test_toggle_tag_twice_restores_set() {
        let mut state = BlogFilterState::default();
        state.toggle_tag("rust");
        let before = state.active_tags().clone();

        assert!(state.toggle_tag("docker"));
        assert!(!state.toggle_tag("docker"));
        assert_eq!(state.active_tags(), &before);
    }

    #[test]
    fn test_category_buttons_exclusive() {
        let mut state = BlogFilterState::new(ExclusiveGroup::new(Some(0)));
        state.select_category(3, only("cloud"));
        assert!(state.category_buttons().is_active(3));
        assert!(!state.category_buttons().is_active(0));
        assert_eq!(state.category_buttons().active(), Some(3));
    }
}
