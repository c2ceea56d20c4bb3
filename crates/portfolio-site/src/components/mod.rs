pub mod blog_filter;
pub mod card_animator;
pub mod contact_form;
pub mod language_selector;
pub mod lazy_images;
pub mod mobile_nav;
pub mod observer;
pub mod portfolio_filter;
pub mod scroll_reveal;
pub mod scroll_to_top;
pub mod smooth_scroll;
pub mod theme_toggle;

pub use blog_filter::*;
pub use contact_form::*;
pub use language_selector::*;
pub use lazy_images::*;
pub use mobile_nav::*;
pub use portfolio_filter::*;
pub use scroll_reveal::*;
pub use scroll_to_top::*;
pub use smooth_scroll::*;
pub use theme_toggle::*;

/// A page behavior bound to the elements it needs, or `Inactive` when the
/// current page does not carry them.
pub enum Binding<T> {
    Active(T),
    Inactive,
}

impl<T> Binding<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Binding::Active(_))
    }

    pub fn as_active(&self) -> Option<&T> {
        match self {
            Binding::Active(inner) => Some(inner),
            Binding::Inactive => None,
        }
    }
}
