//! One-shot state for elements that react to entering the viewport.

/// Image whose real source is held back until it is near the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyImage {
    Deferred { source: String },
    Loaded,
}

impl LazyImage {
    pub fn new(source: impl Into<String>) -> Self {
        LazyImage::Deferred {
            source: source.into(),
        }
    }

    /// Yields the deferred source the first time, `None` afterwards.
    pub fn resolve(&mut self) -> Option<String> {
        match std::mem::replace(self, LazyImage::Loaded) {
            LazyImage::Deferred { source } => Some(source),
            LazyImage::Loaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LazyImage::Loaded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    /// True only on the first call.
    pub fn reveal(&mut self) -> bool {
        let first = *self == Reveal::Pending;
        *self = Reveal::Revealed;
        first
    }
}
