use super::filter::{TemplateQuery, categories};
use super::template::{ProjectTemplate, TemplateCatalog};

/// Loading lifecycle of the template list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Loading,
    Ready(TemplateCatalog),
    Failed(String),
}

/// The template gallery: fetch state plus the user's current query.
///
/// Fetching itself happens elsewhere; the owner reports the outcome through
/// [`Gallery::loaded`] or [`Gallery::failed`].
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    state: GalleryState,
    pub query: TemplateQuery,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GalleryState::Loading)
    }

    pub fn loaded(&mut self, catalog: TemplateCatalog) {
        log::debug!("Template gallery loaded {} templates", catalog.len());
        self.state = GalleryState::Ready(catalog);
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Template gallery failed to load: {}", message);
        self.state = GalleryState::Failed(message);
    }

    /// Goes back to `Loading` so the owner can fetch again. The query is kept.
    pub fn retry(&mut self) {
        self.state = GalleryState::Loading;
    }

    /// Templates matching the current query. Empty unless the list has loaded.
    pub fn visible(&self) -> Vec<&ProjectTemplate> {
        match &self.state {
            GalleryState::Ready(catalog) => self.query.apply(&catalog.templates),
            _ => Vec::new(),
        }
    }

    pub fn categories(&self) -> Vec<String> {
        match &self.state {
            GalleryState::Ready(catalog) => categories(&catalog.templates),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            GalleryState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
