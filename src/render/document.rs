use minijinja::context;
use serde::Serialize;

use super::errors::RenderError;
use super::templates::{self, Template};
use super::view::ResultsView;
use crate::voice::VOICE_IDLE_LABEL;

/// Snapshot of everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub input: String,
    pub status: String,
    pub voice_label: String,
    pub results: ResultsView,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            input: String::new(),
            status: String::new(),
            voice_label: VOICE_IDLE_LABEL.to_string(),
            results: ResultsView::Placeholder,
        }
    }
}

/// Renders a complete standalone page around the current state.
pub fn document(page: &PageView) -> Result<String, RenderError> {
    templates::render(
        Template::Page,
        context! {
            page => page,
            view => &page.results,
        },
    )
}
