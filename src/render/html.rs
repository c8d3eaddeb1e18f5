use minijinja::context;

use super::errors::RenderError;
use super::templates::{self, Template};
use super::view::ResultsView;
use super::ResultsRenderer;

/// Renders the results container markup. Every interpolated value is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ResultsRenderer for HtmlRenderer {
    fn render(&self, view: &ResultsView) -> Result<String, RenderError> {
        templates::render(Template::Results, context! { view => view })
    }
}
