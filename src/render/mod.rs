//! Maps recommendation outcomes to what the page displays.

pub mod document;
pub mod errors;
pub mod html;
pub mod templates;
pub mod text;
pub mod view;

pub use document::{document, PageView};
pub use errors::RenderError;
pub use html::HtmlRenderer;
pub use text::TextRenderer;
pub use view::{CardView, ChipView, ErrorView, LinkView, ResultsView};

/// Lays out a `ResultsView` for one output medium.
pub trait ResultsRenderer {
    fn render(&self, view: &ResultsView) -> Result<String, RenderError>;
}
