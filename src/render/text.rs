use super::view::{
    ChipView, ErrorView, ResultsView, LOADING_MESSAGE, NO_MATCHES_MESSAGE, PROMPT_MESSAGE,
    SERVER_ERROR_PREFIX,
};
use super::errors::RenderError;
use super::ResultsRenderer;

/// Plain-text layout for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ResultsRenderer for TextRenderer {
    fn render(&self, view: &ResultsView) -> Result<String, RenderError> {
        Ok(match view {
            ResultsView::Placeholder => NO_MATCHES_MESSAGE.to_string(),
            ResultsView::Prompt => PROMPT_MESSAGE.to_string(),
            ResultsView::Loading => LOADING_MESSAGE.to_string(),
            ResultsView::Error(ErrorView::Transport(message)) => {
                format!("{}: {}", SERVER_ERROR_PREFIX, message)
            }
            ResultsView::Error(ErrorView::Application(message)) => message.clone(),
            ResultsView::Results { tags, cards } => {
                let mut lines = Vec::new();
                if !tags.is_empty() {
                    lines.push(format!("[{}]", chips(tags)));
                }
                if cards.is_empty() {
                    lines.push(NO_MATCHES_MESSAGE.to_string());
                }
                for (i, card) in cards.iter().enumerate() {
                    lines.push(format!("{}. {} - {}", i + 1, card.title, card.artist));
                    if !card.chips.is_empty() {
                        lines.push(format!("   {}", chips(&card.chips)));
                    }
                    if let Some(reason) = &card.reason {
                        lines.push(format!("   {}", reason));
                    }
                    for link in &card.links {
                        lines.push(format!("   {}: {}", link.label, link.url));
                    }
                }
                lines.join("\n")
            }
        })
    }
}

fn chips(chips: &[ChipView]) -> String {
    chips
        .iter()
        .map(|c| format!("{}: {}", c.label, c.value))
        .collect::<Vec<_>>()
        .join(" | ")
}
