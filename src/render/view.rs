//! Typed view model for the results container.
//!
//! Everything the page shows about a request is decided here; the HTML and
//! terminal renderers only lay it out.

use serde::Serialize;

use crate::models::{RecommendationResponse, Tags, Track};
use crate::recommendations::DispatchError;

pub const LOADING_MESSAGE: &str = "추천을 불러오는 중...";
pub const PROMPT_MESSAGE: &str = "상황/분위기를 입력해 주세요.";
pub const NO_MATCHES_MESSAGE: &str = "조건에 맞는 곡을 찾지 못했습니다.";
pub const SERVER_ERROR_PREFIX: &str = "서버 오류";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub artist: String,
    pub chips: Vec<ChipView>,
    pub links: Vec<LinkView>,
    pub reason: Option<String>,
}

impl From<&Track> for CardView {
    fn from(track: &Track) -> Self {
        let links = track
            .links
            .as_ref()
            .map(|links| {
                links
                    .actions()
                    .into_iter()
                    .map(|(label, url)| LinkView {
                        label,
                        url: url.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        CardView {
            title: track.title.clone(),
            artist: track.artist.clone(),
            chips: chips_for(&track.tags()),
            links,
            reason: track
                .reason
                .as_ref()
                .filter(|r| !r.trim().is_empty())
                .cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum ErrorView {
    /// Network or HTTP failure, shown behind the generic server-error prefix
    Transport(String),
    /// Error reported by the server itself, shown as-is
    Application(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state")]
pub enum ResultsView {
    /// Initial page content before anything was asked
    #[default]
    Placeholder,
    /// Submission with blank input
    Prompt,
    Loading,
    Results {
        tags: Vec<ChipView>,
        cards: Vec<CardView>,
    },
    Error(ErrorView),
}

impl ResultsView {
    pub fn from_response(response: &RecommendationResponse) -> Self {
        ResultsView::Results {
            tags: chips_for(&response.tags),
            cards: response.results.iter().map(CardView::from).collect(),
        }
    }

    pub fn from_error(error: &DispatchError) -> Self {
        match error {
            DispatchError::EmptyInput => ResultsView::Prompt,
            DispatchError::Application(message) => {
                ResultsView::Error(ErrorView::Application(message.clone()))
            }
            other => ResultsView::Error(ErrorView::Transport(other.to_string())),
        }
    }

    pub fn from_outcome(outcome: &Result<RecommendationResponse, DispatchError>) -> Self {
        match outcome {
            Ok(response) => Self::from_response(response),
            Err(error) => Self::from_error(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultsView::Error(_))
    }
}

fn chips_for(tags: &Tags) -> Vec<ChipView> {
    tags.chips()
        .into_iter()
        .map(|(label, value)| ChipView {
            label,
            value: value.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Links;

    fn track(title: &str) -> Track {
        Track {
            title: title.to_string(),
            artist: "Artist".to_string(),
            ..Track::default()
        }
    }

    #[test]
    fn test_cards_follow_input_order() {
        let response = RecommendationResponse {
            results: vec![track("one"), track("two"), track("three")],
            ..RecommendationResponse::default()
        };

        let ResultsView::Results { cards, .. } = ResultsView::from_response(&response) else {
            panic!("expected results view");
        };
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_card_drops_empty_tags_and_links() {
        let mut t = track("song");
        t.genre = Some("jazz".into());
        t.mood = Some(String::new());
        t.links = Some(Links {
            youtube: Some(String::new()),
            spotify: Some("https://open.spotify.com/track/1".into()),
            ..Links::default()
        });
        t.reason = Some(" ".into());

        let card = CardView::from(&t);
        assert_eq!(
            card.chips,
            vec![ChipView {
                label: "장르",
                value: "jazz".into()
            }]
        );
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].label, "Spotify");
        assert!(card.reason.is_none());
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            ResultsView::from_error(&DispatchError::EmptyInput),
            ResultsView::Prompt
        );
        assert_eq!(
            ResultsView::from_error(&DispatchError::Http(502)),
            ResultsView::Error(ErrorView::Transport("HTTP 502".into()))
        );
        assert_eq!(
            ResultsView::from_error(&DispatchError::Application("bad".into())),
            ResultsView::Error(ErrorView::Application("bad".into()))
        );
    }
}
