use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// How the request text was produced. Only free text exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
}

/// Body of `POST /api/recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub input_type: InputType,
    /// Free-text description of the desired mood or situation
    pub content: String,
}

impl RecommendationRequest {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            input_type: InputType::Text,
            content: content.into(),
        }
    }
}

/// Descriptive attributes of a batch or a single track. Display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tags {
    #[serde(deserialize_with = "lenient_text")]
    pub genre: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub mood: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub energy: Option<String>,
    /// Servers send either a word ("slow") or a BPM number (`95`)
    #[serde(deserialize_with = "lenient_text")]
    pub tempo: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub language: Option<String>,
}

impl Tags {
    pub const GENRE_LABEL: &'static str = "장르";
    pub const MOOD_LABEL: &'static str = "무드";
    pub const ENERGY_LABEL: &'static str = "에너지";
    pub const TEMPO_LABEL: &'static str = "템포";
    pub const LANGUAGE_LABEL: &'static str = "언어";

    /// `(label, value)` pairs in display order, skipping empty values.
    pub fn chips(&self) -> Vec<(&'static str, &str)> {
        [
            (Self::GENRE_LABEL, &self.genre),
            (Self::MOOD_LABEL, &self.mood),
            (Self::ENERGY_LABEL, &self.energy),
            (Self::TEMPO_LABEL, &self.tempo),
            (Self::LANGUAGE_LABEL, &self.language),
        ]
        .into_iter()
        .filter_map(|(label, value)| present(value).map(|v| (label, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chips().is_empty()
    }
}

/// External listening links for a track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub youtube: Option<String>,
    pub ytmusic: Option<String>,
    pub spotify: Option<String>,
}

impl Links {
    /// `(label, url)` pairs for the links that are actually set.
    pub fn actions(&self) -> Vec<(&'static str, &str)> {
        [
            ("YouTube", &self.youtube),
            ("YT Music", &self.ytmusic),
            ("Spotify", &self.spotify),
        ]
        .into_iter()
        .filter_map(|(label, url)| present(url).map(|u| (label, u)))
        .collect()
    }
}

/// A recommended track as returned by the server, already ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mood: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub energy: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tempo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Why the server picked this track, if it says
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Track {
    pub fn tags(&self) -> Tags {
        Tags {
            genre: self.genre.clone(),
            mood: self.mood.clone(),
            energy: self.energy.clone(),
            tempo: self.tempo.clone(),
            language: self.language.clone(),
        }
    }
}

/// Response of `POST /api/recommend`.
///
/// Accepts both shapes servers have used: `{results, tags}` and
/// `{tracks, error}`. When a body carries both lists, `results` is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawResponse")]
pub struct RecommendationResponse {
    pub results: Vec<Track>,
    pub tags: Tags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    results: Option<Vec<Track>>,
    #[serde(default)]
    tracks: Option<Vec<Track>>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Tags,
    #[serde(default)]
    error: Option<String>,
}

impl From<RawResponse> for RecommendationResponse {
    fn from(raw: RawResponse) -> Self {
        Self {
            results: raw.results.or(raw.tracks).unwrap_or_default(),
            tags: raw.tags,
            error: raw.error,
        }
    }
}

impl RecommendationResponse {
    /// The server-reported application error, if it carried a non-empty one.
    pub fn application_error(&self) -> Option<&str> {
        present(&self.error)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a display attribute that may arrive as a string, number or bool.
/// Null, arrays and objects carry nothing to show and become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(RecommendationRequest::text("잔잔한 노래")).unwrap();
        assert_eq!(body, json!({"input_type": "text", "content": "잔잔한 노래"}));
    }

    #[test]
    fn test_response_results_shape() {
        let resp: RecommendationResponse = serde_json::from_value(json!({
            "results": [
                {"title": "A", "artist": "X", "genre": "ballad", "links": {"youtube": "https://y/1"}},
                {"title": "B", "artist": "Y"}
            ],
            "tags": {"genre": "ballad", "mood": "", "energy": "low"}
        }))
        .unwrap();

        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].title, "A");
        assert_eq!(resp.tags.genre.as_deref(), Some("ballad"));
        assert!(resp.application_error().is_none());
    }

    #[test]
    fn test_response_tracks_shape_with_error() {
        let resp: RecommendationResponse = serde_json::from_value(json!({
            "tracks": [{"title": "A", "artist": "X"}],
            "error": "quota exceeded"
        }))
        .unwrap();

        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.application_error(), Some("quota exceeded"));
    }

    #[test]
    fn test_response_missing_and_null_fields() {
        let resp: RecommendationResponse =
            serde_json::from_value(json!({"results": null, "tags": null, "error": ""})).unwrap();
        assert!(resp.results.is_empty());
        assert!(resp.tags.is_empty());
        assert!(resp.application_error().is_none());

        let resp: RecommendationResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_track_null_title() {
        let track: Track = serde_json::from_value(json!({"title": null})).unwrap();
        assert_eq!(track.title, "");
        assert_eq!(track.artist, "");
    }

    #[test]
    fn test_chips_skip_empty_values() {
        let tags = Tags {
            genre: Some("lofi".into()),
            mood: Some("".into()),
            energy: None,
            tempo: Some("slow".into()),
            language: Some("  ".into()),
        };

        assert_eq!(tags.chips(), vec![("장르", "lofi"), ("템포", "slow")]);
    }

    #[test]
    fn test_link_actions_order() {
        let links = Links {
            youtube: None,
            ytmusic: Some("https://music.youtube.com/x".into()),
            spotify: Some("https://open.spotify.com/track/y".into()),
        };

        let labels: Vec<_> = links.actions().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["YT Music", "Spotify"]);
    }

    #[test]
    fn test_seed_catalog_numeric_tempo() {
        let resp: RecommendationResponse = serde_json::from_value(json!({
            "results": [{
                "title": "Midnight Focus",
                "artist": "LoFi Haze",
                "genre": "lofi",
                "mood": "focus",
                "energy": "low-mid",
                "tempo": 95,
                "language": "en",
                "links": {}
            }],
            "tags": {"genre": "lofi", "mood": "focus", "energy": "low-mid", "tempo": 95, "language": "en"}
        }))
        .unwrap();

        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].title, "Midnight Focus");
        assert_eq!(resp.results[0].tempo.as_deref(), Some("95"));
        assert_eq!(resp.tags.tempo.as_deref(), Some("95"));
        assert!(resp.results[0].links.as_ref().is_some_and(|l| l.actions().is_empty()));
    }

    #[test]
    fn test_attribute_value_kinds() {
        let track: Track = serde_json::from_value(json!({
            "title": "A",
            "tempo": 72.5,
            "energy": true,
            "mood": null,
            "genre": ["lofi", "jazz"]
        }))
        .unwrap();

        assert_eq!(track.tempo.as_deref(), Some("72.5"));
        assert_eq!(track.energy.as_deref(), Some("true"));
        assert!(track.mood.is_none());
        assert!(track.genre.is_none());
    }

    #[test]
    fn test_results_preferred_over_tracks() {
        let resp: RecommendationResponse = serde_json::from_value(json!({
            "results": [{"title": "From results"}],
            "tracks": [{"title": "From tracks"}, {"title": "Other"}]
        }))
        .unwrap();

        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].title, "From results");

        let resp: RecommendationResponse = serde_json::from_value(json!({
            "results": null,
            "tracks": [{"title": "From tracks"}]
        }))
        .unwrap();
        assert_eq!(resp.results[0].title, "From tracks");
    }
}
