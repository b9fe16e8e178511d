//! Core types for the player state

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single playable episode
///
/// Immutable value object. Episodes have no id of their own: inside the
/// player an episode is identified by its position in the list.
///
/// Field names serialize in camelCase so the JSON matches what the web
/// front-end already passes around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Hosts and guests, already formatted for display
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Duration in seconds
    pub duration: u32,

    /// Audio source URL
    pub url: String,
}

impl Episode {
    /// Create a new episode
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration,
            url: url.into(),
        }
    }

    /// Parse a single episode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a list of episodes from a JSON array
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration for the player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Fixed seed for shuffle picks (default: None, seeded from entropy)
    pub shuffle_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert!(!config.looping);
        assert!(!config.shuffling);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn episode_parses_front_end_json() {
        let json = r#"{
            "title": "Faladev #30 | Code Review",
            "members": "Diego, Richard",
            "thumbnail": "https://example.com/thumb.jpg",
            "duration": 3981,
            "url": "https://example.com/episode.m4a"
        }"#;

        let episode = Episode::from_json(json).unwrap();
        assert_eq!(episode.title, "Faladev #30 | Code Review");
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.url, "https://example.com/episode.m4a");
    }

    #[test]
    fn episode_list_parses() {
        let json = r#"[
            {"title": "A", "members": "m", "thumbnail": "t", "duration": 1, "url": "a.mp3"},
            {"title": "B", "members": "m", "thumbnail": "t", "duration": 2, "url": "b.mp3"}
        ]"#;

        let episodes = Episode::list_from_json(json).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].url, "b.mp3");
    }

    #[test]
    fn episode_missing_url_is_rejected() {
        let json = r#"{"title": "A", "members": "m", "thumbnail": "t", "duration": 1}"#;
        assert!(Episode::from_json(json).is_err());
    }

    #[test]
    fn negative_duration_is_rejected() {
        let json = r#"{"title": "A", "members": "m", "thumbnail": "t", "duration": -4, "url": "a"}"#;
        assert!(Episode::from_json(json).is_err());
    }
}
