//! Read-only view of the player handed to UI components

use crate::types::Episode;
use serde::{Deserialize, Serialize};

/// Everything a consumer component reads from the player
///
/// Owned copy of the state plus the derived `has_next` / `has_previous`
/// flags, computed at the moment the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlayerSnapshot {
    /// Episode at the current index, `None` when the list is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    /// Audio source the media element should load
    pub fn current_url(&self) -> Option<&str> {
        self.current_episode().map(|e| e.url.as_str())
    }
}
