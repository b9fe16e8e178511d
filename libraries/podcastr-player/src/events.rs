//! Player Events
//!
//! Change notifications for UI synchronization. Every action that actually
//! changes state records one or more events; consumers drain them after
//! the action and re-render whatever they show.

use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PlayerEvent {
    /// Episode list was replaced
    EpisodeListChanged {
        /// New list length
        length: usize,
    },

    /// Current episode changed
    ///
    /// Emitted when the index moves and when the list is replaced, since
    /// the same index then points at a different episode.
    EpisodeChanged {
        /// New current index
        index: usize,
        /// Index before the change
        previous_index: usize,
    },

    /// Playing flag changed
    PlayingChanged {
        /// New value
        is_playing: bool,
    },

    /// Loop flag changed
    LoopingChanged {
        /// New value
        is_looping: bool,
    },

    /// Shuffle flag changed
    ShufflingChanged {
        /// New value
        is_shuffling: bool,
    },

    /// Episode list was emptied
    Cleared,
}

impl PlayerEvent {
    /// Whether this event changes which episode the audio element should load
    pub fn changes_source(&self) -> bool {
        matches!(
            self,
            PlayerEvent::EpisodeChanged { .. }
                | PlayerEvent::EpisodeListChanged { .. }
                | PlayerEvent::Cleared
        )
    }
}
