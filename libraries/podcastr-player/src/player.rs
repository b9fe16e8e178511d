//! Player state - core container
//!
//! Holds the episode list, the current index and the playback flags, and
//! exposes the actions the UI uses to change them.

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    shuffle::{pick_random_index, shuffle_rng},
    snapshot::PlayerSnapshot,
    types::{Episode, PlayerConfig},
};
use rand::rngs::StdRng;

/// What to do once the current episode has played to the end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEndAction {
    /// Looping: the media element replays the same episode
    Repeat,

    /// Moved on to the episode at `index`
    Advance {
        /// New current index
        index: usize,
    },

    /// Nothing left to play, the list was cleared
    Clear,
}

/// Episode list and playback flags for the player bar
///
/// Invariant: `current_episode_index < episode_list.len()` whenever the list
/// is non-empty, and `0` when it is empty. Every action that sets the index
/// keeps this true; out-of-range requests are rejected, not stored.
#[derive(Debug)]
pub struct Player {
    // State
    episode_list: Vec<Episode>,
    current_episode_index: usize,

    // Flags
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    // Shuffle picks
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create an empty player
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            episode_list: Vec::new(),
            current_episode_index: 0,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            rng: shuffle_rng(config.shuffle_seed),
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Play a single episode
    ///
    /// Replaces the list with `[episode]` and starts playing it.
    pub fn play(&mut self, episode: Episode) {
        tracing::debug!(title = %episode.title, "Playing single episode");
        self.replace_list(vec![episode], 0);
    }

    /// Play `list` starting at `index`
    ///
    /// Fails with [`PlayerError::InvalidIndex`] when `index` is not inside
    /// `list`; the current state is left untouched in that case.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        if index >= list.len() {
            tracing::warn!(index, len = list.len(), "Rejected play_list index");
            return Err(PlayerError::InvalidIndex {
                index,
                len: list.len(),
            });
        }

        tracing::debug!(index, len = list.len(), "Playing episode list");
        self.replace_list(list, index);
        Ok(())
    }

    /// Empty the list and reset the index
    ///
    /// Flags are left as they are.
    pub fn clear_player_state(&mut self) {
        if self.episode_list.is_empty() {
            return;
        }

        tracing::debug!(len = self.episode_list.len(), "Clearing player state");
        let previous_index = self.current_episode_index;
        self.episode_list.clear();
        self.current_episode_index = 0;

        self.pending_events.push(PlayerEvent::Cleared);
        if previous_index != 0 {
            self.emit_episode_changed(previous_index);
        }
    }

    fn replace_list(&mut self, list: Vec<Episode>, index: usize) {
        let previous_index = self.current_episode_index;
        self.episode_list = list;
        self.current_episode_index = index;

        self.pending_events.push(PlayerEvent::EpisodeListChanged {
            length: self.episode_list.len(),
        });
        self.emit_episode_changed(previous_index);
        self.set_playing_state(true);
    }

    // ===== Playback Flags =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing_state(!self.is_playing);
    }

    /// Set the playing flag
    ///
    /// Called from the media element's play/pause/ended callbacks. Setting
    /// the value it already has records no event.
    pub fn set_playing_state(&mut self, state: bool) {
        if self.is_playing == state {
            return;
        }

        tracing::debug!(is_playing = state, "Playing state changed");
        self.is_playing = state;
        self.pending_events.push(PlayerEvent::PlayingChanged { is_playing: state });
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        tracing::debug!(is_looping = self.is_looping, "Loop toggled");
        self.pending_events.push(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        tracing::debug!(is_shuffling = self.is_shuffling, "Shuffle toggled");
        self.pending_events.push(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    // ===== Navigation =====

    /// Move to the next episode
    ///
    /// Shuffling picks a uniformly random index over the whole list (it can
    /// pick the current one). Otherwise moves forward by one if there is a
    /// next episode, and does nothing at the end of the list.
    pub fn play_next(&mut self) {
        let previous_index = self.current_episode_index;

        if self.is_shuffling {
            let Some(index) = pick_random_index(&mut self.rng, self.episode_list.len()) else {
                return;
            };
            self.current_episode_index = index;
        } else if self.has_next() {
            self.current_episode_index += 1;
        } else {
            return;
        }

        tracing::debug!(
            from = previous_index,
            to = self.current_episode_index,
            shuffled = self.is_shuffling,
            "Next episode"
        );
        if self.current_episode_index != previous_index {
            self.emit_episode_changed(previous_index);
        }
    }

    /// Move back one episode, or do nothing at the start of the list
    pub fn play_previous(&mut self) {
        if !self.has_previous() {
            return;
        }

        let previous_index = self.current_episode_index;
        self.current_episode_index -= 1;

        tracing::debug!(
            from = previous_index,
            to = self.current_episode_index,
            "Previous episode"
        );
        self.emit_episode_changed(previous_index);
    }

    /// React to the media element reaching the end of the current episode
    ///
    /// Looping is handled by the media element itself, so the state is left
    /// alone. Otherwise moves on when there is a next episode and clears the
    /// list when there is not.
    pub fn handle_episode_ended(&mut self) -> EpisodeEndAction {
        if self.is_looping {
            return EpisodeEndAction::Repeat;
        }

        if self.has_next() && !self.episode_list.is_empty() {
            self.play_next();
            EpisodeEndAction::Advance {
                index: self.current_episode_index,
            }
        } else {
            self.clear_player_state();
            EpisodeEndAction::Clear
        }
    }

    // ===== State Queries =====

    /// Whether there is an episode before the current one
    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Whether `play_next` would move
    ///
    /// Always true while shuffling, even for a one-episode or empty list.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    /// Episode at the current index, `None` when the list is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn len(&self) -> usize {
        self.episode_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episode_list.is_empty()
    }

    /// Copy of the current state plus derived flags
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.episode_list.clone(),
            current_episode_index: self.current_episode_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_episode_changed(&mut self, previous_index: usize) {
        self.pending_events.push(PlayerEvent::EpisodeChanged {
            index: self.current_episode_index,
            previous_index,
        });
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
