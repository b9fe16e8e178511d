//! Podcastr - Player State
//!
//! State container for the Podcastr player bar.
//!
//! This crate provides:
//! - Episode list with a current index that always points into the list
//! - Playing, loop and shuffle flags
//! - Next/previous navigation (memoryless random pick while shuffling)
//! - Change events and a shared, subscribable context for UI components
//! - WASM bindings for the browser (feature `wasm`)
//!
//! # Architecture
//!
//! `podcastr-player` holds view state only:
//! - No audio decoding, the `<audio>` element owns playback
//! - No network access, episodes arrive already fetched
//! - No persistence, state lives as long as its [`PlayerContext`]
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_player::{Episode, Player, PlayerConfig};
//!
//! let mut player = Player::new(PlayerConfig::default());
//!
//! let episodes = vec![
//!     Episode::new("Episode 1", "Diego", "https://cdn/1.jpg", 1800, "https://cdn/1.m4a"),
//!     Episode::new("Episode 2", "Diego", "https://cdn/2.jpg", 2400, "https://cdn/2.m4a"),
//! ];
//!
//! // User clicks the first episode of the list
//! player.play_list(episodes, 0)?;
//! assert!(player.is_playing());
//! assert!(player.has_next());
//!
//! player.play_next();
//! assert_eq!(player.current_episode().map(|e| e.url.as_str()), Some("https://cdn/2.m4a"));
//!
//! // Out-of-range indices are rejected
//! assert!(player.play_list(Vec::new(), 0).is_err());
//! # Ok::<(), podcastr_player::PlayerError>(())
//! ```
//!
//! # Example: Shared Context
//!
//! ```rust
//! use podcastr_player::{Episode, PlayerContext};
//!
//! let context = PlayerContext::default();
//!
//! // The audio element follows the current URL
//! let audio = context.clone();
//! let _subscription = context.subscribe(move |snapshot, events| {
//!     if events.iter().any(|e| e.changes_source()) {
//!         println!("load {:?}", snapshot.current_url());
//!     }
//! });
//!
//! context.play(Episode::new("Episode 1", "Diego", "thumb.jpg", 1800, "1.m4a"));
//!
//! // Native `pause` event
//! audio.set_playing_state(false);
//! assert!(!context.snapshot().is_playing);
//! ```

mod config;
mod context;
mod error;
mod events;
mod player;
mod shuffle;
mod snapshot;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use config::ENV_PREFIX;
pub use context::{PlayerContext, Subscription};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use player::{EpisodeEndAction, Player};
pub use snapshot::PlayerSnapshot;
pub use types::{Episode, PlayerConfig};
