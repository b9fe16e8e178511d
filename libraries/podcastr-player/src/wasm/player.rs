//! WASM-compatible player wrapper

use crate::{Episode, EpisodeEndAction, PlayerConfig, PlayerContext, PlayerError, Subscription};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible player
///
/// Wraps [`PlayerContext`] with a JavaScript-friendly API. Episodes cross
/// the boundary as plain objects shaped like
/// `{ title, members, thumbnail, duration, url }`.
#[wasm_bindgen]
pub struct WasmPlayer {
    context: PlayerContext,

    // Keeps `onChange` callbacks registered
    subscriptions: Vec<Subscription>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a new player
    ///
    /// `config` is optional: `{ looping, shuffling, shuffleSeed }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let config = if config.is_undefined() || config.is_null() {
            PlayerConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<JsPlayerConfig>(config)?.into()
        };

        Ok(Self {
            context: PlayerContext::new(config),
            subscriptions: Vec::new(),
        })
    }

    // ===== Loading =====

    /// Play a single episode
    pub fn play(&self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)?;
        self.context.play(episode);
        Ok(())
    }

    /// Play a list of episodes starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let list: Vec<Episode> = serde_wasm_bindgen::from_value(list)?;
        self.context.play_list(list, index).map_err(to_js_error)
    }

    /// Empty the episode list
    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&self) {
        self.context.clear_player_state();
    }

    // ===== Flags =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) {
        self.context.toggle_play();
    }

    /// Called from the audio element's play/pause events
    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&self, state: bool) {
        self.context.set_playing_state(state);
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&self) {
        self.context.toggle_loop();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&self) {
        self.context.toggle_shuffle();
    }

    // ===== Navigation =====

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&self) {
        self.context.play_next();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&self) {
        self.context.play_previous();
    }

    /// Called from the audio element's `ended` event
    ///
    /// Returns `"repeat"`, `"advance"` or `"clear"`.
    #[wasm_bindgen(js_name = handleEpisodeEnded)]
    pub fn handle_episode_ended(&self) -> String {
        match self.context.handle_episode_ended() {
            EpisodeEndAction::Repeat => "repeat",
            EpisodeEndAction::Advance { .. } => "advance",
            EpisodeEndAction::Clear => "clear",
        }
        .to_string()
    }

    // ===== State Queries =====

    /// Current state as a plain object (camelCase fields)
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.context.snapshot())?)
    }

    /// Source URL for the audio element
    #[wasm_bindgen(js_name = currentUrl)]
    pub fn current_url(&self) -> Option<String> {
        self.context
            .with_player(|p| p.current_episode().map(|e| e.url.clone()))
    }

    #[wasm_bindgen(getter, js_name = currentEpisodeIndex)]
    pub fn current_episode_index(&self) -> usize {
        self.context.with_player(|p| p.current_episode_index())
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.context.with_player(|p| p.is_playing())
    }

    #[wasm_bindgen(getter, js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.context.with_player(|p| p.is_looping())
    }

    #[wasm_bindgen(getter, js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.context.with_player(|p| p.is_shuffling())
    }

    #[wasm_bindgen(getter, js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.context.has_next()
    }

    #[wasm_bindgen(getter, js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.context.has_previous()
    }

    // ===== Event Callbacks =====

    /// Register a callback `(snapshot, events) => void` run after every change
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        let subscription = self.context.subscribe(move |snapshot, events| {
            let snapshot = match serde_wasm_bindgen::to_value(snapshot) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize snapshot for onChange");
                    return;
                }
            };
            let events = match serde_wasm_bindgen::to_value(events) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize events for onChange");
                    return;
                }
            };

            if let Err(e) = callback.call2(&JsValue::NULL, &snapshot, &events) {
                tracing::error!(error = ?e, "onChange callback threw");
            }
        });
        self.subscriptions.push(subscription);
    }

    /// Drop every registered `onChange` callback
    #[wasm_bindgen(js_name = clearListeners)]
    pub fn clear_listeners(&mut self) {
        self.subscriptions.clear();
    }
}

/// Config shape accepted from JavaScript
#[derive(serde::Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct JsPlayerConfig {
    looping: bool,
    shuffling: bool,
    shuffle_seed: Option<u64>,
}

impl From<JsPlayerConfig> for PlayerConfig {
    fn from(config: JsPlayerConfig) -> Self {
        Self {
            looping: config.looping,
            shuffling: config.shuffling,
            shuffle_seed: config.shuffle_seed,
        }
    }
}

fn to_js_error(error: PlayerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
