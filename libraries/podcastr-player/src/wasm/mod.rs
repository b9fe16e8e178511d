//! WASM bindings for podcastr-player
//!
//! Exposes the shared player to the browser so the React-side components
//! and the `<audio>` element drive the same state.

pub mod player;

pub use player::WasmPlayer;
