//! Shared player handle with change subscriptions
//!
//! One [`PlayerContext`] is created where the player bar's subtree is
//! mounted and cloned into every component that reads or drives playback.
//! All clones share the same [`Player`].
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. Actions that record no events notify nobody.
//! 3. No borrow of the player is held while subscribers run, so a callback
//!    may read the context or trigger further actions.
//! 4. Changes made from inside a callback are queued and delivered after
//!    the current round reaches every subscriber, so each subscriber sees
//!    changes in the order they happened and ends on the latest state.
//! 5. Dropping a [`Subscription`] removes the callback before the next
//!    notification.

use crate::{
    error::Result,
    events::PlayerEvent,
    player::{EpisodeEndAction, Player},
    snapshot::PlayerSnapshot,
    types::{Episode, PlayerConfig},
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Callback = dyn Fn(&PlayerSnapshot, &[PlayerEvent]);

struct Shared {
    player: RefCell<Player>,
    subscribers: RefCell<Vec<Weak<Callback>>>,

    // Changes waiting for delivery, oldest first
    pending: RefCell<VecDeque<(PlayerSnapshot, Vec<PlayerEvent>)>>,
    notifying: Cell<bool>,
}

/// Ends a delivery round, even one cut short by a panicking subscriber
struct NotifyingGuard<'a>(&'a Shared);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.notifying.set(false);
    }
}

/// Cloneable, single-threaded handle to one shared [`Player`]
#[derive(Clone)]
pub struct PlayerContext {
    shared: Rc<Shared>,
}

/// Keeps a subscriber registered; dropping it unsubscribes
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    _callback: Rc<Callback>,
}

impl PlayerContext {
    pub fn new(config: PlayerConfig) -> Self {
        tracing::info!(?config, "Creating player context");
        Self {
            shared: Rc::new(Shared {
                player: RefCell::new(Player::new(config)),
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Register a change callback
    ///
    /// The callback receives the state after the action and the events the
    /// action recorded.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PlayerSnapshot, &[PlayerEvent]) + 'static,
    {
        let callback: Rc<Callback> = Rc::new(callback);
        self.shared
            .subscribers
            .borrow_mut()
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: callback,
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.shared
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.strong_count() > 0)
            .count()
    }

    // ===== Actions =====

    pub fn play(&self, episode: Episode) {
        self.update(|p| p.play(episode));
    }

    pub fn play_list(&self, list: Vec<Episode>, index: usize) -> Result<()> {
        self.update(|p| p.play_list(list, index))
    }

    pub fn toggle_play(&self) {
        self.update(Player::toggle_play);
    }

    pub fn set_playing_state(&self, state: bool) {
        self.update(|p| p.set_playing_state(state));
    }

    pub fn toggle_loop(&self) {
        self.update(Player::toggle_loop);
    }

    pub fn toggle_shuffle(&self) {
        self.update(Player::toggle_shuffle);
    }

    pub fn play_next(&self) {
        self.update(Player::play_next);
    }

    pub fn play_previous(&self) {
        self.update(Player::play_previous);
    }

    pub fn clear_player_state(&self) {
        self.update(Player::clear_player_state);
    }

    pub fn handle_episode_ended(&self) -> EpisodeEndAction {
        self.update(Player::handle_episode_ended)
    }

    // ===== Reads =====

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.shared.player.borrow().snapshot()
    }

    pub fn has_next(&self) -> bool {
        self.shared.player.borrow().has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.shared.player.borrow().has_previous()
    }

    /// Run `f` with read access to the player
    pub fn with_player<T>(&self, f: impl FnOnce(&Player) -> T) -> T {
        f(&self.shared.player.borrow())
    }

    /// Apply `action`, then notify subscribers outside the player borrow
    ///
    /// Called from inside a subscriber, the change is only queued; the
    /// outermost call delivers it once the current round is finished.
    fn update<T>(&self, action: impl FnOnce(&mut Player) -> T) -> T {
        let (result, changes) = {
            let mut player = self.shared.player.borrow_mut();
            let result = action(&mut player);
            let events = player.drain_events();
            let changes = (!events.is_empty()).then(|| (player.snapshot(), events));
            (result, changes)
        };

        if let Some(change) = changes {
            self.shared.pending.borrow_mut().push_back(change);
            self.flush();
        }

        result
    }

    fn flush(&self) {
        if self.shared.notifying.replace(true) {
            return;
        }
        let _guard = NotifyingGuard(&self.shared);

        loop {
            let next = self.shared.pending.borrow_mut().pop_front();
            let Some((snapshot, events)) = next else {
                break;
            };
            self.notify(&snapshot, &events);
        }
    }

    fn notify(&self, snapshot: &PlayerSnapshot, events: &[PlayerEvent]) {
        let live: Vec<Rc<Callback>> = {
            let mut subscribers = self.shared.subscribers.borrow_mut();
            subscribers.retain(|s| s.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        tracing::trace!(
            events = events.len(),
            subscribers = live.len(),
            "Notifying subscribers"
        );
        for callback in live {
            callback(snapshot, events);
        }
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl std::fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerContext")
            .field("player", &self.shared.player)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
