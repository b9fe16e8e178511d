//! Player integration tests
//!
//! Real-world listening sessions: clicking episodes in the list, the
//! player bar buttons, and the audio element's callbacks.

use podcastr_player::{Episode, EpisodeEndAction, Player, PlayerConfig, PlayerError, PlayerEvent};

// ===== Test Helpers =====

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn create_episode(id: &str, duration: u32) -> Episode {
    Episode::new(
        format!("Faladev #{}", id),
        "Diego Fernandes, Mayk Brito",
        format!("https://storage.example.com/{}.jpg", id),
        duration,
        format!("https://storage.example.com/{}.m4a", id),
    )
}

fn home_page_episodes() -> Vec<Episode> {
    vec![
        create_episode("1", 3981),
        create_episode("2", 2645),
        create_episode("3", 5204),
    ]
}

// ===== Loading =====

#[test]
fn test_click_single_episode_from_detail_page() {
    init_tracing();
    let mut player = Player::default();
    let episode = create_episode("7", 1200);

    player.play(episode.clone());

    assert_eq!(player.episode_list(), std::slice::from_ref(&episode));
    assert_eq!(player.current_episode_index(), 0);
    assert!(player.is_playing());
    assert!(!player.has_previous());
    assert!(!player.has_next());
}

#[test]
fn test_click_middle_episode_of_list() {
    init_tracing();
    let mut player = Player::default();

    player.play_list(home_page_episodes(), 1).unwrap();

    assert_eq!(player.current_episode_index(), 1);
    assert!(player.is_playing());
    assert!(player.has_previous());
    assert!(player.has_next());
    assert_eq!(player.current_episode().unwrap().title, "Faladev #2");
}

#[test]
fn test_stale_index_from_ui_is_rejected() {
    init_tracing();
    let mut player = Player::default();
    player.play_list(home_page_episodes(), 2).unwrap();

    let result = player.play_list(home_page_episodes()[..2].to_vec(), 2);

    match result {
        Err(PlayerError::InvalidIndex { index, len }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        other => panic!("expected InvalidIndex, got {:?}", other),
    }
    assert_eq!(player.len(), 3);
    assert_eq!(player.current_episode_index(), 2);
}

// ===== Navigation =====

#[test]
fn test_walk_forward_then_back() {
    init_tracing();
    let mut player = Player::default();
    player.play_list(home_page_episodes(), 0).unwrap();

    player.play_next();
    player.play_next();
    assert_eq!(player.current_episode_index(), 2);

    // At the end: next does nothing
    player.play_next();
    assert_eq!(player.current_episode_index(), 2);

    player.play_previous();
    player.play_previous();
    assert_eq!(player.current_episode_index(), 0);

    // At the start: previous does nothing
    player.play_previous();
    assert_eq!(player.current_episode_index(), 0);
}

#[test]
fn test_previous_on_first_of_two_stays() {
    let mut player = Player::default();
    player
        .play_list(vec![create_episode("A", 10), create_episode("B", 10)], 0)
        .unwrap();

    player.play_previous();

    assert_eq!(player.current_episode_index(), 0);
}

#[test]
fn test_shuffle_makes_last_episode_have_next() {
    let mut player = Player::new(PlayerConfig {
        shuffle_seed: Some(11),
        ..Default::default()
    });
    player.play_list(home_page_episodes(), 2).unwrap();
    assert!(!player.has_next());

    player.toggle_shuffle();
    assert!(player.has_next());

    for _ in 0..50 {
        player.play_next();
        assert!(player.current_episode_index() < 3);
    }
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let config = PlayerConfig {
        shuffling: true,
        shuffle_seed: Some(2024),
        ..Default::default()
    };
    let mut a = Player::new(config.clone());
    let mut b = Player::new(config);

    let episodes: Vec<_> = (0..20).map(|i| create_episode(&i.to_string(), 60)).collect();
    a.play_list(episodes.clone(), 0).unwrap();
    b.play_list(episodes, 0).unwrap();

    for _ in 0..10 {
        a.play_next();
        b.play_next();
        assert_eq!(a.current_episode_index(), b.current_episode_index());
    }
}

// ===== Audio Element Callbacks =====

#[test]
fn test_pause_and_resume_from_audio_element() {
    let mut player = Player::default();
    player.play(create_episode("1", 100));
    player.drain_events();

    player.set_playing_state(false);
    player.set_playing_state(false);
    player.set_playing_state(true);

    assert_eq!(
        player.drain_events(),
        vec![
            PlayerEvent::PlayingChanged { is_playing: false },
            PlayerEvent::PlayingChanged { is_playing: true },
        ]
    );
}

#[test]
fn test_listen_through_whole_list() {
    init_tracing();
    let mut player = Player::default();
    player.play_list(home_page_episodes(), 0).unwrap();

    assert_eq!(
        player.handle_episode_ended(),
        EpisodeEndAction::Advance { index: 1 }
    );
    assert_eq!(
        player.handle_episode_ended(),
        EpisodeEndAction::Advance { index: 2 }
    );
    assert_eq!(player.handle_episode_ended(), EpisodeEndAction::Clear);

    assert!(player.is_empty());
    assert_eq!(player.current_episode_index(), 0);
    assert!(player.current_episode().is_none());
}

#[test]
fn test_looping_episode_never_advances() {
    let mut player = Player::default();
    player.play_list(home_page_episodes(), 0).unwrap();
    player.toggle_loop();

    for _ in 0..3 {
        assert_eq!(player.handle_episode_ended(), EpisodeEndAction::Repeat);
    }
    assert_eq!(player.current_episode_index(), 0);
}

#[test]
fn test_clear_then_play_again() {
    let mut player = Player::default();
    player.play_list(home_page_episodes(), 2).unwrap();

    player.clear_player_state();
    assert!(player.is_empty());
    assert_eq!(player.current_episode_index(), 0);

    player.play(create_episode("9", 30));
    assert_eq!(player.len(), 1);
    assert_eq!(player.current_episode_index(), 0);
}

#[test]
fn test_episode_list_from_api_json() {
    let json = r#"[
        {"title": "A", "members": "Diego", "thumbnail": "a.jpg", "duration": 100, "url": "a.m4a"},
        {"title": "B", "members": "Diego", "thumbnail": "b.jpg", "duration": 200, "url": "b.m4a"}
    ]"#;
    let episodes = Episode::list_from_json(json).unwrap();

    let mut player = Player::default();
    player.play_list(episodes, 1).unwrap();

    assert_eq!(player.snapshot().current_url(), Some("b.m4a"));
}
