//! Controller integration tests
//!
//! Drive the controller the way a page does: commands in, sink events in,
//! snapshots out.


use cadence_playback::{PlaybackConfig, PlaybackStatus, PlayerCommand, SinkEvent};
use test_helpers::*;

// ===== Library Loading =====

#[test]
fn test_example_scenario() {
    let (mut player, _) = player(&["A.mp3", "C.mp3", "B.mp3"]);
    assert_eq!(library_order(&player), ["A.mp3", "B.mp3", "C.mp3"]);

    player.play_track(2);
    assert_eq!(player.status(), PlaybackStatus::Playing(2));

    // Last track, nothing queued, no shuffle, no repeat
    player.advance();
    assert_eq!(player.status(), PlaybackStatus::Playing(2));

    player.toggle_repeat();
    player.advance();
    assert_eq!(player.status(), PlaybackStatus::Playing(0));
    assert_eq!(player.sink().opened().last(), Some(&"A.mp3"));
}

#[test]
fn test_non_audio_files_are_dropped() {
    let (mut player, renders) = player_with(PlaybackConfig::default(), 1);

    player.dispatch(PlayerCommand::LoadFiles(vec![
        audio("song.mp3"),
        picked("cover.jpg", "image/jpeg"),
        picked("notes.txt", "text/plain"),
        picked("live.flac", "audio/flac"),
    ]));

    assert_eq!(library_order(&player), ["live.flac", "song.mp3"]);
    let last = renders.borrow().last().cloned().unwrap();
    assert_eq!(last.stats.count, 2);
    assert_eq!(last.tracks.len(), 2);
}

#[test]
fn test_load_renders_first_track_loaded() {
    let (player, renders) = player(&["b.mp3", "a.mp3"]);

    let snapshot = renders.borrow().last().cloned().unwrap();
    assert_eq!(snapshot.state.current_index, Some(0));
    assert!(!snapshot.state.is_playing);
    assert_eq!(snapshot.now_playing.unwrap().display_name, "a");
    assert_eq!(player.sink().count(&SinkCall::Play), 0);
}

#[test]
fn test_reload_clears_queue() {
    let (mut player, _) = player(&["a.mp3", "b.mp3", "c.mp3"]);
    player.enqueue(2);

    player.load_library(audio_files(&["x.mp3", "y.mp3"]));

    assert!(player.queue().is_empty());
    assert_eq!(player.status(), PlaybackStatus::Loaded(0));
}

// ===== Navigation =====

#[test]
fn test_retreat_wraps_to_last() {
    let (mut player, _) = player(&["a.mp3", "b.mp3", "c.mp3"]);

    player.retreat();

    assert_eq!(player.status(), PlaybackStatus::Playing(2));
}

#[test]
fn test_retreat_single_track_replays() {
    let (mut player, _) = player(&["only.mp3"]);

    player.retreat();

    assert_eq!(player.status(), PlaybackStatus::Playing(0));
    assert_eq!(player.sink().opened(), ["only.mp3", "only.mp3"]);
}

#[test]
fn test_ended_walks_library_then_stops() {
    let (mut player, _) = player(&["a.mp3", "b.mp3", "c.mp3"]);
    player.toggle_play_pause();

    player.handle_sink_event(SinkEvent::Ended);
    player.handle_sink_event(SinkEvent::Ended);
    assert_eq!(player.status(), PlaybackStatus::Playing(2));

    player.handle_sink_event(SinkEvent::Ended);
    assert_eq!(player.status(), PlaybackStatus::Paused(2));
    assert_eq!(player.sink().opened(), ["a.mp3", "b.mp3", "c.mp3"]);
}

#[test]
fn test_ended_with_repeat_loops() {
    let config = PlaybackConfig {
        repeat: true,
        ..PlaybackConfig::default()
    };
    let (mut player, _) = player_with(config, 3);
    player.load_library(audio_files(&["a.mp3", "b.mp3"]));
    player.play_track(1);

    player.handle_sink_event(SinkEvent::Ended);

    assert_eq!(player.status(), PlaybackStatus::Playing(0));
}

#[test]
fn test_advance_without_library_is_ignored() {
    let (mut player, _) = player_with(PlaybackConfig::default(), 3);

    player.advance();
    player.retreat();
    player.handle_sink_event(SinkEvent::Ended);

    assert_eq!(player.status(), PlaybackStatus::Empty);
    assert!(player.sink().opened().is_empty());
}

// ===== Queue =====

#[test]
fn test_enqueue_current_is_noop() {
    let (mut player, renders) = player(&["a.mp3", "b.mp3"]);
    let before = renders.borrow().len();

    assert!(!player.enqueue(0));

    assert!(player.queue().is_empty());
    assert_eq!(renders.borrow().len(), before);
}

#[test]
fn test_enqueue_twice_keeps_one_entry() {
    let (mut player, _) = player(&["a.mp3", "b.mp3", "c.mp3"]);

    player.enqueue(2);
    player.enqueue(2);

    assert_eq!(player.queue().iter().collect::<Vec<_>>(), [2]);
}

#[test]
fn test_queue_beats_shuffle_and_repeat() {
    let (mut player, _) = player(&["a.mp3", "b.mp3", "c.mp3", "d.mp3"]);
    player.toggle_shuffle();
    player.toggle_repeat();
    player.enqueue(3);
    player.enqueue(1);

    player.advance();
    assert_eq!(player.status(), PlaybackStatus::Playing(3));

    player.advance();
    assert_eq!(player.status(), PlaybackStatus::Playing(1));
    assert!(player.queue().is_empty());
}

#[test]
fn test_queued_rows_are_marked() {
    let (mut player, renders) = player(&["a.mp3", "b.mp3", "c.mp3"]);

    player.dispatch(PlayerCommand::QueueTrack(1));

    let snapshot = renders.borrow().last().cloned().unwrap();
    assert!(snapshot.track(1).unwrap().is_queued);
    assert!(!snapshot.track(2).unwrap().is_queued);
    assert_eq!(snapshot.queue, [1]);
}

// ===== Shuffle & Repeat =====

#[test]
fn test_shuffle_never_repeats_current() {
    let (mut player, _) = player(&["a.mp3", "b.mp3"]);
    player.toggle_shuffle();
    player.play();

    for _ in 0..20 {
        let before = player.status().current_index();
        player.advance();
        assert_ne!(player.status().current_index(), before);
    }
}

#[test]
fn test_shuffle_single_track_replays() {
    let (mut player, _) = player(&["a.mp3"]);
    player.toggle_shuffle();
    player.play();

    player.advance();

    assert_eq!(player.status(), PlaybackStatus::Playing(0));
    assert_eq!(player.sink().opened().len(), 2);
}

#[test]
fn test_toggles_are_independent() {
    let (mut player, _) = player(&["a.mp3"]);

    player.toggle_shuffle();
    player.toggle_repeat();
    player.toggle_shuffle();

    let state = player.state();
    assert!(!state.is_shuffle);
    assert!(state.is_repeat);
}

// ===== Play/Pause =====

#[test]
fn test_play_pause_toggles() {
    let (mut player, _) = player(&["a.mp3"]);

    player.toggle_play_pause();
    assert!(player.state().is_playing);

    player.toggle_play_pause();
    assert_eq!(player.status(), PlaybackStatus::Paused(0));
    assert_eq!(player.sink().count(&SinkCall::Pause), 1);
}

#[test]
fn test_autoplay_rejection_keeps_view_playing() {
    let (mut player, renders) = player(&["a.mp3"]);
    player.sink_mut().fail_play = true;

    player.toggle_play_pause();

    assert!(renders.borrow().last().unwrap().state.is_playing);
}

// ===== Seek & Progress =====

#[test]
fn test_seek_after_metadata() {
    let (mut player, renders) = player(&["a.mp3"]);
    player.sink_mut().duration = Some(240.0);
    player.handle_sink_event(SinkEvent::DurationKnown(240.0));

    player.dispatch(PlayerCommand::Seek(0.5));

    assert_eq!(player.sink().calls.last(), Some(&SinkCall::Seek(120.0)));
    let snapshot = renders.borrow().last().cloned().unwrap();
    assert_eq!(snapshot.current_time_label, "2:00");
    assert_eq!(snapshot.duration_label, "4:00");
    assert_eq!(snapshot.progress_percent, 50.0);
}

#[test]
fn test_seek_before_metadata_is_ignored() {
    let (mut player, renders) = player(&["a.mp3"]);
    let before = renders.borrow().len();

    player.seek(0.5);

    assert!(!player
        .sink()
        .calls
        .iter()
        .any(|call| matches!(call, SinkCall::Seek(_))));
    assert_eq!(renders.borrow().len(), before);
}

#[test]
fn test_time_labels_follow_sink() {
    let (mut player, renders) = player(&["a.mp3"]);

    player.handle_sink_event(SinkEvent::DurationKnown(f64::NAN));
    assert_eq!(renders.borrow().last().unwrap().duration_label, "0:00");

    player.handle_sink_event(SinkEvent::DurationKnown(300.0));
    player.handle_sink_event(SinkEvent::TimeUpdate(125.7));

    let snapshot = renders.borrow().last().cloned().unwrap();
    assert_eq!(snapshot.current_time_label, "2:05");
    assert_eq!(snapshot.duration_label, "5:00");
}

// ===== Volume & Filter =====

#[test]
fn test_initial_volume_from_config() {
    let config = PlaybackConfig {
        volume: 40,
        ..PlaybackConfig::default()
    };
    let (player, renders) = player_with(config, 0);

    assert_eq!(player.sink().calls, [SinkCall::Volume(0.4)]);
    assert_eq!(renders.borrow()[0].volume_label, "40%");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PlaybackConfig {
        volume: 101,
        ..PlaybackConfig::default()
    };
    let (view, _) = recording_view();

    let result = cadence_playback::PlaybackController::new(FakeSink::default(), view, config);

    assert!(matches!(
        result,
        Err(cadence_playback::PlaybackError::InvalidVolume(101))
    ));
}

#[test]
fn test_filter_hides_rows_but_not_stats() {
    let (mut player, renders) = player(&["Morning.mp3", "Evening.mp3", "Mornington.mp3"]);

    player.dispatch(PlayerCommand::Filter("MORN".to_string()));

    let snapshot = renders.borrow().last().cloned().unwrap();
    let names: Vec<&str> = snapshot
        .tracks
        .iter()
        .map(|row| row.display_name.as_str())
        .collect();
    assert_eq!(names, ["Morning", "Mornington"]);
    assert_eq!(snapshot.stats.count, 3);
}

#[test]
fn test_every_command_renders() {
    let (mut player, renders) = player(&["a.mp3", "b.mp3", "c.mp3"]);
    let mut expected = renders.borrow().len();

    let commands = vec![
        PlayerCommand::PlayPause,
        PlayerCommand::Next,
        PlayerCommand::Previous,
        PlayerCommand::ToggleShuffle,
        PlayerCommand::ToggleRepeat,
        PlayerCommand::SetVolume(10),
        PlayerCommand::Filter("a".to_string()),
        PlayerCommand::SelectTrack(2),
        PlayerCommand::QueueTrack(0),
    ];

    for command in commands {
        player.dispatch(command);
        expected += 1;
        assert_eq!(renders.borrow().len(), expected);
    }
}
