// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::VecDeque;

use anyhow::Result;

use super::*;
use crate::model::Track;

#[derive(Default)]
struct FakeTransport {
    loaded: Vec<String>,
    playing: bool,
    play_requests: u64,
    position: f64,
    duration: Option<f64>,
    seeks: Vec<f64>,
}

impl Transport for FakeTransport {
    fn load(&mut self, source: &str) -> Result<()> {
        self.loaded.push(source.to_string());
        self.position = 0.0;
        self.duration = None;
        Ok(())
    }

    fn play(&mut self) -> Result<u64> {
        self.playing = true;
        self.play_requests += 1;
        Ok(self.play_requests)
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.position = seconds;
        self.seeks.push(seconds);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

#[derive(Default)]
struct RecordingView {
    title: String,
    fraction: f64,
    elapsed: String,
    duration: String,
    active_row: Option<usize>,
    toggles: Vec<(Toggle, bool)>,
    notifications: Vec<String>,
}

impl RecordingView {
    fn toggle(&self, toggle: Toggle) -> Option<bool> {
        self.toggles
            .iter()
            .rev()
            .find(|(t, _)| *t == toggle)
            .map(|(_, active)| *active)
    }
}

impl PlayerView for RecordingView {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_progress_fraction(&mut self, fraction: f64) {
        self.fraction = fraction;
    }

    fn set_times(&mut self, elapsed: &str, duration: &str) {
        self.elapsed = elapsed.to_string();
        self.duration = duration.to_string();
    }

    fn set_duration(&mut self, duration: &str) {
        self.duration = duration.to_string();
    }

    fn mark_row_active(&mut self, index: usize) {
        self.active_row = Some(index);
    }

    fn set_toggle_state(&mut self, toggle: Toggle, active: bool) {
        self.toggles.push((toggle, active));
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// Returns scripted picks, then falls back to the current index.
struct ScriptedPicker(VecDeque<usize>);

impl TrackPicker for ScriptedPicker {
    fn pick(&mut self, _len: usize, current: usize) -> usize {
        self.0.pop_front().unwrap_or(current)
    }
}

type TestController = Controller<FakeTransport, RecordingView>;

fn playlist(len: usize) -> Playlist {
    let tracks = (0..len)
        .map(|i| Track::new(format!("Song {}", i), format!("song{}.mp3", i)))
        .collect();
    Playlist::new(tracks).unwrap()
}

fn controller_with(len: usize, picker: Box<dyn TrackPicker>) -> TestController {
    Controller::new(
        playlist(len),
        FakeTransport::default(),
        RecordingView::default(),
        picker,
    )
    .unwrap()
}

fn controller(len: usize) -> TestController {
    controller_with(len, Box::new(RandomPicker))
}

fn at_index(len: usize, index: usize) -> TestController {
    let mut c = controller(len);
    c.load_track(index).unwrap();
    c
}

#[test]
fn starts_on_first_track_paused() {
    let c = controller(3);

    assert_eq!(c.current_index(), 0);
    assert!(!c.is_playing());
    assert!(!c.is_shuffle_on());
    assert!(!c.is_repeat_on());
    assert_eq!(c.transport().loaded, vec!["song0.mp3"]);
    assert_eq!(c.transport().play_requests, 0);
    assert_eq!(c.view().title, "Song 0");
    assert_eq!(c.view().active_row, Some(0));
}

#[test]
fn load_track_resets_display_without_playing() {
    let mut c = controller(3);
    c.view_mut().fraction = 0.6;

    c.load_track(2).unwrap();

    assert_eq!(c.current_index(), 2);
    assert_eq!(c.view().fraction, 0.0);
    assert_eq!(c.view().title, "Song 2");
    assert_eq!(c.view().active_row, Some(2));
    assert_eq!(c.transport().loaded.last().map(String::as_str), Some("song2.mp3"));
    assert!(!c.transport().playing);
}

#[test]
fn load_track_out_of_range_is_an_error() {
    let mut c = controller(2);

    assert!(c.load_track(2).is_err());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn play_pause_toggle() {
    let mut c = controller(2);

    c.toggle_play_pause().unwrap();
    assert!(c.is_playing());
    assert!(c.transport().playing);
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(true));

    c.toggle_play_pause().unwrap();
    assert!(!c.is_playing());
    assert!(!c.transport().playing);
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(false));
}

#[test]
fn rapid_toggles_end_on_last_intent() {
    let mut c = controller(2);

    for _ in 0..7 {
        c.toggle_play_pause().unwrap();
    }

    assert!(c.is_playing());
    assert!(c.transport().playing);
}

#[test]
fn next_track_wraps_sequentially() {
    for start in 0..5 {
        let mut c = at_index(5, start);
        c.next_track().unwrap();
        assert_eq!(c.current_index(), (start + 1) % 5);
    }

    let mut c = at_index(5, 4);
    c.next_track().unwrap();
    assert_eq!(c.current_index(), 0);
}

#[test]
fn next_track_keeps_paused_state() {
    let mut c = controller(3);

    c.next_track().unwrap();

    assert_eq!(c.current_index(), 1);
    assert!(!c.is_playing());
    assert_eq!(c.transport().play_requests, 0);
}

#[test]
fn next_track_resumes_when_playing() {
    let mut c = controller(3);
    c.play().unwrap();

    c.next_track().unwrap();

    assert_eq!(c.current_index(), 1);
    assert!(c.is_playing());
    assert_eq!(c.transport().play_requests, 2);
    assert_eq!(c.transport().loaded.last().map(String::as_str), Some("song1.mp3"));
}

#[test]
fn shuffle_never_repeats_current_track() {
    let mut c = controller(5);
    c.toggle_shuffle();

    for _ in 0..200 {
        let before = c.current_index();
        c.next_track().unwrap();
        assert_ne!(c.current_index(), before);
        assert!(c.current_index() < 5);
    }
}

#[test]
fn shuffle_with_single_track_stays_put() {
    let mut c = controller(1);
    c.toggle_shuffle();

    c.next_track().unwrap();

    assert_eq!(c.current_index(), 0);
    assert_eq!(c.transport().loaded.len(), 2);
}

#[test]
fn shuffle_uses_picker() {
    let mut c = controller_with(5, Box::new(ScriptedPicker(VecDeque::from([3, 1]))));
    c.toggle_shuffle();

    c.next_track().unwrap();
    assert_eq!(c.current_index(), 3);

    c.next_track().unwrap();
    assert_eq!(c.current_index(), 1);
}

#[test]
fn random_picker_covers_all_other_tracks() {
    let mut picker = RandomPicker;
    let mut seen = [false; 4];

    for _ in 0..500 {
        let pick = picker.pick(4, 2);
        assert_ne!(pick, 2);
        seen[pick] = true;
    }

    assert_eq!(seen, [true, true, false, true]);
    assert_eq!(picker.pick(1, 0), 0);
}

#[test]
fn previous_after_three_seconds_restarts_track() {
    let mut c = at_index(4, 2);
    c.transport_mut().position = 42.0;

    c.previous_track().unwrap();

    assert_eq!(c.current_index(), 2);
    assert_eq!(c.transport().position, 0.0);
    assert_eq!(c.transport().seeks, vec![0.0]);
}

#[test]
fn previous_near_start_wraps_to_last() {
    let mut c = controller(4);
    c.transport_mut().position = 3.0;

    c.previous_track().unwrap();

    assert_eq!(c.current_index(), 3);
    assert!(c.transport().seeks.is_empty());
}

#[test]
fn previous_ignores_shuffle_and_resumes_when_playing() {
    let mut c = controller_with(5, Box::new(ScriptedPicker(VecDeque::from([4]))));
    c.toggle_shuffle();
    c.load_track(2).unwrap();
    c.play().unwrap();

    c.previous_track().unwrap();

    assert_eq!(c.current_index(), 1);
    assert!(c.is_playing());
    assert_eq!(c.transport().play_requests, 2);
}

#[test]
fn previous_while_paused_stays_paused() {
    let mut c = at_index(3, 1);

    c.previous_track().unwrap();

    assert_eq!(c.current_index(), 0);
    assert_eq!(c.transport().play_requests, 0);
}

#[test]
fn mode_toggles_are_involutions() {
    let mut c = controller(3);

    c.toggle_shuffle();
    assert!(c.is_shuffle_on());
    assert_eq!(c.view().toggle(Toggle::Shuffle), Some(true));
    c.toggle_shuffle();
    assert!(!c.is_shuffle_on());
    assert_eq!(c.view().toggle(Toggle::Shuffle), Some(false));

    c.toggle_repeat();
    assert!(c.is_repeat_on());
    c.toggle_repeat();
    assert!(!c.is_repeat_on());
    assert_eq!(c.view().toggle(Toggle::Repeat), Some(false));

    assert_eq!(c.current_index(), 0);
    assert_eq!(c.transport().loaded.len(), 1);
    assert!(!c.is_playing());
}

#[test]
fn seek_scales_by_duration() {
    let mut c = controller(2);
    c.transport_mut().duration = Some(200.0);

    for ratio in [0.0, 0.25, 0.5, 1.0] {
        c.seek(ratio).unwrap();
        assert_eq!(c.transport().position, ratio * 200.0);
    }
}

#[test]
fn seek_without_duration_is_a_no_op() {
    let mut c = controller(2);
    c.transport_mut().position = 12.0;

    c.seek(0.5).unwrap();
    c.transport_mut().duration = Some(f64::NAN);
    c.seek(0.5).unwrap();

    assert!(c.transport().seeks.is_empty());
    assert_eq!(c.transport().position, 12.0);
}

#[test]
fn time_update_refreshes_progress_and_times() {
    let mut c = controller(2);
    c.transport_mut().duration = Some(200.0);
    c.transport_mut().position = 65.0;

    c.on_time_update();

    assert_eq!(c.view().fraction, 65.0 / 200.0);
    assert_eq!(c.view().elapsed, "1:05");
    assert_eq!(c.view().duration, "3:20");
}

#[test]
fn time_update_before_metadata() {
    let mut c = controller(2);
    c.transport_mut().position = 9.0;

    c.on_time_update();

    assert_eq!(c.view().fraction, 0.0);
    assert_eq!(c.view().elapsed, "0:09");
    assert_eq!(c.view().duration, "0:00");
}

#[test]
fn loaded_metadata_sets_duration_text() {
    let mut c = controller(2);
    c.transport_mut().duration = Some(600.0);

    c.on_loaded_metadata();

    assert_eq!(c.view().duration, "10:00");
}

#[test]
fn ended_with_repeat_restarts_same_track() {
    let mut c = at_index(3, 1);
    c.play().unwrap();
    c.toggle_repeat();
    c.transport_mut().duration = Some(180.0);
    c.transport_mut().position = 180.0;
    c.transport_mut().playing = false;

    c.on_ended().unwrap();

    assert_eq!(c.current_index(), 1);
    assert_eq!(c.transport().position, 0.0);
    assert!(c.transport().playing);
    assert!(c.is_playing());
    assert_eq!(c.transport().loaded.len(), 2);
}

#[test]
fn ended_without_repeat_advances_and_keeps_playing() {
    let mut c = at_index(3, 1);
    c.play().unwrap();
    c.transport_mut().playing = false;

    c.on_ended().unwrap();

    assert_eq!(c.current_index(), 2);
    assert!(c.is_playing());
    assert!(c.transport().playing);
}

#[test]
fn ended_wraps_around_the_playlist() {
    let mut c = at_index(3, 2);

    c.on_ended().unwrap();

    assert_eq!(c.current_index(), 0);
    assert!(c.is_playing());
}

#[test]
fn ended_with_shuffle_picks_a_different_track() {
    let mut c = controller_with(4, Box::new(ScriptedPicker(VecDeque::from([3]))));
    c.toggle_shuffle();

    c.on_ended().unwrap();

    assert_eq!(c.current_index(), 3);
    assert!(c.is_playing());
}

#[test]
fn rejected_start_reverts_to_paused_and_notifies() {
    let mut c = controller(2);
    c.play().unwrap();
    let request = c.transport().play_requests;

    c.on_play_outcome(
        request,
        Err(PlaybackError::MissingSource(String::from("song0.mp3"))),
    );

    assert!(!c.is_playing());
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(false));
    assert_eq!(c.view().notifications, vec![PLAY_FAILED_MESSAGE]);
}

#[test]
fn accepted_start_keeps_playing() {
    let mut c = controller(2);
    c.play().unwrap();
    let request = c.transport().play_requests;

    c.on_play_outcome(request, Ok(()));

    assert!(c.is_playing());
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(true));
    assert!(c.view().notifications.is_empty());
}

#[test]
fn outcome_of_a_superseded_play_is_ignored() {
    let mut c = controller(2);
    c.play().unwrap();
    let first = c.transport().play_requests;
    c.next_track().unwrap();
    let second = c.transport().play_requests;

    c.on_play_outcome(
        first,
        Err(PlaybackError::MissingSource(String::from("song0.mp3"))),
    );
    c.on_play_outcome(second, Ok(()));

    assert_eq!(c.current_index(), 1);
    assert!(c.is_playing());
    assert_eq!(c.is_playing(), c.transport().playing);
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(true));
    assert!(c.view().notifications.is_empty());
}

#[test]
fn rejection_of_the_latest_play_still_applies_after_an_older_success() {
    let mut c = controller(3);
    c.play().unwrap();
    let first = c.transport().play_requests;
    c.next_track().unwrap();
    let second = c.transport().play_requests;

    c.on_play_outcome(first, Ok(()));
    assert!(c.is_playing());

    c.on_play_outcome(
        second,
        Err(PlaybackError::LoadFailed(String::from("decoder error"))),
    );

    assert!(!c.is_playing());
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(false));
    assert_eq!(c.view().notifications, vec![PLAY_FAILED_MESSAGE]);
}

#[test]
fn late_success_after_pause_does_not_resume() {
    let mut c = controller(2);
    c.play().unwrap();
    let request = c.transport().play_requests;
    c.pause().unwrap();

    c.on_play_outcome(request, Ok(()));

    assert!(!c.is_playing());
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(false));
}

#[test]
fn decode_failure_of_a_selected_track_is_a_rejection() {
    let mut c = controller(4);

    c.select_track(2).unwrap();
    let request = c.transport().play_requests;
    c.on_playback_error("decoder error");
    c.on_play_outcome(
        request,
        Err(PlaybackError::LoadFailed(String::from("decoder error"))),
    );

    assert_eq!(c.current_index(), 2);
    assert!(!c.is_playing());
    assert_eq!(c.view().title, LOAD_FAILED_TITLE);
    assert_eq!(c.view().toggle(Toggle::PlayPause), Some(false));
    assert_eq!(c.view().notifications, vec![PLAY_FAILED_MESSAGE]);
}

#[test]
fn playback_error_replaces_title_without_advancing() {
    let mut c = at_index(3, 1);

    c.on_playback_error("decoder error");

    assert_eq!(c.view().title, LOAD_FAILED_TITLE);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.transport().loaded.len(), 2);
}

#[test]
fn select_track_jumps_and_plays() {
    let mut c = controller(5);

    c.select_track(3).unwrap();

    assert_eq!(c.current_index(), 3);
    assert!(c.is_playing());
    assert_eq!(c.view().active_row, Some(3));
}
