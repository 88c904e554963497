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

//! Playlist transport control.
//!
//! The [`Controller`] owns the playlist, the current track index and the
//! shuffle and repeat modes. It turns user actions (play, next, seek and so
//! on) and transport signals (time update, end of track, errors) into
//! transport commands and display updates.
//!
//! It talks to the outside world through three seams so that it can be
//! exercised without an audio device or a terminal:
//!
//! * [`Transport`]: the playback engine, [`crate::player::AudioPlayer`] in the
//!   application.
//! * [`PlayerView`]: the display, [`crate::panel::PanelView`] in the
//!   application.
//! * [`TrackPicker`]: random track selection for shuffle.

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use rand::{rng, seq::IteratorRandom};
use tracing::{debug, error, info, warn};

use crate::{model::Playlist, player::PlaybackError, util::format::format_time};

/// Within this many seconds of the start, "previous" moves to the previous
/// track instead of restarting the current one.
const RESTART_THRESHOLD_SECS: f64 = 3.0;

pub(crate) const PLAY_FAILED_MESSAGE: &str =
    "Unable to play music. Please check the music files in the musics folder.";

pub(crate) const LOAD_FAILED_TITLE: &str = "Error loading track";

/// The playback engine driven by the controller.
///
/// Commands are requests: `play` in particular completes asynchronously, its
/// outcome is reported back through [`Controller::on_play_outcome`].
pub(crate) trait Transport {
    fn load(&mut self, source: &str) -> Result<()>;

    /// Requests playback, returning the id its outcome will be tagged with.
    /// Ids increase with every request.
    fn play(&mut self) -> Result<u64>;
    fn pause(&mut self) -> Result<()>;
    fn seek_to(&mut self, seconds: f64) -> Result<()>;

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Track duration in seconds, `None` until the metadata is loaded.
    fn duration(&self) -> Option<f64>;
}

/// Toggle-style controls whose "active" marker the controller maintains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Toggle {
    PlayPause,
    Shuffle,
    Repeat,
}

/// The display surface updated by the controller.
pub(crate) trait PlayerView {
    fn set_title(&mut self, title: &str);
    fn set_progress_fraction(&mut self, fraction: f64);
    fn set_times(&mut self, elapsed: &str, duration: &str);
    fn set_duration(&mut self, duration: &str);
    fn mark_row_active(&mut self, index: usize);
    fn set_toggle_state(&mut self, toggle: Toggle, active: bool);

    /// Shows a blocking notification that the user has to dismiss.
    fn notify(&mut self, message: &str);
}

/// Chooses the next track when shuffle is on.
pub(crate) trait TrackPicker {
    /// Returns an index in `0..len`, different from `current` whenever
    /// `len > 1`.
    fn pick(&mut self, len: usize, current: usize) -> usize;
}

/// Uniform random choice among all tracks other than the current one.
pub(crate) struct RandomPicker;

impl TrackPicker for RandomPicker {
    fn pick(&mut self, len: usize, current: usize) -> usize {
        (0..len)
            .filter(|&i| i != current)
            .choose(&mut rng())
            .unwrap_or(current)
    }
}

pub(crate) struct Controller<T, V> {
    playlist: Playlist,
    transport: T,
    view: V,
    picker: Box<dyn TrackPicker>,

    current_index: usize,
    is_playing: bool,
    is_shuffle_on: bool,
    is_repeat_on: bool,

    /// The play request whose outcome is still awaited. Outcomes for any
    /// other request are stale.
    pending_play: Option<u64>,
}

impl<T: Transport, V: PlayerView> Controller<T, V> {
    /// Creates the controller and loads the first track, paused.
    pub(crate) fn new(
        playlist: Playlist,
        transport: T,
        view: V,
        picker: Box<dyn TrackPicker>,
    ) -> Result<Self> {
        let mut controller = Self {
            playlist,
            transport,
            view,
            picker,
            current_index: 0,
            is_playing: false,
            is_shuffle_on: false,
            is_repeat_on: false,
            pending_play: None,
        };

        controller.load_track(0)?;

        Ok(controller)
    }

    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn is_shuffle_on(&self) -> bool {
        self.is_shuffle_on
    }

    pub(crate) fn is_repeat_on(&self) -> bool {
        self.is_repeat_on
    }

    /// Points the transport at the track at `index` and resets the display
    /// for it. Play/pause state is left alone.
    pub(crate) fn load_track(&mut self, index: usize) -> Result<()> {
        let track = self
            .playlist
            .get(index)
            .with_context(|| format!("Track index {} out of range", index))?;

        self.transport
            .load(&track.source)
            .with_context(|| format!("Failed to load track: {}", track.source))?;
        self.current_index = index;

        debug!(index, name = %track.name, "Loaded track");

        self.view.set_progress_fraction(0.0);
        self.view.set_title(&track.name);
        self.view.mark_row_active(index);

        Ok(())
    }

    /// Requests playback of the loaded track.
    ///
    /// The toggle is marked straight away; a rejection arriving later through
    /// [`Self::on_play_outcome`] reverts it.
    pub(crate) fn play(&mut self) -> Result<()> {
        let request = self.transport.play()?;
        self.pending_play = Some(request);
        self.is_playing = true;
        self.view.set_toggle_state(Toggle::PlayPause, true);

        Ok(())
    }

    pub(crate) fn pause(&mut self) -> Result<()> {
        self.transport.pause()?;
        self.pending_play = None;
        self.is_playing = false;
        self.view.set_toggle_state(Toggle::PlayPause, false);

        Ok(())
    }

    pub(crate) fn toggle_play_pause(&mut self) -> Result<()> {
        if self.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    pub(crate) fn next_track(&mut self) -> Result<()> {
        self.advance(self.is_playing)
    }

    pub(crate) fn previous_track(&mut self) -> Result<()> {
        if self.transport.position() > RESTART_THRESHOLD_SECS {
            return self.transport.seek_to(0.0);
        }

        let len = self.playlist.len();
        let index = (self.current_index + len - 1) % len;
        let resume = self.is_playing;

        self.load_track(index)?;
        if resume {
            self.play()?;
        }

        Ok(())
    }

    /// Jumps straight to `index` and starts playing it.
    pub(crate) fn select_track(&mut self, index: usize) -> Result<()> {
        self.load_track(index)?;
        self.play()
    }

    pub(crate) fn toggle_shuffle(&mut self) {
        self.is_shuffle_on = !self.is_shuffle_on;
        self.view.set_toggle_state(Toggle::Shuffle, self.is_shuffle_on);
    }

    pub(crate) fn toggle_repeat(&mut self) {
        self.is_repeat_on = !self.is_repeat_on;
        self.view.set_toggle_state(Toggle::Repeat, self.is_repeat_on);
    }

    /// Seeks to `ratio` of the way through the track. Does nothing until the
    /// duration is known.
    pub(crate) fn seek(&mut self, ratio: f64) -> Result<()> {
        match self.known_duration() {
            Some(duration) => self.transport.seek_to(ratio.clamp(0.0, 1.0) * duration),
            None => Ok(()),
        }
    }

    pub(crate) fn on_time_update(&mut self) {
        let position = self.transport.position();
        let duration = self.known_duration();

        let fraction = duration.map_or(0.0, |d| (position / d).clamp(0.0, 1.0));

        self.view.set_progress_fraction(fraction);
        self.view.set_times(
            &format_time(position),
            &format_time(duration.unwrap_or(f64::NAN)),
        );
    }

    pub(crate) fn on_loaded_metadata(&mut self) {
        let duration = self.known_duration().unwrap_or(f64::NAN);
        self.view.set_duration(&format_time(duration));
    }

    pub(crate) fn on_ended(&mut self) -> Result<()> {
        if self.is_repeat_on {
            self.transport.seek_to(0.0)?;
            self.play()
        } else {
            // Playback has just stopped on its own, carry on with the next one
            self.advance(true)
        }
    }

    pub(crate) fn on_playback_error(&mut self, reason: &str) {
        error!(index = self.current_index, "Playback error: {}", reason);
        self.view.set_title(LOAD_FAILED_TITLE);
    }

    /// Settles the play request `request`. Outcomes of requests that were
    /// superseded by a later play or a pause are ignored.
    pub(crate) fn on_play_outcome(&mut self, request: u64, outcome: Result<(), PlaybackError>) {
        if self.pending_play != Some(request) {
            debug!(request, pending = ?self.pending_play, "Ignoring stale play outcome");
            return;
        }
        self.pending_play = None;

        match outcome {
            Ok(()) => {
                info!(index = self.current_index, "Playback started");
                self.is_playing = true;
                self.view.set_toggle_state(Toggle::PlayPause, true);
            }
            Err(e) => {
                warn!(index = self.current_index, "Playback rejected: {}", e);
                self.is_playing = false;
                self.view.set_toggle_state(Toggle::PlayPause, false);
                self.view.notify(PLAY_FAILED_MESSAGE);
            }
        }
    }

    fn advance(&mut self, resume: bool) -> Result<()> {
        let len = self.playlist.len();
        let index = if self.is_shuffle_on {
            self.picker.pick(len, self.current_index)
        } else {
            (self.current_index + 1) % len
        };

        self.load_track(index)?;
        if resume {
            self.play()?;
        }

        Ok(())
    }

    fn known_duration(&self) -> Option<f64> {
        self.transport
            .duration()
            .filter(|d| d.is_finite() && *d > 0.0)
    }
}
