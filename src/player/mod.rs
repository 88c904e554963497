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

//! Audio playback transport.
//!
//! This module provides [`AudioPlayer`], the [`Transport`] used by the
//! playlist controller. It manages a background worker thread that owns the
//! MPV context, so audio operations never block the UI thread.
//!
//! Playback position and duration are written by the worker into a shared
//! [`TransportClock`] that the controller reads synchronously. Everything
//! else the worker observes is reported as a [`TransportEvent`].

mod commands;
mod load;

use std::sync::{Arc, Mutex, mpsc};

use anyhow::Result;
use thiserror::Error;

use crate::{controller::Transport, events::AppEvent, player::commands::AudioPlayerCommand};

/// Why a request to start playback was turned down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum PlaybackError {
    #[error("no track is loaded")]
    NothingLoaded,
    #[error("audio file not found: {0}")]
    MissingSource(String),
    #[error("track failed to load: {0}")]
    LoadFailed(String),
    #[error("playback refused by the audio engine: {0}")]
    Refused(String),
}

/// Signals emitted by the transport worker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TransportEvent {
    /// The playback position moved, see [`TransportClock::position`].
    TimeUpdate,
    /// The duration of the loaded track became known.
    LoadedMetadata,
    /// Playback reached the natural end of the track.
    Ended,
    /// The loaded track could not be opened or decoded.
    Error(String),
    /// Outcome of the play request with id `request`. For a file that is
    /// still opening it arrives once the file has opened or failed.
    PlayOutcome {
        request: u64,
        outcome: Result<(), PlaybackError>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TransportClock {
    pub(crate) position: f64,
    pub(crate) duration: Option<f64>,
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    command_tx: mpsc::Sender<AudioPlayerCommand>,
    clock: Arc<Mutex<TransportClock>>,
    last_play_request: u64,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - Channel for transport events and worker failures.
    /// * `volume` - Initial volume, 0 to 100.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>, volume: u32) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();
        let clock = Arc::new(Mutex::new(TransportClock::default()));

        commands::spawn_player_worker(command_rx, event_tx, Arc::clone(&clock), volume);

        Self {
            command_tx,
            clock,
            last_play_request: 0,
        }
    }

    fn read_clock(&self) -> TransportClock {
        self.clock.lock().map(|c| *c).unwrap_or_default()
    }
}

impl Transport for AudioPlayer {
    fn load(&mut self, source: &str) -> Result<()> {
        // Forget the old track now, the worker ignores its remaining
        // position updates
        if let Ok(mut clock) = self.clock.lock() {
            *clock = TransportClock::default();
        }

        self.command_tx
            .send(AudioPlayerCommand::Load(source.to_string()))?;
        Ok(())
    }

    fn play(&mut self) -> Result<u64> {
        self.last_play_request += 1;
        self.command_tx
            .send(AudioPlayerCommand::Play(self.last_play_request))?;
        Ok(self.last_play_request)
    }

    fn pause(&mut self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Pause)?;
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        if let Ok(mut clock) = self.clock.lock() {
            clock.position = seconds;
        }

        self.command_tx.send(AudioPlayerCommand::SeekTo(seconds))?;
        Ok(())
    }

    fn position(&self) -> f64 {
        self.read_clock().position
    }

    fn duration(&self) -> Option<f64> {
        self.read_clock().duration
    }
}
