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

//! MPV-backed transport worker.
//!
//! The worker alternates between two duties:
//! 1. **Commands**: drains [`AudioPlayerCommand`]s sent by [`AudioPlayer`]
//!    (load, play, pause, seek).
//! 2. **MPV events**: observes the properties it cares about, keeps the shared
//!    [`TransportClock`] current, and forwards [`TransportEvent`]s to the UI.
//!
//! A play request for a file that is still opening is answered only once MPV
//! reports `FileLoaded` or a load error, see [`LoadedFile`].
//!
//! MPV runs with `keep-open` so that a finished track stays loaded at its end
//! position, which lets repeat seek back to zero and play again without a
//! reload. The end of a track is then detected through `eof-reached`.
//!
//! [`AudioPlayer`]: crate::player::AudioPlayer

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::{
        Arc, Mutex,
        mpsc::{Receiver, Sender},
    },
    thread,
};
use tracing::{debug, error};

use crate::{
    events::AppEvent,
    player::{
        PlaybackError, TransportClock, TransportEvent,
        load::{LoadedFile, PlayDecision},
    },
};

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    Load(String),
    /// A play request, answered with a [`TransportEvent::PlayOutcome`]
    /// carrying the same id.
    Play(u64),
    Pause,
    SeekTo(f64),
}

/// Spawns the audio worker thread.
///
/// If the worker returns an error it is broadcast as a fatal application
/// event, there is no way to play anything without it.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
    clock: Arc<Mutex<TransportClock>>,
    volume: u32,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx, clock, volume) {
            error!("MPV worker failure: {:?}", e);
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
    clock: Arc<Mutex<TransportClock>>,
    volume: u32,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder
            .set_option("keep-open", "yes")
            .context("Failed to set keep-open")?;
        builder
            .set_option("volume", volume.min(100).to_string().as_str())
            .context("Failed to set initial volume")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("eof-reached", 0)
        .context("Failed to observe eof-reached")?;

    let mut loaded = LoadedFile::default();

    loop {
        process_commands(&mut handler, &command_rx, &event_tx, &mut loaded)?;
        process_mpv_events(&mut handler, &clock, &event_tx, &mut loaded)?;
    }
}

/// Drains and executes all pending transport commands.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
    loaded: &mut LoadedFile,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        match command {
            AudioPlayerCommand::Load(source) => {
                // Loading never starts playback on its own
                handler.set_property("pause", true)?;
                handler
                    .command(&["loadfile", &source, "replace"])
                    .with_context(|| format!("Failed to load file: {}", &source))?;
                debug!(%source, "Loading file");
                loaded.load(source);
            }
            AudioPlayerCommand::Play(request) => match loaded.request_play(request) {
                PlayDecision::Start => {
                    send_play_outcome(event_tx, request, unpause(handler))?;
                }
                PlayDecision::Reject(e) => send_play_outcome(event_tx, request, Err(e))?,
                PlayDecision::Defer => debug!(request, "Play held until the file opens"),
            },
            AudioPlayerCommand::Pause => {
                loaded.take_deferred_play();
                handler.set_property("pause", true)?;
            }
            AudioPlayerCommand::SeekTo(seconds) => {
                handler.command(&["seek", &seconds.to_string(), "absolute"])?;
            }
        }
    }

    Ok(())
}

fn unpause(handler: &mut mpv::MpvHandler) -> std::result::Result<(), PlaybackError> {
    handler
        .set_property("pause", false)
        .map_err(|e| PlaybackError::Refused(format!("{:?}", e)))
}

fn send_play_outcome(
    event_tx: &Sender<AppEvent>,
    request: u64,
    outcome: std::result::Result<(), PlaybackError>,
) -> Result<()> {
    event_tx
        .send(AppEvent::Transport(TransportEvent::PlayOutcome {
            request,
            outcome,
        }))
        .context("Failed to send play outcome")
}

/// Polls for an MPV event for up to 50ms and forwards what it means.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    clock: &Arc<Mutex<TransportClock>>,
    event_tx: &Sender<AppEvent>,
    loaded: &mut LoadedFile,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(0.05) else {
        return Ok(());
    };

    let transport_event = match mpv_event {
        mpv::Event::StartFile => {
            loaded.on_start_file();
            None
        }
        mpv::Event::FileLoaded => {
            if !loaded.on_file_loaded() {
                return Ok(());
            }
            if let Some(request) = loaded.take_deferred_play() {
                send_play_outcome(event_tx, request, unpause(handler))?;
            }
            // The duration may have been announced before the file counted as open
            match handler.get_property::<f64>("duration") {
                Ok(duration) if duration.is_finite() && duration > 0.0 => {
                    update_clock(clock, |c| c.duration = Some(duration));
                    Some(TransportEvent::LoadedMetadata)
                }
                _ => None,
            }
        }
        mpv::Event::PropertyChange { .. } if !loaded.accepts_properties() => None,
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) if duration.is_finite() && duration > 0.0 => {
                update_clock(clock, |c| c.duration = Some(duration));
                Some(TransportEvent::LoadedMetadata)
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                update_clock(clock, |c| c.position = seconds);
                Some(TransportEvent::TimeUpdate)
            }
            ("eof-reached", Format::Flag(true)) => Some(TransportEvent::Ended),
            _ => None,
        },
        mpv::Event::EndFile(Err(e)) => load_failed(event_tx, loaded, format!("{:?}", e))?,
        mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_ERROR)) => {
            load_failed(event_tx, loaded, String::from("decoder error"))?
        }
        _ => None,
    };

    if let Some(event) = transport_event {
        event_tx
            .send(AppEvent::Transport(event))
            .context("Failed to send transport event")?;
    }

    Ok(())
}

/// Records a failure of the current file and rejects any play request held
/// back for it.
fn load_failed(
    event_tx: &Sender<AppEvent>,
    loaded: &mut LoadedFile,
    reason: String,
) -> Result<Option<TransportEvent>> {
    if !loaded.on_load_error(&reason) {
        debug!(%reason, "Ignoring failure of a replaced file");
        return Ok(None);
    }

    if let Some(request) = loaded.take_deferred_play() {
        send_play_outcome(
            event_tx,
            request,
            Err(PlaybackError::LoadFailed(reason.clone())),
        )?;
    }

    Ok(Some(TransportEvent::Error(reason)))
}

fn update_clock(clock: &Arc<Mutex<TransportClock>>, f: impl FnOnce(&mut TransportClock)) {
    if let Ok(mut c) = clock.lock() {
        f(&mut c);
    }
}
