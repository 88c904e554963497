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

//! Worker-side bookkeeping for the loaded file.
//!
//! MPV opens files asynchronously: a `loadfile` returns straight away, and
//! the outcome arrives later as `StartFile` followed by `FileLoaded` or an
//! `EndFile` error. Events for the file being replaced may still be queued
//! behind a new `loadfile`. [`LoadedFile`] tracks which events belong to the
//! current source, and holds back a play request until the file has opened
//! so that decode failures are reported as rejections.

use std::path::Path;

use crate::player::PlaybackError;

#[derive(Debug, Default, PartialEq)]
enum LoadState {
    #[default]
    Opening,
    Ready,
    Failed(String),
}

/// What to do with a play request.
#[derive(Debug, PartialEq)]
pub(super) enum PlayDecision {
    /// Unpause now.
    Start,
    /// Answer straight away with this error.
    Reject(PlaybackError),
    /// Wait until the file has opened, see [`LoadedFile::take_deferred_play`].
    Defer,
}

#[derive(Debug, Default)]
pub(super) struct LoadedFile {
    source: Option<String>,
    state: LoadState,
    /// `loadfile` commands whose `StartFile` has not arrived yet.
    unstarted_loads: u32,
    deferred_play: Option<u64>,
}

impl LoadedFile {
    /// Records a `loadfile` for `source`. Any held back play request is
    /// dropped, it was for the previous file.
    pub(super) fn load(&mut self, source: String) {
        self.source = Some(source);
        self.state = LoadState::Opening;
        self.unstarted_loads = self.unstarted_loads.saturating_add(1);
        self.deferred_play = None;
    }

    pub(super) fn on_start_file(&mut self) {
        self.unstarted_loads = self.unstarted_loads.saturating_sub(1);
    }

    /// Marks the current source as opened. Returns `false` when the event
    /// belongs to a file that has since been replaced.
    pub(super) fn on_file_loaded(&mut self) -> bool {
        if !self.is_current() {
            return false;
        }
        self.state = LoadState::Ready;
        true
    }

    /// Records a load or decode failure. Returns `false` when it belongs to a
    /// file that has since been replaced.
    pub(super) fn on_load_error(&mut self, reason: &str) -> bool {
        if !self.is_current() || self.source.is_none() {
            return false;
        }
        self.state = LoadState::Failed(reason.to_string());
        true
    }

    /// Property changes are only meaningful once the current source is open,
    /// earlier ones describe the previous file.
    pub(super) fn accepts_properties(&self) -> bool {
        self.is_current() && self.state == LoadState::Ready
    }

    pub(super) fn request_play(&mut self, request: u64) -> PlayDecision {
        if let Err(e) = check_playable(self) {
            return PlayDecision::Reject(e);
        }

        match self.state {
            LoadState::Ready => PlayDecision::Start,
            _ => {
                self.deferred_play = Some(request);
                PlayDecision::Defer
            }
        }
    }

    pub(super) fn take_deferred_play(&mut self) -> Option<u64> {
        self.deferred_play.take()
    }

    fn is_current(&self) -> bool {
        self.unstarted_loads == 0
    }
}

/// Returns the source to play, or why it cannot be played.
///
/// URIs (anything with `://`) are left to MPV, only local paths are checked
/// for existence.
pub(super) fn check_playable(loaded: &LoadedFile) -> Result<&str, PlaybackError> {
    let source = loaded.source.as_deref().ok_or(PlaybackError::NothingLoaded)?;

    if let LoadState::Failed(reason) = &loaded.state {
        return Err(PlaybackError::LoadFailed(reason.clone()));
    }

    if !source.contains("://") && !Path::new(source).exists() {
        return Err(PlaybackError::MissingSource(source.to_string()));
    }

    Ok(source)
}
