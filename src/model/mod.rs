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

//! Domain models.
//!
//! A [`Playlist`] is the fixed, ordered list of [`Track`]s the player cycles
//! through. It is built once at startup and never changes afterwards.

use thiserror::Error;

/// One playable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    /// Name shown in the title display and the playlist rows.
    pub(crate) name: String,
    /// Path or URI handed to the transport.
    pub(crate) source: String,
}

impl Track {
    pub(crate) fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PlaylistError {
    #[error("the playlist must contain at least one track")]
    Empty,
}

/// An ordered, non-empty sequence of tracks.
#[derive(Debug, Clone)]
pub(crate) struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub(crate) fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }

        Ok(Self { tracks })
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
