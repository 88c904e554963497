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

//! Application configuration.
//!
//! This module manages the application configuration file. Every field has a
//! default, so a partial file (or no file at all) still gives a working
//! player with the stock wedding playlist.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{Playlist, PlaylistError, Track};

const CONFIG_NAME: &str = "vowtune";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackConfig {
    pub(crate) name: String,
    pub(crate) file: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Initial transport volume, 0 to 100.
    pub(crate) volume: u32,
    /// Base directory for relative track files.
    pub(crate) music_dir: Option<PathBuf>,
    pub(crate) greeting: String,
    pub(crate) greeting_interval_secs: u64,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) tracks: Vec<TrackConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            volume: 70,
            music_dir: None,
            greeting: String::from("HAPPY WEDDING"),
            greeting_interval_secs: 30,
            log_file: None,
            tracks: default_tracks(),
        }
    }
}

fn default_tracks() -> Vec<TrackConfig> {
    [
        ("Lễ Đường", "musics_cut/Lễ Đường (mp3cut.net).mp3"),
        ("50 Năm Về Sau", "musics_cut/50 Năm Về Sau (2) (mp3cut.net).mp3"),
        ("Dù Một Ngày Hay Trăm Năm", "musics_cut/mot ngay hay tram nam (mp3cut.net).mp3"),
        ("Nơi Ấy Con Tìm Về", "musics_cut/Nơi Ấy Con Tìm Về (mp3cut.net).mp3"),
        ("Ngày Chung Đôi", "musics_cut/Ngay-Chung-Doi-Van-Mai-Huong (mp3cut.net).mp3"),
    ]
    .into_iter()
    .map(|(name, file)| TrackConfig {
        name: name.to_string(),
        file: file.to_string(),
    })
    .collect()
}

impl AppConfig {
    /// Builds the playlist, resolving relative files against `music_dir`.
    pub(crate) fn playlist(&self) -> Result<Playlist, PlaylistError> {
        let tracks = self
            .tracks
            .iter()
            .map(|t| Track::new(t.name.clone(), self.resolve_source(&t.file)))
            .collect();

        Playlist::new(tracks)
    }

    pub(crate) fn greeting_interval(&self) -> Duration {
        Duration::from_secs(self.greeting_interval_secs.max(1))
    }

    fn resolve_source(&self, file: &str) -> String {
        match &self.music_dir {
            Some(dir) if !file.contains("://") && Path::new(file).is_relative() => {
                dir.join(file).to_string_lossy().into_owned()
            }
            _ => file.to_string(),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    })
}

#[cfg(test)]
pub(crate) fn load_config_from(path: &Path) -> Result<AppConfig, confy::ConfyError> {
    confy::load_path(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_carry_the_wedding_playlist() {
        let config = AppConfig::default();
        let playlist = config.playlist().unwrap();

        assert_eq!(playlist.len(), 5);
        assert_eq!(playlist.get(0).map(|t| t.name.as_str()), Some("Lễ Đường"));
        assert_eq!(config.volume, 70);
        assert_eq!(config.greeting_interval(), Duration::from_secs(30));
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "volume = 40").unwrap();
        writeln!(file, "greeting = \"JUST MARRIED\"").unwrap();

        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.volume, 40);
        assert_eq!(config.greeting, "JUST MARRIED");
        assert_eq!(config.greeting_interval_secs, 30);
        assert_eq!(config.tracks, default_tracks());
    }

    #[test]
    fn reads_tracks_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "music_dir = \"/srv/wedding\"").unwrap();
        writeln!(file, "[[tracks]]").unwrap();
        writeln!(file, "name = \"Processional\"").unwrap();
        writeln!(file, "file = \"processional.flac\"").unwrap();
        writeln!(file, "[[tracks]]").unwrap();
        writeln!(file, "name = \"Stream\"").unwrap();
        writeln!(file, "file = \"https://example.org/stream.mp3\"").unwrap();

        let playlist = load_config_from(file.path()).unwrap().playlist().unwrap();

        assert_eq!(playlist.len(), 2);
        assert_eq!(
            playlist.get(0).map(|t| t.source.clone()),
            Some(Path::new("/srv/wedding").join("processional.flac").to_string_lossy().into_owned())
        );
        assert_eq!(
            playlist.get(1).map(|t| t.source.as_str()),
            Some("https://example.org/stream.mp3")
        );
    }

    #[test]
    fn absolute_files_ignore_music_dir() {
        let config = AppConfig {
            music_dir: Some(PathBuf::from("/srv/wedding")),
            tracks: vec![TrackConfig {
                name: String::from("Vows"),
                file: String::from("/tmp/vows.ogg"),
            }],
            ..AppConfig::default()
        };

        let playlist = config.playlist().unwrap();
        assert_eq!(playlist.get(0).map(|t| t.source.as_str()), Some("/tmp/vows.ogg"));
    }

    #[test]
    fn empty_track_list_is_rejected() {
        let config = AppConfig {
            tracks: vec![],
            ..AppConfig::default()
        };

        assert_eq!(config.playlist().unwrap_err(), PlaylistError::Empty);
    }
}
