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

//! Display state written by the controller and read by the renderer.

use crate::controller::{PlayerView, Toggle};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PanelView {
    pub(crate) title: String,
    pub(crate) progress_fraction: f64,
    pub(crate) elapsed: String,
    pub(crate) duration: String,
    pub(crate) active_row: usize,
    pub(crate) playing: bool,
    pub(crate) shuffle: bool,
    pub(crate) repeat: bool,
    notification: Option<String>,
}

impl PanelView {
    pub(crate) fn new() -> Self {
        Self {
            title: String::new(),
            progress_fraction: 0.0,
            elapsed: String::from("0:00"),
            duration: String::from("0:00"),
            active_row: 0,
            playing: false,
            shuffle: false,
            repeat: false,
            notification: None,
        }
    }

    pub(crate) fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub(crate) fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

impl PlayerView for PanelView {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_progress_fraction(&mut self, fraction: f64) {
        self.progress_fraction = fraction.clamp(0.0, 1.0);
    }

    fn set_times(&mut self, elapsed: &str, duration: &str) {
        self.elapsed = elapsed.to_string();
        self.duration = duration.to_string();
    }

    fn set_duration(&mut self, duration: &str) {
        self.duration = duration.to_string();
    }

    fn mark_row_active(&mut self, index: usize) {
        self.active_row = index;
    }

    fn set_toggle_state(&mut self, toggle: Toggle, active: bool) {
        match toggle {
            Toggle::PlayPause => self.playing = active,
            Toggle::Shuffle => self.shuffle = active,
            Toggle::Repeat => self.repeat = active,
        }
    }

    fn notify(&mut self, message: &str) {
        self.notification = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_stays_until_dismissed() {
        let mut view = PanelView::new();
        view.notify("cannot play");
        view.set_title("Vows");

        assert_eq!(view.notification(), Some("cannot play"));

        view.dismiss_notification();
        assert_eq!(view.notification(), None);
    }

    #[test]
    fn progress_is_clamped() {
        let mut view = PanelView::new();
        view.set_progress_fraction(1.7);
        assert_eq!(view.progress_fraction, 1.0);
    }
}
