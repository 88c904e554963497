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

//! The music panel.
//!
//! The panel is a popup over the greeting screen, opened from the floating
//! music button and dismissed with its close control, a click on the
//! backdrop, or Escape. Its contents are described by [`PanelView`], which
//! the controller keeps up to date, while [`Panel`] holds the purely
//! presentational state: visibility, the playlist cursor and the clickable
//! areas of the last frame.

mod hit;
mod view;

pub(crate) use hit::{HitAreas, HitTarget};
pub(crate) use view::PanelView;

use ratatui::widgets::ListState;

pub(crate) struct Panel {
    shown: bool,
    pub(crate) cursor: ListState,
    pub(crate) hit_areas: HitAreas,
}

impl Panel {
    pub(crate) fn new() -> Self {
        Self {
            shown: false,
            cursor: ListState::default(),
            hit_areas: HitAreas::default(),
        }
    }

    pub(crate) fn is_shown(&self) -> bool {
        self.shown
    }

    /// Shows the panel with the playlist cursor on `active_row`.
    pub(crate) fn show(&mut self, active_row: usize) {
        self.shown = true;
        self.cursor.select(Some(active_row));
    }

    pub(crate) fn hide(&mut self) {
        self.shown = false;
    }

    pub(crate) fn cursor_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.cursor.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.cursor.select(Some(i));
    }

    pub(crate) fn cursor_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.cursor.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.cursor.select(Some(i));
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.cursor.selected()
    }
}
