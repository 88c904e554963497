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

//! Mouse hit testing.
//!
//! The renderer records where each clickable element landed on the last
//! frame; a click is then resolved against those areas.

use ratatui::layout::{Position, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum HitTarget {
    FloatingButton,
    Close,
    PlayPause,
    Previous,
    Next,
    Shuffle,
    Repeat,
    /// Horizontal click ratio along the progress bar.
    Progress(f64),
    PlaylistRow(usize),
    /// Inside the panel, but not on any control.
    PanelBody,
    /// Outside the panel while it is shown.
    Backdrop,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct HitAreas {
    pub(crate) floating_button: Rect,
    pub(crate) panel: Option<Rect>,
    pub(crate) close: Rect,
    pub(crate) play_pause: Rect,
    pub(crate) previous: Rect,
    pub(crate) next: Rect,
    pub(crate) shuffle: Rect,
    pub(crate) repeat: Rect,
    pub(crate) progress: Rect,
    pub(crate) rows: Rect,
    pub(crate) rows_offset: usize,
    pub(crate) row_count: usize,
}

impl HitAreas {
    /// Resolves a click at `column`/`row` on the last rendered frame.
    pub(crate) fn resolve(&self, column: u16, row: u16) -> Option<HitTarget> {
        let at = Position::new(column, row);

        let Some(panel) = self.panel else {
            return self
                .floating_button
                .contains(at)
                .then_some(HitTarget::FloatingButton);
        };

        if !panel.contains(at) {
            return Some(HitTarget::Backdrop);
        }

        let controls = [
            (self.close, HitTarget::Close),
            (self.play_pause, HitTarget::PlayPause),
            (self.previous, HitTarget::Previous),
            (self.next, HitTarget::Next),
            (self.shuffle, HitTarget::Shuffle),
            (self.repeat, HitTarget::Repeat),
        ];

        if let Some((_, target)) = controls.iter().find(|(area, _)| area.contains(at)) {
            return Some(*target);
        }

        if self.progress.contains(at) {
            return Some(HitTarget::Progress(click_ratio(self.progress, column)));
        }

        if self.rows.contains(at) {
            let index = self.rows_offset + usize::from(row - self.rows.y);
            if index < self.row_count {
                return Some(HitTarget::PlaylistRow(index));
            }
        }

        Some(HitTarget::PanelBody)
    }
}

/// Converts a click column into a ratio along `area`, in `[0, 1]`.
pub(crate) fn click_ratio(area: Rect, column: u16) -> f64 {
    if area.width == 0 {
        return 0.0;
    }

    let offset = column.saturating_sub(area.x);
    (f64::from(offset) / f64::from(area.width)).clamp(0.0, 1.0)
}
