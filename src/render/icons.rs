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

//! Unicode symbols for the player controls.
//!
//! Every glyph used here is single-width in common terminal fonts, so an
//! icon takes one column per `char`. The control hit areas are sized from
//! that count (`ICON_NEXT` and `ICON_PREV` are two glyphs wide).

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{2016}";
pub(crate) const ICON_NEXT: &str = "\u{25B7}\u{25B7}";
pub(crate) const ICON_PREV: &str = "\u{25C1}\u{25C1}";
pub(crate) const ICON_SHUFFLE: &str = "\u{21C4}";
pub(crate) const ICON_REPEAT: &str = "\u{21BB}";
pub(crate) const ICON_CLOSE: &str = "\u{2715}";
pub(crate) const ICON_NOTE: &str = "\u{266A}";
