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

//! Terminal emulator background control.
//!
//! The wedding palette looks wrong with a thin strip of the user's own
//! background around the frame, so the emulator background is repainted via
//! OSC 11 on startup and restored via OSC 111 on exit. Terminals that do not
//! understand these sequences ignore them.

use std::io::{self, Write};

/// Paints the emulator background with a `#rrggbb` colour.
pub(crate) fn paint_background(hex_colour: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1b]11;{}\x07", hex_colour)?;
    out.flush()
}

/// Restores the background configured by the user.
pub(crate) fn restore_background() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1b]111\x07")?;
    out.flush()
}
