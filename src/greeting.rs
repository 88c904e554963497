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

//! The decorative greeting shown behind the player.
//!
//! Each character of the greeting fades in one after the other. The
//! animation is driven by UI ticks and replayed on a fixed interval by
//! clearing it and switching it back on.

/// Ticks between the start of one character and the next.
const STAGGER_TICKS: u32 = 2;

/// Ticks a character spends fading in.
const ENTRANCE_TICKS: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum CharPhase {
    Hidden,
    /// Fading in, with progress in `[0, 1)`.
    Entering(f64),
    Settled,
}

pub(crate) struct GreetingAnimation {
    chars: Vec<char>,
    tick: u32,
    running: bool,
}

impl GreetingAnimation {
    /// Creates the animation, already running from its first frame.
    pub(crate) fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            tick: 0,
            running: true,
        }
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn advance(&mut self) {
        if self.running {
            self.tick = self.tick.saturating_add(1);
        }
    }

    /// Removes the animation; every character is drawn in its final state.
    pub(crate) fn clear(&mut self) {
        self.running = false;
        self.tick = 0;
    }

    /// Starts the animation from its first frame.
    pub(crate) fn enable(&mut self) {
        self.running = true;
    }

    pub(crate) fn replay(&mut self) {
        self.clear();
        self.enable();
    }

    pub(crate) fn phase(&self, index: usize) -> CharPhase {
        if !self.running {
            return CharPhase::Settled;
        }

        let delay = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(STAGGER_TICKS);

        if self.tick < delay {
            CharPhase::Hidden
        } else if self.tick < delay.saturating_add(ENTRANCE_TICKS) {
            CharPhase::Entering(f64::from(self.tick - delay) / f64::from(ENTRANCE_TICKS))
        } else {
            CharPhase::Settled
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        (0..self.chars.len()).all(|i| self.phase(i) == CharPhase::Settled)
    }
}
