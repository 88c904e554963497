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

//! Colour palette.
//!
//! Soft blush and gold on a deep plum background.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) greeting_colour: Color,
    pub(crate) notification_colour: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::wedding()
    }
}

impl Theme {
    pub(crate) const fn wedding() -> Self {
        Self {
            background_colour: Color::Rgb(43, 24, 40),
            panel_colour: Color::Rgb(58, 34, 54),
            accent_colour: Color::Rgb(232, 190, 120),
            border_colour: Color::Rgb(150, 110, 130),
            gauge_track_colour: Color::Rgb(80, 52, 74),
            text_colour: Color::Rgb(250, 240, 245),
            muted_colour: Color::Rgb(170, 150, 165),
            greeting_colour: Color::Rgb(246, 196, 206),
            notification_colour: Color::Rgb(220, 90, 100),
        }
    }

    /// Converts an RGB colour into a CSS-style hex string, for the terminal
    /// emulator background. Other colour kinds have no hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }

    /// Blends from the background towards `target`, `amount` in `[0, 1]`.
    ///
    /// Used for fading characters in; non-RGB colours snap to `target`.
    pub(crate) fn fade(&self, target: Color, amount: f64) -> Color {
        match (self.background_colour, target) {
            (Color::Rgb(br, bg, bb), Color::Rgb(tr, tg, tb)) => {
                let t = amount.clamp(0.0, 1.0);
                let mix = |from: u8, to: u8| {
                    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
                };
                Color::Rgb(mix(br, tr), mix(bg, tg), mix(bb, tb))
            }
            _ => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_for_rgb_only() {
        assert_eq!(Theme::to_hex(Color::Rgb(255, 0, 16)), Some(String::from("#ff0010")));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }

    #[test]
    fn fade_endpoints() {
        let theme = Theme::wedding();

        assert_eq!(theme.fade(theme.greeting_colour, 0.0), theme.background_colour);
        assert_eq!(theme.fade(theme.greeting_colour, 1.0), theme.greeting_colour);
    }
}
