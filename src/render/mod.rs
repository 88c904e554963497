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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into `ratatui` widgets. Layers
//! are drawn back to front:
//!
//! 1. the greeting screen and the floating music button,
//! 2. the music panel, when shown,
//! 3. the blocking notification, when there is one.
//!
//! Drawing also records the clickable areas of the frame in
//! [`crate::panel::HitAreas`], so mouse clicks resolve against exactly what
//! the user sees.

mod greeting;
mod icons;
mod panel;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    render::{
        greeting::{draw_floating_button, draw_greeting},
        panel::draw_panel,
    },
    theme::Theme,
};

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - The application state; mutable because the panel's list scroll
///   position and hit areas are updated while drawing.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    draw_greeting(f, area, &app.greeting, &app.theme);
    app.panel.hit_areas.floating_button = draw_floating_button(f, area, &app.theme);

    if app.panel.is_shown() {
        draw_panel(f, area, &app.controller, &mut app.panel, &app.theme);
    } else {
        app.panel.hit_areas.panel = None;
    }

    if let Some(message) = app.controller.view().notification() {
        draw_notification(f, area, message, &app.theme);
    }
}

fn draw_notification(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let popup = centered_rect(area, 56, 6);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.notification_colour))
        .title(" Notice ")
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.panel_colour).fg(theme.text_colour));

    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::styled(
            "Press any key to continue",
            Style::default()
                .fg(theme.muted_colour)
                .add_modifier(Modifier::ITALIC),
        ),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));

        let small = Rect::new(2, 1, 30, 5);
        assert_eq!(centered_rect(small, 40, 10), small);
    }
}
