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

//! Render the greeting screen behind the player.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    greeting::{CharPhase, GreetingAnimation},
    render::icons::ICON_NOTE,
    theme::Theme,
};

const BUTTON_WIDTH: u16 = 13;
const BUTTON_HEIGHT: u16 = 3;

pub(crate) fn draw_greeting(f: &mut Frame, area: Rect, greeting: &GreetingAnimation, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let spans: Vec<Span> = greeting
        .chars()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = match greeting.phase(i) {
                CharPhase::Hidden => Style::default().fg(theme.background_colour),
                CharPhase::Entering(progress) => {
                    Style::default().fg(theme.fade(theme.greeting_colour, progress))
                }
                CharPhase::Settled => Style::default()
                    .fg(theme.greeting_colour)
                    .add_modifier(Modifier::BOLD),
            };
            // Letter-spaced, the way the greeting is usually set
            Span::styled(format!("{} ", c), style)
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        rows[1],
    );

    f.render_widget(
        Paragraph::new(Line::styled(
            format!("{} press m for music {}", ICON_NOTE, ICON_NOTE),
            Style::default().fg(theme.muted_colour),
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
}

/// Draws the floating music button in the bottom-right corner and returns
/// its area.
pub(crate) fn draw_floating_button(f: &mut Frame, area: Rect, theme: &Theme) -> Rect {
    let width = BUTTON_WIDTH.min(area.width);
    let height = BUTTON_HEIGHT.min(area.height);
    let button = Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour));

    f.render_widget(
        Paragraph::new(format!("{} Music", ICON_NOTE))
            .style(Style::default().fg(theme.text_colour))
            .alignment(Alignment::Center)
            .block(block),
        button,
    );

    button
}
