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

//! Render the music panel.
//!
//! This module renders the visual representation of the current track, the
//! progress bar, the transport controls and the playlist, and records where
//! each of them landed for mouse hit testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph},
};

use crate::{
    controller::{Controller, Transport},
    panel::{Panel, PanelView},
    render::{
        centered_rect,
        icons::{
            ICON_CLOSE, ICON_NEXT, ICON_NOTE, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_REPEAT,
            ICON_SHUFFLE,
        },
    },
    theme::Theme,
};

const PANEL_WIDTH: u16 = 64;

/// Rows used by everything above the playlist, borders included.
const PANEL_CHROME_HEIGHT: u16 = 10;

const CONTROL_GAP: u16 = 2;

/// Height the panel would like, one playlist row per track. It is clipped to
/// the screen by [`centered_rect`].
fn panel_height(track_count: usize) -> u16 {
    PANEL_CHROME_HEIGHT.saturating_add(u16::try_from(track_count).unwrap_or(u16::MAX))
}

pub(crate) fn draw_panel<T: Transport>(
    f: &mut Frame,
    area: Rect,
    controller: &Controller<T, PanelView>,
    panel: &mut Panel,
    theme: &Theme,
) {
    let view = controller.view();
    let track_count = controller.playlist().len();

    let popup = centered_rect(area, PANEL_WIDTH, panel_height(track_count));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(format!(" {} Music ", ICON_NOTE))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.panel_colour).fg(theme.text_colour));

    let inner = block.inner(popup);
    f.render_widget(Clear, popup);
    f.render_widget(block, popup);

    let close = Rect::new(popup.right().saturating_sub(5), popup.y, 3, 1).intersection(popup);
    f.render_widget(
        Paragraph::new(format!(" {} ", ICON_CLOSE)).style(Style::default().fg(theme.accent_colour)),
        close,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Line::styled(
        view.title.as_str(),
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let progress = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(view.progress_fraction)
        .label("")
        .use_unicode(true);
    f.render_widget(progress, chunks[2]);

    let times = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    let time_style = Style::default().fg(theme.muted_colour);
    f.render_widget(Paragraph::new(view.elapsed.as_str()).style(time_style), times[0]);
    f.render_widget(
        Paragraph::new(view.duration.as_str())
            .style(time_style)
            .alignment(Alignment::Right),
        times[1],
    );

    let controls = draw_controls(f, chunks[5], view, theme);

    let rows = chunks[8];
    draw_playlist(f, rows, controller, panel, theme);

    let hit = &mut panel.hit_areas;
    hit.panel = Some(popup);
    hit.close = close;
    hit.progress = chunks[2];
    [hit.shuffle, hit.previous, hit.play_pause, hit.next, hit.repeat] = controls;
    hit.rows = rows;
    hit.rows_offset = panel.cursor.offset();
    hit.row_count = track_count;
}

/// Draws the transport controls centred in `area`, returning their areas in
/// display order: shuffle, previous, play/pause, next, repeat.
fn draw_controls(f: &mut Frame, area: Rect, view: &PanelView, theme: &Theme) -> [Rect; 5] {
    let on = Style::default()
        .fg(theme.accent_colour)
        .add_modifier(Modifier::BOLD);
    let off = Style::default().fg(theme.muted_colour);
    let plain = Style::default().fg(theme.text_colour);

    let play_icon = if view.playing { ICON_PAUSE } else { ICON_PLAY };

    let items = [
        (ICON_SHUFFLE, if view.shuffle { on } else { off }),
        (ICON_PREV, plain),
        (play_icon, if view.playing { on } else { plain }),
        (ICON_NEXT, plain),
        (ICON_REPEAT, if view.repeat { on } else { off }),
    ];

    let widths = items.map(|(icon, _)| u16::try_from(icon.chars().count()).unwrap_or(1) + 2);
    let total: u16 = widths.iter().sum::<u16>() + CONTROL_GAP * 4;

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut rects = [Rect::default(); 5];

    for (i, (icon, style)) in items.into_iter().enumerate() {
        let rect = Rect::new(x, area.y, widths[i], 1).intersection(area);
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", icon), style)),
            rect,
        );
        rects[i] = rect;
        x = x.saturating_add(widths[i] + CONTROL_GAP);
    }

    rects
}

fn draw_playlist<T: Transport>(
    f: &mut Frame,
    area: Rect,
    controller: &Controller<T, PanelView>,
    panel: &mut Panel,
    theme: &Theme,
) {
    let active = controller.view().active_row;

    let items: Vec<ListItem> = controller
        .playlist()
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_active = i == active;
            let style = if is_active {
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_colour)
            };
            let marker = if is_active { ICON_PLAY } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}  ", i + 1), Style::default().fg(theme.muted_colour)),
                Span::styled(track.name.as_str(), style),
                Span::raw(" "),
                Span::styled(marker, style),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(theme.gauge_track_colour));

    f.render_stateful_widget(list, area, &mut panel.cursor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_grows_with_the_playlist() {
        assert_eq!(panel_height(1), PANEL_CHROME_HEIGHT + 1);
        assert_eq!(panel_height(12), PANEL_CHROME_HEIGHT + 12);
    }

    #[test]
    fn huge_playlist_height_saturates() {
        assert_eq!(panel_height(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(panel_height(usize::MAX), u16::MAX);
    }
}
