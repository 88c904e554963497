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

//! Keyboard routing.
//!
//! Keys are first mapped to a [`KeyAction`] depending on whether the panel
//! is shown, then applied to the application. Transport keys only work while
//! the panel is open; Escape closes it whatever its state. A key that maps to
//! an action is consumed and goes no further.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{App, events::AppEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum KeyAction {
    Quit,
    OpenPanel,
    ClosePanel,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    ToggleShuffle,
    ToggleRepeat,
    SeekRatio(f64),
    CursorUp,
    CursorDown,
    PlaySelected,
}

/// Maps a key press to an action.
///
/// # Arguments
///
/// * `key` - The key event captured from the terminal backend.
/// * `panel_shown` - Whether the music panel is currently open.
pub(crate) fn map_key(key: &KeyEvent, panel_shown: bool) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') => return Some(KeyAction::Quit),
        KeyCode::Esc => return Some(KeyAction::ClosePanel),
        _ => {}
    }

    if !panel_shown {
        return match key.code {
            KeyCode::Char('m') | KeyCode::Enter => Some(KeyAction::OpenPanel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') => Some(KeyAction::TogglePlayPause),
        KeyCode::Right => Some(KeyAction::NextTrack),
        KeyCode::Left => Some(KeyAction::PreviousTrack),
        KeyCode::Char('s') => Some(KeyAction::ToggleShuffle),
        KeyCode::Char('r') => Some(KeyAction::ToggleRepeat),
        KeyCode::Char('k') | KeyCode::Up => Some(KeyAction::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => Some(KeyAction::CursorDown),
        KeyCode::Enter => Some(KeyAction::PlaySelected),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|d| KeyAction::SeekRatio(f64::from(d) / 10.0)),
        _ => None,
    }
}

/// Applies a key press to the application.
///
/// While a notification is shown the key only dismisses it.
///
/// # Errors
///
/// Returns an error if a transport command cannot be delivered to the audio
/// worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Press && app.controller.view().notification().is_some() {
        app.controller.view_mut().dismiss_notification();
        return Ok(());
    }

    let Some(action) = map_key(&key, app.panel.is_shown()) else {
        return Ok(());
    };

    let len = app.controller.playlist().len();

    match action {
        KeyAction::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyAction::OpenPanel => app.panel.show(app.controller.current_index()),
        KeyAction::ClosePanel => app.panel.hide(),
        KeyAction::TogglePlayPause => app.controller.toggle_play_pause()?,
        KeyAction::NextTrack => app.controller.next_track()?,
        KeyAction::PreviousTrack => app.controller.previous_track()?,
        KeyAction::ToggleShuffle => app.controller.toggle_shuffle(),
        KeyAction::ToggleRepeat => app.controller.toggle_repeat(),
        KeyAction::SeekRatio(ratio) => app.controller.seek(ratio)?,
        KeyAction::CursorUp => app.panel.cursor_previous(len),
        KeyAction::CursorDown => app.panel.cursor_next(len),
        KeyAction::PlaySelected => {
            if let Some(index) = app.panel.selected().filter(|&i| i < len) {
                app.controller.select_track(index)?;
            }
        }
    }

    Ok(())
}
