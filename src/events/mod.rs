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

//! Application events and the main event loop.
//!
//! Every producer (input thread, tick thread, greeting timer, audio worker)
//! sends an [`AppEvent`] over one channel. The UI thread handles them one at
//! a time and redraws after each, so handlers never interleave.
//!
//! * [`key_handlers`]: keyboard mapping and dispatch.
//! * `handlers`: mouse clicks, transport signals and timers.

mod handlers;
pub(crate) mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::info;

use crate::{App, player::TransportEvent, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    Transport(TransportEvent),

    ReplayGreeting,
    Tick,

    ExitApplication,
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a fatal worker failure, a failed transport command or
/// a failed draw.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => {
                info!(
                    index = app.controller.current_index(),
                    playing = app.controller.is_playing(),
                    shuffle = app.controller.is_shuffle_on(),
                    repeat = app.controller.is_repeat_on(),
                    "Exit requested"
                );
                break;
            }
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => handle_mouse(app, mouse)?,
            AppEvent::Transport(event) => handle_transport_event(app, event)?,
            AppEvent::ReplayGreeting => handle_replay_greeting(app),
            AppEvent::Tick => handle_tick(app),
            AppEvent::Resize => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
