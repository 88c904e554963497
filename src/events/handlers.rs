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

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::{App, panel::HitTarget, player::TransportEvent};

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }

    if app.controller.view().notification().is_some() {
        app.controller.view_mut().dismiss_notification();
        return Ok(());
    }

    let Some(target) = app.panel.hit_areas.resolve(mouse.column, mouse.row) else {
        return Ok(());
    };

    match target {
        HitTarget::FloatingButton => app.panel.show(app.controller.current_index()),
        HitTarget::Close | HitTarget::Backdrop => app.panel.hide(),
        HitTarget::PlayPause => app.controller.toggle_play_pause()?,
        HitTarget::Previous => app.controller.previous_track()?,
        HitTarget::Next => app.controller.next_track()?,
        HitTarget::Shuffle => app.controller.toggle_shuffle(),
        HitTarget::Repeat => app.controller.toggle_repeat(),
        HitTarget::Progress(ratio) => app.controller.seek(ratio)?,
        HitTarget::PlaylistRow(index) => {
            app.panel.cursor.select(Some(index));
            app.controller.select_track(index)?;
        }
        HitTarget::PanelBody => {}
    }

    Ok(())
}

pub(super) fn handle_transport_event(app: &mut App, event: TransportEvent) -> Result<()> {
    match event {
        TransportEvent::TimeUpdate => app.controller.on_time_update(),
        TransportEvent::LoadedMetadata => app.controller.on_loaded_metadata(),
        TransportEvent::Ended => app.controller.on_ended()?,
        TransportEvent::Error(reason) => app.controller.on_playback_error(&reason),
        TransportEvent::PlayOutcome { request, outcome } => {
            app.controller.on_play_outcome(request, outcome)
        }
    }

    Ok(())
}

pub(super) fn handle_replay_greeting(app: &mut App) {
    app.greeting.replay();
}

pub(super) fn handle_tick(app: &mut App) {
    if !app.greeting.is_finished() {
        app.greeting.advance();
    }
}
