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

//! # Wedding Music Player.
//!
//! A terminal wedding greeting with a pop-up music player.
//!
//! The screen shows an animated greeting and a floating music button. The
//! button opens a panel with a playlist player: play/pause, next/previous,
//! shuffle, repeat, seeking and direct track selection.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the [`App`], manages the terminal lifecycle and
//!   renders the UI after every event.
//! * The **Audio Worker** drives MPV and reports transport signals.
//! * **Producer Threads** forward keyboard and mouse input, a UI tick and the
//!   greeting replay timer.
//!
//! All of them talk to the main thread through one `std::sync::mpsc` channel
//! of [`AppEvent`]s. The application follows a strict setup-run-teardown
//! pattern so the terminal is restored even when the run fails.

mod config;
mod controller;
mod events;
mod greeting;
mod model;
mod panel;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    controller::{Controller, RandomPicker},
    events::{AppEvent, process_events},
    greeting::GreetingAnimation,
    panel::{Panel, PanelView},
    player::AudioPlayer,
    theme::Theme,
};

/// Frame interval, also the greeting animation step.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Application state.
struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: Controller<AudioPlayer, PanelView>,
    pub panel: Panel,
    pub greeting: GreetingAnimation,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The first track is loaded but not played.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let playlist = config.playlist().context("Invalid playlist configuration")?;
        let audio_player = AudioPlayer::new(event_tx.clone(), config.volume);

        let controller = Controller::new(
            playlist,
            audio_player,
            PanelView::new(),
            Box::new(RandomPicker),
        )?;

        let greeting = GreetingAnimation::new(&config.greeting);

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            panel: Panel::new(),
            greeting,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, sets up logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(util::logging::default_log_path);
    util::logging::init(&log_path)?;

    info!(tracks = config.tracks.len(), "Starting");

    let mut app = App::new(config).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches to the alternate screen buffer and captures the mouse.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Paint the whole emulator window, without this there is a thin outline
    // in the user's own background colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::paint_background(&hex) {
            warn!("Failed to set terminal background: {}", e);
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses [`setup_terminal`]. It is best-effort and does not return a
/// result, since it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::restore_background().ok();
    terminal.show_cursor().ok();
}

/// Starts the producer threads and enters the main event loop.
///
/// This function spawns:
/// * An input thread translating terminal events into [`AppEvent`]s.
/// * A tick thread driving redraws and the greeting animation.
/// * A timer thread replaying the greeting on the configured interval.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    AppEvent::Key(key)
                }
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => AppEvent::FatalError(format!("Failed to read terminal input: {}", e)),
            };
            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let tx_greeting = app.event_tx.clone();
    let interval = app.config.greeting_interval();
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            if tx_greeting.send(AppEvent::ReplayGreeting).is_err() {
                break;
            }
        }
    });

    process_events(terminal, app)
}
