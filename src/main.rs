// Copyright (C) 2026  The tunedeck developers
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

//! # Music Player TUI.
//!
//! A terminal music player exercise: it lists the songs and playlists of an
//! in-memory library, plays songs one after another on a timer, and lets the
//! user add and remove songs while keeping every list in sync.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * A **Playback Timer** worker runs the duration of the current song and
//!   reports progress and completion.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Every producer
//! thread talks to the main thread through a single `std::sync::mpsc` channel
//! of [`AppEvent`]s.

mod actions;
mod commander;
mod components;
mod config;
mod error;
mod library;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    actions::events::{AppEvent, process_events},
    commander::Commander,
    components::{AddSongForm, PlaylistTableState, SongTableState},
    config::AppConfig,
    model::Player,
    player::{PlaybackTimer, PlayerState},
    theme::Theme,
};

/// The list that currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Pane {
    Songs,
    Playlists,
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub pane: Pane,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub timer: PlaybackTimer,

    pub player: Player,

    pub song_table: SongTableState,
    pub playlist_table: PlaylistTableState,
    pub add_song_form: AddSongForm,

    pub commander: Commander,

    pub player_state: PlayerState,
    pub now_playing: Option<u32>,
    pub elapsed: u64,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, player: Player) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let timer_event_tx = event_tx.clone();

        Self {
            config,
            theme: Theme::default(),
            pane: Pane::Songs,
            event_tx,
            event_rx,
            timer: PlaybackTimer::new(timer_event_tx),
            player,
            song_table: SongTableState::new(),
            playlist_table: PlaylistTableState::new(),
            add_song_form: AddSongForm::new(),
            commander: Commander::new(),
            player_state: PlayerState::Stopped,
            now_playing: None,
            elapsed: 0,
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration and the initial library, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = logging::init_logging(&config.log_dir)?;

    let player = library::load_player(config.library_file.as_deref()).context("Failed to load library")?;

    let mut app = App::new(config, player);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("Application error: {e:?}");
    }
    info!("Exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Paint the whole terminal window, otherwise a thin outline of the
    // default background remains around the UI
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// Failures are ignored, there is nothing useful left to do with them during
/// teardown.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// * An input thread polls for keyboard events.
/// * A tick thread triggers periodic UI refreshes.
///
/// The playback timer worker was already started with the [`App`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Terminal input failed: {e}")));
                    break;
                }
            }
        }
    });

    // Periodic tick, effectively the minimum "frame rate" of the UI.
    let tx_tick = app.event_tx.clone();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms.max(1));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    info!(
        songs = app.player.songs().len(),
        playlists = app.player.playlists().len(),
        "Starting event loop"
    );

    process_events(terminal, app)
}
