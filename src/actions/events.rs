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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), the playback timer and the
//! UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel shared by every producer thread.
//! 2. **Process**: [`process_event`] updates the [`App`] state, running any
//!    [`AppCommand`] carried by the event.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, bail};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error, warn};

use crate::{
    App, Pane,
    actions::commands::{AppCommand, handle_command},
    model::Player,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Command(AppCommand),

    /// Whole seconds elapsed for the given song.
    TimeChanged(u32, u64),
    TrackFinished(u32),

    Tick,

    ExitApplication,

    Error(String),
    /// An event producer died and the application cannot carry on.
    FatalError(String),
}

/// Implemented by components that react to terminal input.
///
/// Components never change the player themselves, they send an
/// [`AppCommand`] back through the event channel instead.
pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: &Event, player: &Player, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !process_event(app, event)? {
            break;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
///
/// # Errors
///
/// Only failures of the application plumbing, including a
/// [`AppEvent::FatalError`], are returned. A command that fails, such as
/// removing a song that does not exist, is reported in the status line and
/// the loop carries on.
pub(crate) fn process_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),

        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::Command(command) => dispatch(app, command),

        AppEvent::TimeChanged(song_id, secs) => {
            if app.now_playing == Some(song_id) {
                app.elapsed = secs;
            }
        }

        // Finish events for a song that is no longer playing are stale,
        // the song was replaced, stopped or removed meanwhile.
        AppEvent::TrackFinished(song_id) => {
            if app.now_playing == Some(song_id) {
                dispatch(app, AppCommand::PlayNext(song_id));
            } else {
                debug!(song_id, "Ignoring stale finish event");
            }
        }

        AppEvent::Tick => {}

        AppEvent::Error(message) => {
            warn!("{message}");
            app.status = Some(message);
        }

        AppEvent::FatalError(message) => {
            error!("{message}");
            bail!(message);
        }
    }

    Ok(true)
}

/// Runs a command, reporting failures in the status line.
fn dispatch(app: &mut App, command: AppCommand) {
    debug!(?command, "Running command");
    if let Err(e) = handle_command(app, command) {
        warn!("Command failed: {e:#}");
        app.status = Some(e.to_string());
    }
}

/// Maps keyboard input to application actions.
///
/// Input is offered, in order, to the add-song form when it is open, the
/// command line, the global key bindings and finally the focused list.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the event loop.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    // An open form takes every key, `:` included.
    if app.add_song_form.is_active {
        app.status = None;
        return app.add_song_form.process_event(&event, &app.player, &app.event_tx);
    }

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    app.status = None;

    let command = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppCommand::ExitApplication),

        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Some(AppCommand::FocusPane(match app.pane {
            Pane::Songs => Pane::Playlists,
            Pane::Playlists => Pane::Songs,
        })),
        (KeyCode::Char('1'), _) => Some(AppCommand::FocusPane(Pane::Songs)),
        (KeyCode::Char('2'), _) => Some(AppCommand::FocusPane(Pane::Playlists)),

        (KeyCode::Char('a'), _) => Some(AppCommand::OpenAddSongForm),
        (KeyCode::Char('s'), _) => Some(AppCommand::Stop),

        _ => None,
    };

    if let Some(command) = command {
        app.event_tx.send(AppEvent::Command(command))?;
        return Ok(());
    }

    match app.pane {
        Pane::Songs => app.song_table.process_event(&event, &app.player, &app.event_tx),
        Pane::Playlists => app.playlist_table.process_event(&event, &app.player, &app.event_tx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        model::{Playlist, Song},
        player::PlayerState,
    };

    fn test_app() -> App {
        let song = |id: u32, title: &str| Song {
            id,
            title: title.to_string(),
            album: String::new(),
            artist: String::new(),
            duration: 300,
            cover_art: String::new(),
        };
        let player = Player::new(
            vec![song(1, "Charlie"), song(2, "alpha"), song(3, "Bravo")],
            vec![Playlist {
                id: 1,
                name: "mix".to_string(),
                songs: vec![3, 1],
            }],
        )
        .unwrap();
        App::new(AppConfig::default(), player)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Processes `event` and everything it queues.
    fn run(app: &mut App, event: AppEvent) -> bool {
        let mut running = process_event(app, event).unwrap();
        while running {
            match app.event_rx.try_recv() {
                Ok(AppEvent::Tick) | Ok(AppEvent::TimeChanged(..)) => {}
                Ok(next) => running = process_event(app, next).unwrap(),
                Err(_) => break,
            }
        }
        running
    }

    #[test]
    fn finished_song_advances_in_title_order() {
        let mut app = test_app();
        run(&mut app, AppEvent::Command(AppCommand::PlaySong(2)));
        assert_eq!(app.now_playing, Some(2));

        run(&mut app, AppEvent::TrackFinished(2));
        assert_eq!(app.now_playing, Some(3));

        run(&mut app, AppEvent::TrackFinished(3));
        assert_eq!(app.now_playing, Some(1));

        // Wraps back to the first title.
        run(&mut app, AppEvent::TrackFinished(1));
        assert_eq!(app.now_playing, Some(2));
        assert_eq!(app.player_state, PlayerState::Playing);
    }

    #[test]
    fn stale_finish_events_are_ignored() {
        let mut app = test_app();
        run(&mut app, AppEvent::Command(AppCommand::PlaySong(1)));
        run(&mut app, AppEvent::TrackFinished(3));
        assert_eq!(app.now_playing, Some(1));
    }

    #[test]
    fn progress_only_applies_to_the_playing_song() {
        let mut app = test_app();
        run(&mut app, AppEvent::Command(AppCommand::PlaySong(1)));
        run(&mut app, AppEvent::TimeChanged(1, 42));
        run(&mut app, AppEvent::TimeChanged(2, 99));
        assert_eq!(app.elapsed, 42);
    }

    #[test]
    fn failed_command_shows_in_status_line() {
        let mut app = test_app();
        assert!(run(&mut app, AppEvent::Command(AppCommand::RemoveSong(9))));
        assert_eq!(app.status.as_deref(), Some("no song with id 9"));
        assert_eq!(app.player.songs().len(), 3);
    }

    #[test]
    fn enter_plays_the_selected_song() {
        let mut app = test_app();
        // Rows are alpha(2), Bravo(3), Charlie(1).
        run(&mut app, key(KeyCode::Down));
        run(&mut app, key(KeyCode::Down));
        run(&mut app, key(KeyCode::Enter));
        assert_eq!(app.now_playing, Some(3));
    }

    #[test]
    fn delete_key_removes_the_selected_song() {
        let mut app = test_app();
        run(&mut app, key(KeyCode::Down));
        run(&mut app, key(KeyCode::Char('d')));
        assert!(app.player.song_by_id(2).is_err());
        assert_eq!(app.player.songs().len(), 2);
    }

    #[test]
    fn tab_switches_to_playlists_and_enter_plays_first_song() {
        let mut app = test_app();
        run(&mut app, key(KeyCode::Tab));
        assert_eq!(app.pane, Pane::Playlists);

        run(&mut app, key(KeyCode::Down));
        run(&mut app, key(KeyCode::Enter));
        assert_eq!(app.now_playing, Some(3));
    }

    #[test]
    fn typed_command_removes_a_song() {
        let mut app = test_app();
        for c in ":rm 3".chars() {
            run(&mut app, key(KeyCode::Char(c)));
        }
        run(&mut app, key(KeyCode::Enter));
        assert!(app.player.song_by_id(3).is_err());
        assert_eq!(app.player.playlist_by_id(1).unwrap().songs, [1]);
    }

    #[test]
    fn typed_command_with_bad_id_reports_error() {
        let mut app = test_app();
        for c in ":play x".chars() {
            run(&mut app, key(KeyCode::Char(c)));
        }
        run(&mut app, key(KeyCode::Enter));
        assert_eq!(app.now_playing, None);
        assert!(app.status.is_some());
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut app = test_app();
        assert!(!run(&mut app, key(KeyCode::Char('q'))));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            run(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn add_song_form_accepts_colons() {
        let mut app = test_app();
        run(&mut app, key(KeyCode::Char('a')));
        assert!(app.add_song_form.is_active);

        type_text(&mut app, "Quiet: a song");
        for _ in 0..3 {
            run(&mut app, key(KeyCode::Tab));
        }
        type_text(&mut app, "03:15");
        run(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "https://covers.test/4.jpg");
        assert!(!app.commander.active());

        run(&mut app, key(KeyCode::Enter));

        assert!(!app.add_song_form.is_active);
        assert_eq!(app.status, None);
        let song = app.player.song_by_id(4).unwrap();
        assert_eq!(song.title, "Quiet: a song");
        assert_eq!(song.duration, 195);
        assert_eq!(song.cover_art, "https://covers.test/4.jpg");
    }

    #[test]
    fn fatal_error_ends_the_loop() {
        let mut app = test_app();
        let err = process_event(&mut app, AppEvent::FatalError("Terminal input failed".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Terminal input failed");
    }

    #[test]
    fn plain_error_keeps_the_loop_running() {
        let mut app = test_app();
        assert!(run(&mut app, AppEvent::Error("oops".to_string())));
        assert_eq!(app.status.as_deref(), Some("oops"));
    }
}
