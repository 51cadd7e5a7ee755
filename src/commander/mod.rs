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

//! Command-line input logic and state management.
//!
//! Typing `:` opens a one-line command prompt. When a command is submitted it
//! is parsed and sent to the event loop as an [`AppCommand`]; parse failures
//! are sent as an error event instead.
//!
//! | Command           | Action                               |
//! |-------------------|--------------------------------------|
//! | `play <id>`       | play the song with the given id      |
//! | `rm <id>`         | remove the song with the given id    |
//! | `playlist <id>`   | play the first song of a playlist    |
//! | `stop`            | stop playback                        |
//! | `add`             | open the add-song form               |
//! | `songs`           | focus the song list                  |
//! | `playlists`       | focus the playlist list              |
//! | `q`               | quit                                 |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    Pane,
    actions::{commands::AppCommand, events::AppEvent},
    model::player::parse_song_id,
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, either because the prompt is
    /// open or because the event opened it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    let event = match parse_command(&buffer) {
                        Ok(command) => AppEvent::Command(command),
                        Err(message) => AppEvent::Error(message),
                    };
                    event_tx.send(event)?;
                }
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

fn parse_command(buffer: &str) -> Result<AppCommand, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => AppCommand::ExitApplication,

        ["play", id] => AppCommand::PlaySong(parse_song_id(id).map_err(|e| e.to_string())?),
        ["rm", id] => AppCommand::RemoveSong(parse_song_id(id).map_err(|e| e.to_string())?),

        ["playlist", id] => {
            let id = id
                .parse::<u32>()
                .map_err(|_| format!("invalid playlist id '{id}'"))?;
            AppCommand::PlayPlaylist(id)
        }

        ["stop"] => AppCommand::Stop,
        ["add"] => AppCommand::OpenAddSongForm,

        ["songs"] => AppCommand::FocusPane(Pane::Songs),
        ["playlists"] => AppCommand::FocusPane(Pane::Playlists),

        [cmd @ ("play" | "rm" | "playlist"), ..] => return Err(format!("usage: {cmd} <id>")),
        [cmd, ..] => return Err(format!("unknown command '{cmd}'")),
        [] => return Err("empty command".to_string()),
    };

    Ok(command)
}
