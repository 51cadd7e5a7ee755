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

//! Input handling for the playlist table.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, AppEventProcessor},
    },
    components::playlist_table::{PlaylistTable, PlaylistTableState},
    model::Player,
};

impl PlaylistTable<'_> {
    /// Returns the id of the playlist to play, if one was activated.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<u32> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Enter | KeyCode::Char('p') => return self.current_playlist_id(),
            _ => {}
        }

        None
    }
}

impl AppEventProcessor for PlaylistTableState {
    fn process_event(&mut self, event: &Event, player: &Player, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(playlist_id) = self.as_widget(player).process_event(event) {
            event_tx.send(AppEvent::Command(AppCommand::PlayPlaylist(playlist_id)))?;
        }
        Ok(())
    }
}
