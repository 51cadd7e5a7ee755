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

//! Playlist table widget and state management.
//!
//! Lists every playlist in name order with its song count and total length.
//! Both are recomputed from the player on every draw, so removing a song is
//! reflected immediately.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    components::{clamp_selection, step_selection},
    model::{Player, Playlist},
};

pub(crate) struct PlaylistTableState {
    pub(crate) table_state: TableState,
}

impl PlaylistTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, player: &'a Player) -> PlaylistTable<'a> {
        let playlists = player.playlists_by_name();
        clamp_selection(&mut self.table_state, playlists.len());
        PlaylistTable {
            player,
            playlists,
            table_state: &mut self.table_state,
            focused: false,
        }
    }
}

pub(crate) struct PlaylistTable<'a> {
    player: &'a Player,
    playlists: Vec<&'a Playlist>,
    table_state: &'a mut TableState,
    focused: bool,
}

impl PlaylistTable<'_> {
    pub(crate) fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn goto_next(&mut self) {
        step_selection(self.table_state, self.playlists.len(), true);
    }

    fn goto_previous(&mut self) {
        step_selection(self.table_state, self.playlists.len(), false);
    }

    fn current_playlist_id(&self) -> Option<u32> {
        self.table_state
            .selected()
            .and_then(|i| self.playlists.get(i))
            .map(|playlist| playlist.id)
    }
}
