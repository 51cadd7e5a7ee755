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

//! Interactive song table widget and state management.
//!
//! Separates the persistent selection state ([`SongTableState`]) from the
//! transient widget view ([`SongTable`]) built from the player on every draw
//! or key press. Rows are always in title order.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    components::{clamp_selection, step_selection},
    model::{Player, Song},
};

/// What the user asked to do with a song row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SongTableAction {
    Play(u32),
    Remove(u32),
}

pub(crate) struct SongTableState {
    pub(crate) table_state: TableState,
}

impl SongTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, player: &'a Player) -> SongTable<'a> {
        let songs = player.songs_by_title();
        clamp_selection(&mut self.table_state, songs.len());
        SongTable {
            songs,
            table_state: &mut self.table_state,
            now_playing: None,
            focused: false,
        }
    }

    pub(crate) fn selected_song_id(&self, player: &Player) -> Option<u32> {
        let index = self.table_state.selected()?;
        player.songs_by_title().get(index).map(|song| song.id)
    }

    /// Moves the selection onto a song, if it exists.
    pub(crate) fn select_song(&mut self, player: &Player, song_id: u32) {
        if let Some(index) = player.songs_by_title().iter().position(|song| song.id == song_id) {
            self.table_state.select(Some(index));
        }
    }
}

pub(crate) struct SongTable<'a> {
    songs: Vec<&'a Song>,
    table_state: &'a mut TableState,
    /// The playing song and its elapsed seconds.
    now_playing: Option<(u32, u64)>,
    focused: bool,
}

impl SongTable<'_> {
    pub(crate) fn now_playing(mut self, now_playing: Option<(u32, u64)>) -> Self {
        self.now_playing = now_playing;
        self
    }

    pub(crate) fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn goto_next(&mut self) {
        step_selection(self.table_state, self.songs.len(), true);
    }

    fn goto_previous(&mut self) {
        step_selection(self.table_state, self.songs.len(), false);
    }

    fn goto_first(&mut self) {
        if !self.songs.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.songs.is_empty() {
            self.table_state.select(Some(self.songs.len() - 1));
        }
    }

    fn current_song_id(&self) -> Option<u32> {
        self.table_state
            .selected()
            .and_then(|i| self.songs.get(i))
            .map(|song| song.id)
    }
}
