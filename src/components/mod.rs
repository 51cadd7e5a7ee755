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

//! Interactive UI components.
//!
//! Each component keeps its own view state (selection, scroll position, text
//! input) and reads the songs and playlists straight from the
//! [`Player`](crate::model::Player) when it draws or handles input, so the
//! lists on screen always match the underlying collection.
//!
//! * [`song_table`]: The list of songs, with play and remove actions.
//! * [`playlist_table`]: The list of playlists with their length.
//! * [`add_song`]: The form used to add a new song.

mod add_song;
mod playlist_table;
mod song_table;

use ratatui::widgets::TableState;

pub(crate) use add_song::AddSongForm;
pub(crate) use playlist_table::PlaylistTableState;
pub(crate) use song_table::SongTableState;

/// Moves a table selection by one row, wrapping at either end.
fn step_selection(table_state: &mut TableState, len: usize, forward: bool) {
    if len == 0 {
        table_state.select(None);
        return;
    }
    let i = match table_state.selected() {
        Some(i) if forward => if i >= len - 1 { 0 } else { i + 1 },
        Some(i) => if i == 0 || i >= len { len - 1 } else { i - 1 },
        None => 0,
    };
    table_state.select(Some(i));
}

/// Keeps a selection inside a list that may have shrunk.
fn clamp_selection(table_state: &mut TableState, len: usize) {
    match table_state.selected() {
        Some(_) if len == 0 => table_state.select(None),
        Some(i) if i >= len => table_state.select(Some(len - 1)),
        _ => {}
    }
}
