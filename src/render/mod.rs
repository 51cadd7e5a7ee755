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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The song and playlist lists are rebuilt from the
//! player on each call.

mod commander;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App, Pane,
    render::{commander::draw_commander, player::draw_player},
    theme::Theme,
};

const PLAYER_HEIGHT: u16 = 5;
const MAX_PLAYLIST_ROWS: u16 = 8;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the song list, the playlist list,
/// the player bar and the command line. The add-song form, when open, is
/// drawn last as a popup over the lists.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Border, header row and header margin around the playlist rows.
    let playlist_height = (app.player.playlists().len() as u16).clamp(1, MAX_PLAYLIST_ROWS) + 3;

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(playlist_height),
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let now_playing = app.now_playing.map(|song_id| (song_id, app.elapsed));

    app.song_table
        .as_widget(&app.player)
        .now_playing(now_playing)
        .focused(app.pane == Pane::Songs)
        .draw(f, outer[0], &app.theme);

    app.playlist_table
        .as_widget(&app.player)
        .focused(app.pane == Pane::Playlists)
        .draw(f, outer[1], &app.theme);

    draw_player(f, outer[2], app);

    draw_commander(f, outer[3], app);

    if app.add_song_form.is_active {
        app.add_song_form.draw(f, area, &app.theme);
    }
}
