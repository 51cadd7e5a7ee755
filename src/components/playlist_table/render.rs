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

//! UI rendering logic for the playlist table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};
use tracing::warn;

use crate::{
    components::playlist_table::PlaylistTable, render::Render, theme::Theme, util::format::format_time,
};

impl Render for PlaylistTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.playlists.iter().map(|playlist| {
            let duration = match self.player.playlist_duration(playlist.id) {
                Ok(duration) => format_time(u64::from(duration)),
                Err(e) => {
                    warn!(playlist = playlist.id, "Cannot compute playlist duration: {e}");
                    "--:--".to_string()
                }
            };

            let song_count = match playlist.songs.len() {
                1 => "1 song".to_string(),
                n => format!("{n} songs"),
            };

            Row::new(vec![
                Cell::from(Line::from(playlist.name.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(song_count).style(Style::default().fg(theme.table_time_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(duration).style(Style::default().fg(theme.table_time_fg)).alignment(Alignment::Right)),
            ])
        });

        let border_colour = if self.focused { theme.accent_colour } else { theme.border_colour };

        let table = Table::new(
            rows,
            [Constraint::Min(10), Constraint::Length(10), Constraint::Length(8)],
        )
        .header(
            Row::new(vec![
                Cell::from("Name"),
                Cell::from(Line::from("Songs").alignment(Alignment::Right)),
                Cell::from(Line::from("Duration").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour)),
        )
        .row_highlight_style(Style::default().bg(theme.selection_colour).fg(Color::White))
        .block(
            Block::default()
                .title(format!(" Playlists ({}) ", self.playlists.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_colour))
                .padding(Padding::horizontal(1)),
        );

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
