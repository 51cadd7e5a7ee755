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

//! UI rendering logic for the song table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};

use crate::{
    components::song_table::SongTable,
    render::{Render, icons::ICON_PLAY},
    theme::Theme,
    util::format::{duration_colour, format_time, playing_colour},
};

impl Render for SongTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.songs.iter().map(|song| {
            let elapsed = self
                .now_playing
                .filter(|(song_id, _)| *song_id == song.id)
                .map(|(_, elapsed)| elapsed);

            let marker = if elapsed.is_some() { ICON_PLAY } else { "" };

            let row = Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(song.album.as_str()).style(Style::default().fg(theme.table_album_fg))),
                Cell::from(Line::from(song.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(
                    Line::from(format_time(u64::from(song.duration)))
                        .style(Style::default().fg(duration_colour(song.duration)))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(song.cover_art.as_str()).style(Style::default().fg(theme.table_cover_art_fg))),
            ]);

            match elapsed {
                Some(elapsed) => row.style(
                    Style::default()
                        .bg(playing_colour(elapsed))
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                None => row,
            }
        });

        let border_colour = if self.focused { theme.accent_colour } else { theme.border_colour };

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(25),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Percentage(35),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Album"),
                Cell::from("Artist"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Cover art"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selection_colour).fg(Color::White))
        .block(
            Block::default()
                .title(format!(" Songs ({}) ", self.songs.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_colour))
                .padding(Padding::horizontal(1)),
        );

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
