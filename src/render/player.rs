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

//! Render the player bar.
//!
//! Shows the current song, elapsed and remaining time, and a progress gauge
//! coloured like the song's row in the song list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_PLAY, ICON_STOP},
    util::format::{format_time, playing_colour},
};

/// Renders the player widget with the current song and its progress.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(chunks[0]);

    let song = app.now_playing.and_then(|song_id| app.player.song_by_id(song_id).ok());

    let Some(song) = song.filter(|_| app.player_state == PlayerState::Playing) else {
        let idle = Line::from(vec![
            Span::styled(format!(" {} ", ICON_STOP), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
            Span::raw("Nothing playing"),
        ]);
        f.render_widget(Paragraph::new(idle).fg(app.theme.table_time_fg), info_chunks[0]);
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let song_line = Line::from(vec![
        Span::styled(format!(" {} ", ICON_PLAY), bold).fg(Color::White),
        Span::styled(song.title.as_str(), bold).fg(app.theme.accent_colour),
        Span::raw(" from "),
        Span::styled(song.album.as_str(), bold).fg(app.theme.accent_colour),
        Span::raw(" by "),
        Span::styled(song.artist.as_str(), bold).fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(song_line), info_chunks[0]);

    let duration = u64::from(song.duration);
    let elapsed = app.elapsed.min(duration);
    let remaining = duration - elapsed;

    let time_line = Line::from(vec![
        Span::styled(format_time(elapsed), bold).fg(app.theme.accent_colour),
        Span::styled(" / ", bold).fg(Color::White),
        Span::styled(format_time(duration), bold).fg(app.theme.accent_colour),
        Span::styled(" (-", bold).fg(Color::White),
        Span::styled(format_time(remaining), bold).fg(app.theme.accent_colour),
        Span::styled(")", bold).fg(Color::White),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);

    let ratio = if duration > 0 { elapsed as f64 / duration as f64 } else { 1.0 };

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(playing_colour(app.elapsed))
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(ratio.clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[2]);
}
