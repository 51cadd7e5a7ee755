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

//! UI rendering logic for the add-song form, drawn as a popup over the
//! lists.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::add_song::{AddSongForm, DURATION, FIELD_LABELS},
    render::Render,
    theme::Theme,
};

const POPUP_WIDTH: u16 = 64;
const LABEL_WIDTH: u16 = 18;

impl Render for AddSongForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let height = self.inputs.len() as u16 + 4;
        let popup = centered(area, POPUP_WIDTH, height);

        let block = Block::default()
            .title(" Add song ")
            .title_bottom(" Tab next field | Enter add | Esc cancel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::uniform(1));
        let inner = block.inner(popup);

        f.render_widget(Clear, popup);
        f.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); self.inputs.len()])
            .split(inner);

        for (field, input) in self.inputs.iter().enumerate() {
            let focused = field == self.focus;
            let label = match field {
                DURATION => format!("{} (MM:SS)", FIELD_LABELS[field]),
                _ => FIELD_LABELS[field].to_string(),
            };

            let label_style = if focused {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.table_time_fg)
            };

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
                .split(rows[field]);

            f.render_widget(Paragraph::new(Line::from(Span::styled(label, label_style))), columns[0]);

            let width = columns[1].width.max(1) as usize;
            let scroll = input.visual_scroll(width);
            f.render_widget(
                Paragraph::new(input.value())
                    .style(Style::default().fg(theme.commander_colour).bg(theme.gauge_track_colour))
                    .scroll((0, scroll as u16)),
                columns[1],
            );

            if focused {
                let cursor_x = input.visual_cursor().saturating_sub(scroll) as u16;
                f.set_cursor_position((columns[1].x + cursor_x, columns[1].y));
            }
        }
    }
}

/// A `width` by `height` rectangle in the middle of `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    popup
}
