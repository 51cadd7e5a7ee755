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

//! Input handling for the song table.
//!
//! Navigation keys move the selection. The play and remove keys become
//! [`SongTableAction`]s, which the state forwards to the application as
//! commands.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, AppEventProcessor},
    },
    components::song_table::{SongTable, SongTableAction, SongTableState},
    model::Player,
};

impl SongTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SongTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter | KeyCode::Char('p') => {
                return self.current_song_id().map(SongTableAction::Play);
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return self.current_song_id().map(SongTableAction::Remove);
            }

            _ => {}
        }

        None
    }
}

impl AppEventProcessor for SongTableState {
    fn process_event(&mut self, event: &Event, player: &Player, event_tx: &Sender<AppEvent>) -> Result<()> {
        let action = self.as_widget(player).process_event(event);

        match action {
            Some(SongTableAction::Play(song_id)) => {
                event_tx.send(AppEvent::Command(AppCommand::PlaySong(song_id)))?
            }
            Some(SongTableAction::Remove(song_id)) => {
                event_tx.send(AppEvent::Command(AppCommand::RemoveSong(song_id)))?
            }
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::Song;

    fn player() -> Player {
        let song = |id: u32, title: &str| Song {
            id,
            title: title.to_string(),
            album: String::new(),
            artist: String::new(),
            duration: 60,
            cover_art: String::new(),
        };
        Player::new(vec![song(1, "b"), song(2, "c"), song(3, "a")], vec![]).unwrap()
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigates_in_title_order() {
        let player = player();
        let mut state = SongTableState::new();

        assert_eq!(state.as_widget(&player).process_event(&press(KeyCode::Down)), None);
        assert_eq!(state.selected_song_id(&player), Some(3));

        state.as_widget(&player).process_event(&press(KeyCode::Char('G')));
        assert_eq!(state.selected_song_id(&player), Some(2));

        state.as_widget(&player).process_event(&press(KeyCode::Char('j')));
        assert_eq!(state.selected_song_id(&player), Some(3));

        state.as_widget(&player).process_event(&press(KeyCode::Up));
        assert_eq!(state.selected_song_id(&player), Some(2));
    }

    #[test]
    fn play_and_remove_act_on_the_selected_row() {
        let player = player();
        let mut state = SongTableState::new();
        state.select_song(&player, 1);

        let mut table = state.as_widget(&player);
        assert_eq!(table.process_event(&press(KeyCode::Enter)), Some(SongTableAction::Play(1)));
        assert_eq!(table.process_event(&press(KeyCode::Delete)), Some(SongTableAction::Remove(1)));
    }

    #[test]
    fn actions_need_a_selection() {
        let player = player();
        let mut state = SongTableState::new();
        assert_eq!(state.as_widget(&player).process_event(&press(KeyCode::Enter)), None);
    }

    #[test]
    fn forwards_actions_as_commands() {
        let player = player();
        let mut state = SongTableState::new();
        state.select_song(&player, 2);
        let (event_tx, event_rx) = std::sync::mpsc::channel();

        AppEventProcessor::process_event(&mut state, &press(KeyCode::Char('d')), &player, &event_tx).unwrap();

        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::Command(AppCommand::RemoveSong(2)))
        ));
    }
}
