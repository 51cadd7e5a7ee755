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

//! Input handling for the add-song form.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, AppEventProcessor},
    },
    components::AddSongForm,
    model::Player,
};

impl AppEventProcessor for AddSongForm {
    fn process_event(&mut self, event: &Event, _player: &Player, event_tx: &Sender<AppEvent>) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Esc => self.close(),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),

            // The form stays open until the player accepts the song.
            KeyCode::Enter => match self.to_new_song() {
                Ok(new_song) => event_tx.send(AppEvent::Command(AppCommand::AddSong(new_song)))?,
                Err(e) => event_tx.send(AppEvent::Error(e.to_string()))?,
            },

            _ => {
                self.inputs[self.focus].handle_event(event);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::error::PlayerError;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut AddSongForm, text: &str, event_tx: &Sender<AppEvent>) {
        let player = Player::default();
        for c in text.chars() {
            form.process_event(&press(KeyCode::Char(c)), &player, event_tx).unwrap();
        }
    }

    fn fill(form: &mut AddSongForm, fields: [&str; 5], event_tx: &Sender<AppEvent>) {
        let player = Player::default();
        for field in fields {
            type_text(form, field, event_tx);
            form.process_event(&press(KeyCode::Tab), &player, event_tx).unwrap();
        }
    }

    #[test]
    fn submits_a_complete_song() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut form = AddSongForm::new();
        form.open();

        fill(&mut form, ["Song", "Record", "Band", "03:15", "http://x/cover.png"], &event_tx);
        form.process_event(&press(KeyCode::Enter), &Player::default(), &event_tx).unwrap();

        match event_rx.try_recv() {
            Ok(AppEvent::Command(AppCommand::AddSong(song))) => {
                assert_eq!(song.id, None);
                assert_eq!(song.title, "Song");
                assert_eq!(song.album, "Record");
                assert_eq!(song.artist, "Band");
                assert_eq!(song.duration, 195);
                assert_eq!(song.cover_art, "http://x/cover.png");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(form.is_active);
    }

    #[test]
    fn rejects_a_bad_duration() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut form = AddSongForm::new();
        form.open();

        fill(&mut form, ["Song", "", "", "3 minutes", ""], &event_tx);
        assert_eq!(form.to_new_song(), Err(PlayerError::InvalidDuration("3 minutes".to_string())));

        form.process_event(&press(KeyCode::Enter), &Player::default(), &event_tx).unwrap();
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::Error(_))));
    }

    #[test]
    fn title_is_required() {
        let form = AddSongForm::new();
        assert_eq!(form.to_new_song(), Err(PlayerError::EmptyField("title")));
    }

    #[test]
    fn escape_closes_and_reopening_clears() {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut form = AddSongForm::new();
        form.open();
        type_text(&mut form, "draft", &event_tx);

        form.process_event(&press(KeyCode::Esc), &Player::default(), &event_tx).unwrap();
        assert!(!form.is_active);

        form.open();
        assert_eq!(form.to_new_song(), Err(PlayerError::EmptyField("title")));
    }

    #[test]
    fn shift_tab_moves_back() {
        let mut form = AddSongForm::new();
        form.open();
        form.previous_field();
        assert_eq!(form.focus, 4);
        form.next_field();
        assert_eq!(form.focus, 0);
    }
}
