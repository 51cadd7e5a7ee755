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

//! The add-song form.
//!
//! Holds one text input per song field. Submitting validates the typed values
//! and hands a [`NewSong`] to the application, which assigns the id.

mod event;
mod render;

use tui_input::Input;

use crate::{error::PlayerError, model::NewSong, util::format::parse_time};

const TITLE: usize = 0;
const ALBUM: usize = 1;
const ARTIST: usize = 2;
const DURATION: usize = 3;
const COVER_ART: usize = 4;

const FIELD_LABELS: [&str; 5] = ["Title", "Album", "Artist", "Duration", "Cover art"];

pub(crate) struct AddSongForm {
    pub(crate) is_active: bool,
    inputs: [Input; 5],
    focus: usize,
}

impl AddSongForm {
    pub(crate) fn new() -> Self {
        Self {
            is_active: false,
            inputs: Default::default(),
            focus: TITLE,
        }
    }

    /// Shows an empty form with the title field focused.
    pub(crate) fn open(&mut self) {
        self.inputs.iter_mut().for_each(Input::reset);
        self.focus = TITLE;
        self.is_active = true;
    }

    pub(crate) fn close(&mut self) {
        self.is_active = false;
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    fn previous_field(&mut self) {
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    fn value(&self, field: usize) -> String {
        self.inputs[field].value().trim().to_string()
    }

    /// Validates the form contents.
    ///
    /// # Errors
    ///
    /// The title is required and the duration must be a valid `MM:SS` time.
    pub(crate) fn to_new_song(&self) -> Result<NewSong, PlayerError> {
        let title = self.value(TITLE);
        if title.is_empty() {
            return Err(PlayerError::EmptyField("title"));
        }

        Ok(NewSong {
            id: None,
            title,
            album: self.value(ALBUM),
            artist: self.value(ARTIST),
            duration: parse_time(&self.value(DURATION))?,
            cover_art: self.value(COVER_ART),
        })
    }
}
