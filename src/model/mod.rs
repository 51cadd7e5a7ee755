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

//! Domain models and core data structures.
//!
//! This module defines the records the player works with, songs and the
//! playlists that reference them, along with the [`Player`] container that
//! owns both for the lifetime of the session.

pub(crate) mod player;

use serde::{Deserialize, Serialize};

pub(crate) use player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Song {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    /// Length in seconds.
    pub(crate) duration: u32,
    pub(crate) cover_art: String,
}

/// A named, ordered list of song ids.
///
/// Songs are referenced by id only, the playlist does not own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Playlist {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) songs: Vec<u32>,
}

/// Song details supplied when adding a song to the player.
///
/// Leaving `id` empty lets the player pick the next free id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NewSong {
    pub(crate) id: Option<u32>,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) duration: u32,
    pub(crate) cover_art: String,
}

impl NewSong {
    pub(crate) fn into_song(self, id: u32) -> Song {
        Song {
            id,
            title: self.title,
            album: self.album,
            artist: self.artist,
            duration: self.duration,
            cover_art: self.cover_art,
        }
    }
}
