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

//! Domain errors raised by the player model.
//!
//! Application-level plumbing (terminal, channels, files) uses `anyhow`; these
//! are the errors a user action can run into, and are shown in the status
//! line when they abort an action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum PlayerError {
    #[error("no song with id {0}")]
    SongNotFound(u32),

    #[error("no playlist with id {0}")]
    PlaylistNotFound(u32),

    #[error("song id {0} is already taken")]
    SongIdTaken(u32),

    #[error("playlist id {0} is already taken")]
    PlaylistIdTaken(u32),

    #[error("playlist {0} has no songs")]
    EmptyPlaylist(u32),

    #[error("invalid song id '{0}', expected a positive number")]
    InvalidSongId(String),

    #[error("invalid duration '{0}', expected MM:SS")]
    InvalidDuration(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
