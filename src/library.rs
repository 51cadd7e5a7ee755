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

//! Loading the songs and playlists a session starts with.
//!
//! A library file is a JSON document with a `songs` and a `playlists` array;
//! without one the player starts from a small built-in library. Nothing is
//! ever written back.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::model::{Player, Playlist, Song};

#[derive(Debug, Default, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    songs: Vec<Song>,
    #[serde(default)]
    playlists: Vec<Playlist>,
}

/// Builds the session player, from `path` when given or from the built-in
/// library otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid library JSON, or
/// contains duplicate ids.
pub(crate) fn load_player(path: Option<&Path>) -> Result<Player> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read library file {}", path.display()))?;
            let player = parse_library(&text)
                .with_context(|| format!("Invalid library file {}", path.display()))?;
            info!(
                path = %path.display(),
                songs = player.songs().len(),
                playlists = player.playlists().len(),
                "Loaded library"
            );
            Ok(player)
        }
        None => {
            info!("No library file configured, using the built-in library");
            Ok(builtin_player())
        }
    }
}

fn parse_library(text: &str) -> Result<Player> {
    let library: LibraryFile = serde_json::from_str(text)?;
    Ok(Player::new(library.songs, library.playlists)?)
}

fn builtin_player() -> Player {
    let song = |id: u32, title: &str, album: &str, artist: &str, duration: u32| Song {
        id,
        title: title.to_string(),
        album: album.to_string(),
        artist: artist.to_string(),
        duration,
        cover_art: format!("https://covers.example.com/{id}.jpg"),
    };

    let songs = vec![
        song(1, "Vortex", "Wallflowers", "Jinjer", 242),
        song(2, "Vinda", "Godtfolk", "Songleikr", 160),
        song(7, "Shiroyama", "The Last Stand", "Sabaton", 213),
        song(3, "Thunderstruck", "The Razors Edge", "AC/DC", 292),
        song(4, "All is One", "All is One", "Orphaned Land", 270),
        song(5, "As a Stone", "Show Us What You Got", "Full Trunk", 259),
        song(6, "Sons of Winter and Stars", "Time I", "Wintersun", 811),
    ];

    let playlists = vec![
        Playlist {
            id: 1,
            name: "Metal".to_string(),
            songs: vec![1, 7, 4, 6],
        },
        Playlist {
            id: 5,
            name: "Israeli".to_string(),
            songs: vec![4, 5],
        },
    ];

    Player::new(songs, playlists).unwrap_or_default()
}
