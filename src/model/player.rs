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

//! The session-wide song and playlist collection.
//!
//! [`Player`] is the single owner of every [`Song`] and [`Playlist`]. All
//! lookups are linear scans over small in-memory vectors, and every mutation
//! keeps playlist references consistent with the song collection.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{
    error::PlayerError,
    model::{NewSong, Playlist, Song},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct Player {
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
}

impl Player {
    /// Builds a player from an initial set of songs and playlists.
    ///
    /// Playlist entries naming songs that do not exist are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if two songs, or two playlists, share an id, or if a
    /// song has id zero.
    pub(crate) fn new(songs: Vec<Song>, mut playlists: Vec<Playlist>) -> Result<Self, PlayerError> {
        let mut song_ids = HashSet::new();
        for song in &songs {
            if song.id == 0 {
                return Err(PlayerError::InvalidSongId(song.id.to_string()));
            }
            if !song_ids.insert(song.id) {
                return Err(PlayerError::SongIdTaken(song.id));
            }
        }

        let mut playlist_ids = HashSet::new();
        for playlist in &mut playlists {
            if !playlist_ids.insert(playlist.id) {
                return Err(PlayerError::PlaylistIdTaken(playlist.id));
            }

            let before = playlist.songs.len();
            playlist.songs.retain(|id| song_ids.contains(id));
            let dropped = before - playlist.songs.len();
            if dropped > 0 {
                warn!(playlist = playlist.id, dropped, "Dropped unknown songs from playlist");
            }
        }

        Ok(Self { songs, playlists })
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn song_by_id(&self, id: u32) -> Result<&Song, PlayerError> {
        self.songs
            .iter()
            .find(|song| song.id == id)
            .ok_or(PlayerError::SongNotFound(id))
    }

    pub(crate) fn playlist_by_id(&self, id: u32) -> Result<&Playlist, PlayerError> {
        self.playlists
            .iter()
            .find(|playlist| playlist.id == id)
            .ok_or(PlayerError::PlaylistNotFound(id))
    }

    /// Total length, in seconds, of every song in a playlist.
    pub(crate) fn playlist_duration(&self, id: u32) -> Result<u32, PlayerError> {
        let playlist = self.playlist_by_id(id)?;
        playlist.songs.iter().try_fold(0u32, |total, song_id| {
            let song = self.song_by_id(*song_id)?;
            Ok(total.saturating_add(song.duration))
        })
    }

    /// Songs in ascending title order, ignoring case. Equal titles keep their
    /// insertion order.
    pub(crate) fn songs_by_title(&self) -> Vec<&Song> {
        let mut sorted: Vec<&Song> = self.songs.iter().collect();
        sorted.sort_by_key(|song| song.title.to_lowercase());
        sorted
    }

    /// Playlists in ascending name order, ignoring case. Equal names keep
    /// their insertion order.
    pub(crate) fn playlists_by_name(&self) -> Vec<&Playlist> {
        let mut sorted: Vec<&Playlist> = self.playlists.iter().collect();
        sorted.sort_by_key(|playlist| playlist.name.to_lowercase());
        sorted
    }

    /// The smallest positive id not used by any song.
    pub(crate) fn next_song_id(&self) -> u32 {
        let taken: HashSet<u32> = self.songs.iter().map(|song| song.id).collect();
        (1..).find(|id| !taken.contains(id)).unwrap_or_default()
    }

    /// Adds a song and returns the id it was stored under.
    ///
    /// # Errors
    ///
    /// * [`PlayerError::InvalidSongId`] if an explicit id of zero is given.
    /// * [`PlayerError::SongIdTaken`] if the explicit id belongs to another
    ///   song.
    pub(crate) fn add_song(&mut self, new_song: NewSong) -> Result<u32, PlayerError> {
        let id = match new_song.id {
            None => self.next_song_id(),
            Some(0) => return Err(PlayerError::InvalidSongId("0".to_string())),
            Some(id) if self.song_by_id(id).is_ok() => return Err(PlayerError::SongIdTaken(id)),
            Some(id) => id,
        };

        let song = new_song.into_song(id);
        info!(id, title = %song.title, "Added song");
        self.songs.push(song);

        Ok(id)
    }

    /// Removes a song, and every reference to it from the playlists.
    pub(crate) fn remove_song(&mut self, id: u32) -> Result<Song, PlayerError> {
        let index = self
            .songs
            .iter()
            .position(|song| song.id == id)
            .ok_or(PlayerError::SongNotFound(id))?;
        let song = self.songs.remove(index);

        for playlist in &mut self.playlists {
            let before = playlist.songs.len();
            playlist.songs.retain(|song_id| *song_id != id);
            if playlist.songs.len() != before {
                debug!(song = id, playlist = playlist.id, "Pruned song from playlist");
            }
        }

        info!(id, title = %song.title, "Removed song");
        Ok(song)
    }

    /// The id of the song that follows `id` in title order, wrapping back to
    /// the first song after the last.
    pub(crate) fn next_after(&self, id: u32) -> Result<u32, PlayerError> {
        let sorted = self.songs_by_title();
        let index = sorted
            .iter()
            .position(|song| song.id == id)
            .ok_or(PlayerError::SongNotFound(id))?;
        Ok(sorted[(index + 1) % sorted.len()].id)
    }
}

/// Parses a song id typed by the user.
pub(crate) fn parse_song_id(text: &str) -> Result<u32, PlayerError> {
    match text.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PlayerError::InvalidSongId(text.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: u32, title: &str, duration: u32) -> Song {
        Song {
            id,
            title: title.to_string(),
            album: format!("{title} album"),
            artist: format!("{title} artist"),
            duration,
            cover_art: format!("https://example.com/{id}.jpg"),
        }
    }

    fn playlist(id: u32, name: &str, songs: &[u32]) -> Playlist {
        Playlist {
            id,
            name: name.to_string(),
            songs: songs.to_vec(),
        }
    }

    fn new_song(id: Option<u32>, title: &str) -> NewSong {
        NewSong {
            id,
            title: title.to_string(),
            album: "Album".to_string(),
            artist: "Artist".to_string(),
            duration: 200,
            cover_art: String::new(),
        }
    }

    fn sample_player() -> Player {
        Player::new(
            vec![
                song(1, "vinyl", 200),
                song(2, "Angel", 65),
                song(3, "Cruel", 420),
                song(5, "bones", 300),
            ],
            vec![
                playlist(1, "rock", &[1, 3]),
                playlist(2, "Chill", &[2, 5, 1]),
                playlist(3, "empty", &[]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn finds_songs_and_playlists_by_id() {
        let player = sample_player();
        assert_eq!(player.song_by_id(3).unwrap().title, "Cruel");
        assert_eq!(player.playlist_by_id(2).unwrap().name, "Chill");
        assert_eq!(player.song_by_id(4), Err(PlayerError::SongNotFound(4)));
        assert_eq!(player.playlist_by_id(9), Err(PlayerError::PlaylistNotFound(9)));
    }

    #[test]
    fn playlist_duration_sums_its_songs() {
        let player = sample_player();
        assert_eq!(player.playlist_duration(1), Ok(620));
        assert_eq!(player.playlist_duration(2), Ok(565));
        assert_eq!(player.playlist_duration(3), Ok(0));
        assert_eq!(player.playlist_duration(7), Err(PlayerError::PlaylistNotFound(7)));
    }

    #[test]
    fn sorts_songs_by_title_ignoring_case() {
        let player = sample_player();
        let titles: Vec<&str> = player.songs_by_title().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Angel", "bones", "Cruel", "vinyl"]);
    }

    #[test]
    fn sorting_keeps_equal_titles_in_insertion_order() {
        let player = Player::new(
            vec![song(4, "same", 1), song(2, "SAME", 2), song(9, "Same", 3), song(1, "a", 4)],
            vec![],
        )
        .unwrap();
        let ids: Vec<u32> = player.songs_by_title().iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 4, 2, 9]);
    }

    #[test]
    fn sorts_playlists_by_name_ignoring_case() {
        let player = sample_player();
        let names: Vec<&str> = player.playlists_by_name().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Chill", "empty", "rock"]);
    }

    #[test]
    fn sorting_does_not_reorder_the_collection() {
        let player = sample_player();
        let _ = player.songs_by_title();
        let ids: Vec<u32> = player.songs().iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3, 5]);
    }

    #[test]
    fn adding_without_id_fills_the_first_gap() {
        let mut player = sample_player();
        assert_eq!(player.add_song(new_song(None, "first gap")), Ok(4));
        assert_eq!(player.add_song(new_song(None, "after last")), Ok(6));
        assert_eq!(player.song_by_id(4).unwrap().title, "first gap");
    }

    #[test]
    fn adding_to_an_empty_player_starts_at_one() {
        let mut player = Player::default();
        assert_eq!(player.next_song_id(), 1);
        assert_eq!(player.add_song(new_song(None, "only")), Ok(1));
    }

    #[test]
    fn adding_with_explicit_id() {
        let mut player = sample_player();
        assert_eq!(player.add_song(new_song(Some(42), "answer")), Ok(42));
        assert_eq!(player.song_by_id(42).unwrap().title, "answer");
    }

    #[test]
    fn adding_rejects_taken_and_zero_ids() {
        let mut player = sample_player();
        assert_eq!(player.add_song(new_song(Some(2), "dup")), Err(PlayerError::SongIdTaken(2)));
        assert!(matches!(
            player.add_song(new_song(Some(0), "zero")),
            Err(PlayerError::InvalidSongId(_))
        ));
        assert_eq!(player.songs().len(), 4);
    }

    #[test]
    fn removing_a_song_prunes_every_playlist() {
        let mut player = sample_player();
        let removed = player.remove_song(1).unwrap();
        assert_eq!(removed.title, "vinyl");
        assert_eq!(player.song_by_id(1), Err(PlayerError::SongNotFound(1)));
        assert_eq!(player.playlist_by_id(1).unwrap().songs, [3]);
        assert_eq!(player.playlist_by_id(2).unwrap().songs, [2, 5]);
        assert_eq!(player.playlist_duration(2), Ok(365));
    }

    #[test]
    fn removing_a_repeated_song_removes_all_occurrences() {
        let mut player =
            Player::new(vec![song(1, "a", 10), song(2, "b", 20)], vec![playlist(1, "p", &[1, 2, 1])]).unwrap();
        player.remove_song(1).unwrap();
        assert_eq!(player.playlist_by_id(1).unwrap().songs, [2]);
    }

    #[test]
    fn removing_an_unknown_song_fails() {
        let mut player = sample_player();
        assert_eq!(player.remove_song(77), Err(PlayerError::SongNotFound(77)));
        assert_eq!(player.songs().len(), 4);
    }

    #[test]
    fn removed_id_is_reused() {
        let mut player = sample_player();
        player.remove_song(2).unwrap();
        assert_eq!(player.next_song_id(), 2);
    }

    #[test]
    fn next_after_follows_title_order_and_wraps() {
        let player = sample_player();
        // Angel(2), bones(5), Cruel(3), vinyl(1)
        assert_eq!(player.next_after(2), Ok(5));
        assert_eq!(player.next_after(3), Ok(1));
        assert_eq!(player.next_after(1), Ok(2));
        assert_eq!(player.next_after(8), Err(PlayerError::SongNotFound(8)));
    }

    #[test]
    fn next_after_a_single_song_is_itself() {
        let player = Player::new(vec![song(7, "solo", 10)], vec![]).unwrap();
        assert_eq!(player.next_after(7), Ok(7));
    }

    #[test]
    fn construction_rejects_duplicate_ids() {
        assert_eq!(
            Player::new(vec![song(1, "a", 1), song(1, "b", 2)], vec![]).unwrap_err(),
            PlayerError::SongIdTaken(1)
        );
        assert_eq!(
            Player::new(vec![], vec![playlist(3, "x", &[]), playlist(3, "y", &[])]).unwrap_err(),
            PlayerError::PlaylistIdTaken(3)
        );
    }

    #[test]
    fn construction_drops_dangling_playlist_entries() {
        let player = Player::new(vec![song(1, "a", 1)], vec![playlist(1, "p", &[1, 99, 1])]).unwrap();
        assert_eq!(player.playlist_by_id(1).unwrap().songs, [1, 1]);
    }

    #[test]
    fn parses_typed_song_ids() {
        assert_eq!(parse_song_id(" 12 "), Ok(12));
        assert!(matches!(parse_song_id("0"), Err(PlayerError::InvalidSongId(_))));
        assert!(matches!(parse_song_id("abc"), Err(PlayerError::InvalidSongId(_))));
        assert!(matches!(parse_song_id("-3"), Err(PlayerError::InvalidSongId(_))));
    }
}
