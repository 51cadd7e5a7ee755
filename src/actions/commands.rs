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

//! Application command processing.
//!
//! An [`AppCommand`] is a high-level request raised by a UI component, a key
//! binding or the command line. Commands travel through the event channel and
//! are applied on the main thread by [`handle_command`], which is the only
//! place the [`Player`](crate::model::Player) is mutated.

use anyhow::Result;
use tracing::info;

use crate::{
    App, Pane,
    actions::events::AppEvent,
    error::PlayerError,
    model::NewSong,
    player::PlayerState,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    PlaySong(u32),
    /// Play whatever follows the given song.
    PlayNext(u32),
    PlayPlaylist(u32),
    Stop,
    RemoveSong(u32),
    AddSong(NewSong),
    FocusPane(Pane),
    OpenAddSongForm,
    ExitApplication,
}

/// Applies a single command to the application state.
///
/// # Errors
///
/// Returns an error if the command refers to a song or playlist that does not
/// exist, if a new song is rejected by the player, or if the playback timer
/// or event channel is gone.
pub(crate) fn handle_command(app: &mut App, command: AppCommand) -> Result<()> {
    match command {
        AppCommand::PlaySong(song_id) => play_song(app, song_id)?,

        AppCommand::PlayNext(song_id) => {
            let next_id = app.player.next_after(song_id)?;
            play_song(app, next_id)?;
        }

        AppCommand::PlayPlaylist(playlist_id) => {
            let playlist = app.player.playlist_by_id(playlist_id)?;
            let first = playlist
                .songs
                .first()
                .copied()
                .ok_or(PlayerError::EmptyPlaylist(playlist_id))?;
            play_song(app, first)?;
        }

        AppCommand::Stop => stop(app)?,

        AppCommand::RemoveSong(song_id) => {
            app.player.remove_song(song_id)?;
            if app.now_playing == Some(song_id) {
                stop(app)?;
            }
        }

        AppCommand::AddSong(new_song) => {
            let song_id = app.player.add_song(new_song)?;
            app.add_song_form.close();
            app.pane = Pane::Songs;
            app.song_table.select_song(&app.player, song_id);
        }

        AppCommand::FocusPane(pane) => app.pane = pane,

        AppCommand::OpenAddSongForm => app.add_song_form.open(),

        AppCommand::ExitApplication => app.event_tx.send(AppEvent::ExitApplication)?,
    }

    Ok(())
}

/// Marks a song as playing and starts timing it.
fn play_song(app: &mut App, song_id: u32) -> Result<()> {
    let song = app.player.song_by_id(song_id)?;
    info!(song_id, title = %song.title, duration = song.duration, "Playing song");

    app.timer.play(song.id, song.duration)?;

    app.now_playing = Some(song_id);
    app.elapsed = 0;
    app.player_state = PlayerState::Playing;

    Ok(())
}

fn stop(app: &mut App) -> Result<()> {
    app.timer.stop()?;

    if let Some(song_id) = app.now_playing.take() {
        info!(song_id, "Stopped playback");
    }
    app.elapsed = 0;
    app.player_state = PlayerState::Stopped;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        model::{Player, Playlist, Song},
    };

    fn test_app() -> App {
        let song = |id: u32, title: &str, duration: u32| Song {
            id,
            title: title.to_string(),
            album: "Album".to_string(),
            artist: "Artist".to_string(),
            duration,
            cover_art: String::new(),
        };
        let player = Player::new(
            vec![song(1, "One", 100), song(2, "Two", 200), song(4, "Four", 400)],
            vec![
                Playlist {
                    id: 1,
                    name: "evens".to_string(),
                    songs: vec![4, 2],
                },
                Playlist {
                    id: 2,
                    name: "nothing".to_string(),
                    songs: vec![],
                },
            ],
        )
        .unwrap();
        App::new(AppConfig::default(), player)
    }

    fn new_song(title: &str) -> NewSong {
        NewSong {
            title: title.to_string(),
            duration: 65,
            ..NewSong::default()
        }
    }

    #[test]
    fn playing_a_song_resets_progress() {
        let mut app = test_app();
        app.elapsed = 30;
        handle_command(&mut app, AppCommand::PlaySong(2)).unwrap();
        assert_eq!(app.now_playing, Some(2));
        assert_eq!(app.elapsed, 0);
        assert_eq!(app.player_state, PlayerState::Playing);
    }

    #[test]
    fn playing_an_unknown_song_changes_nothing() {
        let mut app = test_app();
        handle_command(&mut app, AppCommand::PlaySong(1)).unwrap();
        let err = handle_command(&mut app, AppCommand::PlaySong(3)).unwrap_err();
        assert_eq!(err.downcast_ref::<PlayerError>(), Some(&PlayerError::SongNotFound(3)));
        assert_eq!(app.now_playing, Some(1));
    }

    #[test]
    fn playlist_starts_with_its_first_song() {
        let mut app = test_app();
        handle_command(&mut app, AppCommand::PlayPlaylist(1)).unwrap();
        assert_eq!(app.now_playing, Some(4));
    }

    #[test]
    fn empty_playlist_cannot_be_played() {
        let mut app = test_app();
        let err = handle_command(&mut app, AppCommand::PlayPlaylist(2)).unwrap_err();
        assert_eq!(err.downcast_ref::<PlayerError>(), Some(&PlayerError::EmptyPlaylist(2)));
        assert_eq!(app.now_playing, None);
    }

    #[test]
    fn removing_the_playing_song_stops_playback() {
        let mut app = test_app();
        handle_command(&mut app, AppCommand::PlaySong(2)).unwrap();
        handle_command(&mut app, AppCommand::RemoveSong(2)).unwrap();
        assert_eq!(app.now_playing, None);
        assert_eq!(app.player_state, PlayerState::Stopped);
        assert_eq!(app.player.playlist_by_id(1).unwrap().songs, [4]);
    }

    #[test]
    fn removing_another_song_keeps_playing() {
        let mut app = test_app();
        handle_command(&mut app, AppCommand::PlaySong(1)).unwrap();
        handle_command(&mut app, AppCommand::RemoveSong(4)).unwrap();
        assert_eq!(app.now_playing, Some(1));
    }

    #[test]
    fn added_song_gets_next_free_id_and_is_selected() {
        let mut app = test_app();
        app.add_song_form.open();
        handle_command(&mut app, AppCommand::AddSong(new_song("Three"))).unwrap();

        assert_eq!(app.player.song_by_id(3).unwrap().title, "Three");
        assert!(!app.add_song_form.is_active);
        assert_eq!(app.song_table.selected_song_id(&app.player), Some(3));
    }

    #[test]
    fn rejected_song_keeps_the_form_open() {
        let mut app = test_app();
        app.add_song_form.open();
        let song = NewSong {
            id: Some(2),
            ..new_song("Dup")
        };
        assert!(handle_command(&mut app, AppCommand::AddSong(song)).is_err());
        assert!(app.add_song_form.is_active);
        assert_eq!(app.player.songs().len(), 3);
    }

    #[test]
    fn stop_clears_the_playing_song() {
        let mut app = test_app();
        handle_command(&mut app, AppCommand::PlaySong(4)).unwrap();
        handle_command(&mut app, AppCommand::Stop).unwrap();
        assert_eq!(app.now_playing, None);
        assert_eq!(app.player_state, PlayerState::Stopped);
    }
}
