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

//! Playback control and state management.
//!
//! This module provides the high-level [`PlaybackTimer`] interface used by
//! the UI to play songs. Playing a song means running its duration on a
//! background worker thread, which reports progress back to the main event
//! loop and announces when the song has finished so the next one can start.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{actions::events::AppEvent, player::commands::TimerCommand};

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Stopped,
}

/// A handle to the playback timer.
///
/// This struct acts as a command proxy; it does not keep time itself but
/// instead sends instructions to a background worker thread.
pub(crate) struct PlaybackTimer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<TimerCommand>,
}

impl PlaybackTimer {
    /// Spawns the timer worker thread and returns a new handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send progress and finish events back to
    ///   the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<TimerCommand>();

        commands::spawn_timer_worker(command_rx, event_tx);

        Self { command_tx }
    }

    /// Starts timing a song, replacing whatever was playing before.
    ///
    /// # Arguments
    ///
    /// * `song_id` - The song being played, echoed back in every event.
    /// * `duration` - Song length in seconds.
    pub(crate) fn play(&self, song_id: u32, duration: u32) -> Result<()> {
        self.command_tx.send(TimerCommand::Start { song_id, duration })?;
        Ok(())
    }

    /// Stop playback.
    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(TimerCommand::Stop)?;
        Ok(())
    }
}
