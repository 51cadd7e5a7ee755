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

//! Timer worker backing song playback.
//!
//! The worker owns the only running timer. It waits for [`TimerCommand`]s
//! and, while a song is playing, wakes up several times a second to broadcast
//! [`AppEvent`]s:
//!
//! 1. [`AppEvent::TimeChanged`] whenever another whole second has elapsed.
//! 2. [`AppEvent::TrackFinished`] once the song's duration has elapsed, after
//!    which the worker goes idle until the next command.
//!
//! Starting a song while another one is playing replaces the running timer,
//! so at most one song is ever timed.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use tracing::debug;

use crate::actions::events::AppEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub(crate) enum TimerCommand {
    Start { song_id: u32, duration: u32 },
    Stop,
}

struct RunningSong {
    song_id: u32,
    duration: u64,
    started: Instant,
    reported_secs: u64,
}

/// Spawns the timer worker thread.
///
/// The worker exits when either channel disconnects, which happens when the
/// application shuts down.
pub(crate) fn spawn_timer_worker(command_rx: Receiver<TimerCommand>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        if let Err(e) = timer_worker(command_rx, event_tx) {
            debug!("Playback timer stopped: {e}");
        }
    });
}

fn timer_worker(command_rx: Receiver<TimerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut current: Option<RunningSong> = None;

    loop {
        let command = if current.is_some() {
            match command_rx.recv_timeout(POLL_INTERVAL) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        } else {
            match command_rx.recv() {
                Ok(command) => Some(command),
                Err(_) => return Ok(()),
            }
        };

        match command {
            Some(TimerCommand::Start { song_id, duration }) => {
                debug!(song_id, duration, "Timer started");
                current = Some(RunningSong {
                    song_id,
                    duration: u64::from(duration),
                    started: Instant::now(),
                    reported_secs: 0,
                });
            }
            Some(TimerCommand::Stop) => {
                if let Some(song) = current.take() {
                    debug!(song_id = song.song_id, "Timer stopped");
                }
            }
            None => {}
        }

        if let Some(song) = current.as_mut() {
            let elapsed = song.started.elapsed().as_secs();

            if elapsed >= song.duration {
                debug!(song_id = song.song_id, "Song finished");
                let song_id = song.song_id;
                current = None;
                event_tx.send(AppEvent::TrackFinished(song_id))?;
            } else if elapsed > song.reported_secs {
                song.reported_secs = elapsed;
                event_tx.send(AppEvent::TimeChanged(song.song_id, elapsed))?;
            }
        }
    }
}
