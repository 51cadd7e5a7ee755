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

//! Conversions between raw song data and the strings and colours shown in the
//! UI.

use ratatui::style::Color;

use crate::error::PlayerError;

/// Song length, in seconds, at or below which a duration is shown in green.
const SHORT_SONG_SECS: u32 = 120;

/// Song length, in seconds, at which the duration colour is fully yellow.
const MEDIUM_SONG_SECS: u32 = 270;

/// Song length, in seconds, at or above which a duration is shown in red.
const LONG_SONG_SECS: u32 = 420;

const COLOUR_SPAN: u32 = 220;

/// Elapsed-time thresholds (seconds) for the now-playing row colour, paired
/// with the colour that applies from that point on.
const PLAYING_COLOURS: [(u64, (u8, u8, u8)); 5] = [
    (0, (45, 241, 45)),
    (120, (143, 241, 45)),
    (220, (241, 241, 45)),
    (320, (241, 143, 45)),
    (420, (241, 45, 45)),
];

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// Minutes are not wrapped into hours, so very long playlists simply show
/// more minute digits.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(6000), "100:00");
/// ```
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Parses a duration typed by the user back into seconds.
///
/// Accepts `M:SS` or `MM:SS` (seconds must be two digits and below 60), or a
/// bare number of seconds.
///
/// # Errors
///
/// Returns [`PlayerError::InvalidDuration`] for anything else.
pub(crate) fn parse_time(text: &str) -> Result<u32, PlayerError> {
    let trimmed = text.trim();
    let invalid = || PlayerError::InvalidDuration(trimmed.to_string());

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match trimmed.split_once(':') {
        Some((mins, secs)) => {
            if !all_digits(mins) || !all_digits(secs) || secs.len() != 2 {
                return Err(invalid());
            }
            let mins: u32 = mins.parse().map_err(|_| invalid())?;
            let secs: u32 = secs.parse().map_err(|_| invalid())?;
            if secs >= 60 {
                return Err(invalid());
            }
            mins.checked_mul(60)
                .and_then(|m| m.checked_add(secs))
                .ok_or_else(invalid)
        }
        None if all_digits(trimmed) => trimmed.parse().map_err(|_| invalid()),
        None => Err(invalid()),
    }
}

/// Picks the colour used to display a song's duration.
///
/// Short songs are green, long songs are red, and anything in between fades
/// from green through yellow to red.
pub(crate) fn duration_colour(duration: u32) -> Color {
    if duration <= SHORT_SONG_SECS {
        return Color::Rgb(10, 230, 10);
    }
    if duration >= LONG_SONG_SECS {
        return Color::Rgb(230, 10, 10);
    }

    let band = MEDIUM_SONG_SECS - SHORT_SONG_SECS;
    if duration <= MEDIUM_SONG_SECS {
        let r = 10 + (duration - SHORT_SONG_SECS) * COLOUR_SPAN / band;
        Color::Rgb(r as u8, 230, 25)
    } else {
        let g = 230 - (duration - MEDIUM_SONG_SECS) * COLOUR_SPAN / band;
        Color::Rgb(230, g as u8, 25)
    }
}

/// Background colour of the now-playing row after `elapsed` seconds.
pub(crate) fn playing_colour(elapsed: u64) -> Color {
    let (_, (r, g, b)) = PLAYING_COLOURS
        .iter()
        .rev()
        .find(|(from, _)| elapsed >= *from)
        .copied()
        .unwrap_or(PLAYING_COLOURS[0]);
    Color::Rgb(r, g, b)
}
