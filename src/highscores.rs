/*
highscores.rs

Copyright 2025 Hervé Quatremain

This file is part of Yuletide Arcade.

Yuletide Arcade is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Yuletide Arcade is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Yuletide Arcade. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the cookie clicker scoreboard.
//!
//! The main object, [`HighScores`], maintains the list of the best sessions.
//! This object is saved when a session ends and makes it to the scoreboard, and is restored when
//! the game starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use chrono::{DateTime, Local};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::cookie::game::EndReason;

/// Number of entries in the scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// How a session ended, as stored in the scoreboard.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ending {
    GameOver,
    Break,
}

impl From<EndReason> for Ending {
    fn from(reason: EndReason) -> Self {
        match reason {
            EndReason::GameOver => Ending::GameOver,
            EndReason::Break => Ending::Break,
        }
    }
}

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Number of collected cookies.
    pub cookies: u32,

    /// How the session ended.
    pub ending: Ending,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

impl Score {
    /// Completion date and time, for display.
    pub fn when_local(&self) -> String {
        let when: DateTime<Local> = self.when.into();
        when.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Sorted list of the top scores.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Sorted list of the top scores, best first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    /// Sessions without any cookie are not recorded.
    /// For equal scores, the older score stays first.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn add_score(&mut self, cookies: u32, ending: Ending, when: SystemTime) -> Option<usize> {
        if cookies == 0 {
            return None;
        }
        let index: usize = self
            .top
            .iter()
            .position(|s| cookies > s.cookies)
            .unwrap_or(self.top.len());
        if index >= BOARD_SIZE {
            return None;
        }

        self.top.insert(
            index,
            Score {
                cookies,
                ending,
                when,
            },
        );
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }

    /// Return the list of [`Score`], best first.
    pub fn get_scores(&self) -> &[Score] {
        &self.top
    }

    /// Return the best number of cookies, or 0 when the board is empty.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn best(&self) -> u32 {
        self.top.first().map_or(0, |s| s.cookies)
    }

    /// Return whether the scoreboard is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}
