/*
config.rs

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

//! Cookie clicker constants.

use std::time::Duration;

/// Size of the play area.
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

/// Size of the cookie and of the distractors (burnt cookies). They are square.
pub const COOKIE_SIZE: f64 = 100.0;

/// Cookies and distractors appear at least that far from the screen edges.
pub const SPAWN_MARGIN: f64 = 80.0;

/// Number of lives at the beginning of a game.
pub const LIVES: u32 = 3;

/// A new distractor appears every time the score increases by that amount.
pub const DISTRACTOR_SPAWN_THRESHOLD: u32 = 5;

/// Number of distractors added each time the threshold is reached.
pub const DISTRACTORS_PER_SPAWN: usize = 1;

/// Initial speed of the distractors, in pixels per frame.
pub const BASE_SPEED: f64 = 2.0;

/// Speed increment every ten points.
pub const SPEED_INCREMENT: f64 = 0.3;

/// Maximum speed of the distractors.
pub const MAX_SPEED: f64 = 8.0;

/// Duration of a session before suggesting a break.
pub const ENGAGEMENT_PERIOD: Duration = Duration::from_secs(90);

/// Maximum time between the two clicks of a double-click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

/// Maximum distance, on each axis, between the two clicks of a double-click.
pub const DOUBLE_CLICK_DISTANCE: f64 = 20.0;

/// The timer is displayed in red below that remaining time.
pub const TIMER_WARNING: Duration = Duration::from_secs(10);
