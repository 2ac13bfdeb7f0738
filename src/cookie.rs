/*
cookie.rs

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

//! Cookie clicker game.
//!
//! Click the golden cookie to score, and avoid the burnt cookies (distractors) that move across
//! the screen: clicking one of them costs a life.
//! A new distractor appears every five points.
//!
//! The game does not try to keep the player hooked:
//!
//! * After 90 seconds of play, the game congratulates the player and suggests taking a break.
//! * If the player keeps playing, the game becomes harder: every point adds a distractor, and
//!   cookies must be double-clicked.
//!
//! The [`game::CookieGame`] object holds the whole game status. The front end forwards player
//! input and frame ticks to it and draws the result.

pub mod clicks;
pub mod config;
pub mod distractor;
pub mod game;
pub mod rect;
