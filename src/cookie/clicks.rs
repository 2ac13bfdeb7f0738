/*
clicks.rs

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

//! Detect double-clicks.
//!
//! After the player refuses to take a break, a single click is no longer enough to collect a
//! cookie: the player must double-click it.

use std::time::Duration;

use super::config::{DOUBLE_CLICK_DISTANCE, DOUBLE_CLICK_WINDOW};

/// Track the previous click to detect double-clicks.
#[derive(Debug, Default, Clone)]
pub struct DoubleClick {
    /// Time and position of the previous click.
    last: Option<(Duration, f64, f64)>,
}

impl DoubleClick {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Forget the previous click.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Register a click and return whether it completes a double-click.
    ///
    /// The two clicks of a double-click must be less than [`DOUBLE_CLICK_WINDOW`] apart, and
    /// less than [`DOUBLE_CLICK_DISTANCE`] pixels apart on each axis.
    /// When the click completes a double-click, the tracker is cleared. Otherwise, the click
    /// becomes the first click of the next double-click.
    pub fn click(&mut self, now: Duration, x: f64, y: f64) -> bool {
        if let Some((time, last_x, last_y)) = self.last
            && (x - last_x).abs() < DOUBLE_CLICK_DISTANCE
            && (y - last_y).abs() < DOUBLE_CLICK_DISTANCE
            && now.saturating_sub(time) < DOUBLE_CLICK_WINDOW
        {
            self.last = None;
            return true;
        }
        self.last = Some((now, x, y));
        false
    }
}
